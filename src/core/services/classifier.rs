//! Comment classifier - recognizes approval commands and QA assignments
//!
//! Every comment body falls into exactly one [`Classification`]. Patterns are
//! checked in a fixed order and the first match wins:
//!
//! 1. approve command (`/lgtm`, `/lgtm no-issue`)
//! 2. cancel command (`/lgtm cancel`)
//! 3. assignment announcement (`Requesting review from QA contact: /cc @name`)
//!
//! Commands must occupy a whole line (case-insensitive, trailing whitespace
//! allowed). The announcement may appear anywhere in the body.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a single comment (or review body) reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The author approves
    ApproveCommand,
    /// The author withdraws their approval
    CancelCommand,
    /// A QA contact is being assigned
    AssignmentAnnouncement {
        /// Assigned identity, `None` when the mention is malformed
        approver: Option<String>,
    },
    /// Nothing recognized
    Inert,
}

/// Textual syntax of the commands and the assignment announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSyntax {
    /// Approval keyword, written after a leading `/`
    #[serde(default = "default_keyword")]
    pub keyword: String,

    /// Words that may follow the keyword on an approve line
    #[serde(default = "default_qualifiers")]
    pub qualifiers: Vec<String>,

    /// Phrase that introduces the QA contact mention
    #[serde(default = "default_announcement")]
    pub announcement: String,
}

fn default_keyword() -> String {
    "lgtm".to_string()
}

fn default_qualifiers() -> Vec<String> {
    vec!["no-issue".to_string()]
}

fn default_announcement() -> String {
    "Requesting review from QA contact:".to_string()
}

impl Default for CommandSyntax {
    fn default() -> Self {
        Self {
            keyword: default_keyword(),
            qualifiers: default_qualifiers(),
            announcement: default_announcement(),
        }
    }
}

static STANDARD: LazyLock<Classifier> = LazyLock::new(|| {
    Classifier::new(&CommandSyntax::default()).expect("built-in command syntax compiles")
});

/// Compiled command patterns
#[derive(Debug, Clone)]
pub struct Classifier {
    approve: Regex,
    cancel: Regex,
    announcement: Regex,
}

impl Classifier {
    /// Compile the patterns for a command syntax
    ///
    /// Keyword, qualifiers and announcement are matched literally.
    pub fn new(syntax: &CommandSyntax) -> Result<Self, regex::Error> {
        let keyword = regex::escape(&syntax.keyword);
        let approve = if syntax.qualifiers.is_empty() {
            format!(r"(?mi)^/{keyword}[[:space:]]*$")
        } else {
            let qualifiers: Vec<String> =
                syntax.qualifiers.iter().map(String::as_str).map(regex::escape).collect();
            format!(r"(?mi)^/{keyword}(?: (?:{}))?[[:space:]]*$", qualifiers.join("|"))
        };
        let cancel = format!(r"(?mi)^/{keyword} cancel[[:space:]]*$");
        let announcement = format!(
            r"{}[[:space:]]+/cc @[[:alnum:]]+",
            regex::escape(&syntax.announcement)
        );

        Ok(Self {
            approve: Regex::new(&approve)?,
            cancel: Regex::new(&cancel)?,
            announcement: Regex::new(&announcement)?,
        })
    }

    /// Classifier for the default `/lgtm` syntax
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Whether `body` holds an approve command
    #[must_use]
    pub fn is_approve(&self, body: &str) -> bool {
        self.approve.is_match(body)
    }

    /// Whether `body` holds a cancel command
    #[must_use]
    pub fn is_cancel(&self, body: &str) -> bool {
        self.cancel.is_match(body)
    }

    /// Extract the identity from the first assignment announcement in `body`
    ///
    /// Returns `None` when there is no announcement, `Some(None)` when the
    /// matched text does not split into exactly two parts around `@`.
    #[must_use]
    pub fn assignment(&self, body: &str) -> Option<Option<String>> {
        let found = self.announcement.find(body)?;
        let parts: Vec<&str> = found.as_str().split('@').collect();
        match parts.as_slice() {
            [_, name] => Some(Some((*name).to_string())),
            _ => Some(None),
        }
    }

    /// Classify a body, first match wins
    #[must_use]
    pub fn classify(&self, body: &str) -> Classification {
        if self.is_approve(body) {
            return Classification::ApproveCommand;
        }
        if self.is_cancel(body) {
            return Classification::CancelCommand;
        }
        match self.assignment(body) {
            Some(approver) => Classification::AssignmentAnnouncement { approver },
            None => Classification::Inert,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        STANDARD.clone()
    }
}

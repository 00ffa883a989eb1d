//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::StatusChange;
use crate::core::services::{ThreadEvaluation, TicketOutcome, VerifyReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a `verify` batch
#[derive(Debug, Serialize)]
pub struct VerifyResult {
    /// Number of tickets that got a verdict
    pub verified: usize,
    /// Number of those that were approved
    pub approved: usize,
    /// Per-ticket verdicts
    pub outcomes: Vec<TicketOutcome>,
    /// Rendered per-ticket errors
    pub errors: Vec<String>,
    /// Status changes applied to approved tickets
    pub transitions: Vec<StatusChange>,
}

impl From<&VerifyReport> for VerifyResult {
    fn from(report: &VerifyReport) -> Self {
        Self {
            verified: report.outcomes.len(),
            approved: report.approved().count(),
            outcomes: report.outcomes.clone(),
            errors: report.errors.iter().map(ToString::to_string).collect(),
            transitions: Vec::new(),
        }
    }
}

impl VerifyResult {
    /// Attach the status changes applied during the batch
    #[must_use]
    pub fn with_transitions(mut self, transitions: Vec<StatusChange>) -> Self {
        self.transitions = transitions;
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if self.outcomes.is_empty() && self.errors.is_empty() && self.transitions.is_empty() {
            out.push_str("No tickets given.\n");
            return out;
        }

        for outcome in &self.outcomes {
            let label = if outcome.evaluation.approved {
                "APPROVED".green().bold()
            } else {
                "NOT APPROVED".yellow().bold()
            };
            out.push_str(&format!(
                "  [{label}] ticket {} ({}) via {}\n",
                outcome.ticket.id, outcome.ticket.status, outcome.thread
            ));
            out.push_str(&describe(&outcome.evaluation));
        }

        if !self.transitions.is_empty() {
            out.push_str(&format!("\n{}\n", "Status changes:".cyan().bold()));
            for change in &self.transitions {
                out.push_str(&format!(
                    "  ticket {}: {} -> {}\n",
                    change.ticket, change.from, change.to
                ));
            }
        }

        if !self.errors.is_empty() {
            out.push_str(&format!("\n{}\n", "Errors:".red().bold()));
            for err in &self.errors {
                out.push_str(&format!("  {err}\n"));
            }
        }

        out.push_str(&format!(
            "\n{} of {} verified ticket(s) approved by QA, {} skipped\n",
            self.approved,
            self.verified,
            self.errors.len()
        ));
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of evaluating a single thread file
#[derive(Debug, Serialize)]
pub struct EvaluateResult {
    /// Whether reviews were replayed
    pub reviews_considered: bool,
    /// The evaluation
    #[serde(flatten)]
    pub evaluation: ThreadEvaluation,
}

impl EvaluateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let verdict = if self.evaluation.approved {
            "APPROVED".green().bold()
        } else {
            "NOT APPROVED".yellow().bold()
        };
        let mut out = format!("Verdict: {verdict}\n");
        if !self.reviews_considered {
            out.push_str("  (formal reviews not considered)\n");
        }
        out.push_str(&describe(&self.evaluation));
        out
    }
}

fn describe(evaluation: &ThreadEvaluation) -> String {
    let list = |names: &[String]| {
        if names.is_empty() {
            "(none)".to_string()
        } else {
            names.join(", ")
        }
    };
    let mut out = format!(
        "          QA contacts: {}\n          approvals:   {}\n",
        list(&evaluation.qualified),
        list(&evaluation.approvals)
    );
    if let Some(contact) = &evaluation.approved_by {
        out.push_str(&format!("          approved by: {contact}\n"));
    }
    out
}

//! Batch verifier - decides, ticket by ticket, whether QA approved the fix
//!
//! The batch runs in two phases:
//!
//! 1. every raw id is validated and resolved to a review thread
//! 2. every resolved ticket is fetched, its thread evaluated, and the verdict
//!    handed to the [`VerdictSink`]
//!
//! A failure only drops the ticket it belongs to. Errors are collected in the
//! order they happen and returned with the verdicts that did get computed.

use serde::Serialize;

use crate::core::errors::{VerifyError, render_cause};
use crate::core::models::{ThreadRef, Ticket, TicketId};
use crate::core::ports::{
    DiscussionSource, EvaluationObserver, ReviewPolicy, TicketTracker, VerdictSink,
};

use super::classifier::Classifier;
use super::verdict::{ThreadEvaluation, evaluate_thread};

/// Tracker URL of links that point at review threads
pub const DEFAULT_LINK_HOST: &str = "https://github.com/";

/// Verdict for one ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketOutcome {
    /// The ticket as fetched
    pub ticket: Ticket,
    /// The review thread that was evaluated
    pub thread: ThreadRef,
    /// Whether formal reviews were replayed
    pub reviews_considered: bool,
    /// Evaluation of the thread
    pub evaluation: ThreadEvaluation,
}

/// Result of a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Tickets that got a verdict, in input order
    pub outcomes: Vec<TicketOutcome>,
    /// Tickets that were skipped, one error each
    pub errors: Vec<VerifyError>,
}

impl VerifyReport {
    /// Tickets whose verdict is "approved"
    pub fn approved(&self) -> impl Iterator<Item = &TicketOutcome> {
        self.outcomes.iter().filter(|o| o.evaluation.approved)
    }

    /// Whether every ticket got a verdict
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs batches against a set of collaborators
pub struct Verifier<'a> {
    tracker: &'a dyn TicketTracker,
    source: &'a dyn DiscussionSource,
    policy: &'a dyn ReviewPolicy,
    sink: &'a dyn VerdictSink,
    classifier: &'a Classifier,
    link_host: String,
}

impl std::fmt::Debug for Verifier<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("classifier", &self.classifier)
            .field("link_host", &self.link_host)
            .finish_non_exhaustive()
    }
}

impl<'a> Verifier<'a> {
    /// Create a verifier using the standard command syntax
    pub fn new(
        tracker: &'a dyn TicketTracker,
        source: &'a dyn DiscussionSource,
        policy: &'a dyn ReviewPolicy,
        sink: &'a dyn VerdictSink,
    ) -> Self {
        Self {
            tracker,
            source,
            policy,
            sink,
            classifier: Classifier::standard(),
            link_host: DEFAULT_LINK_HOST.to_string(),
        }
    }

    /// Use a different command syntax
    #[must_use]
    pub fn with_classifier(mut self, classifier: &'a Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Treat links whose tracker URL is `host` as review threads
    #[must_use]
    pub fn with_link_host(mut self, host: impl Into<String>) -> Self {
        self.link_host = host.into();
        self
    }

    /// Verify a batch of raw ticket ids
    pub fn verify_tickets<S: AsRef<str>>(
        &self,
        raw_ids: &[S],
        observer: &dyn EvaluationObserver,
    ) -> VerifyReport {
        let mut report = VerifyReport::default();

        let mut resolved = Vec::with_capacity(raw_ids.len());
        for raw in raw_ids {
            match self.resolve_thread(raw.as_ref()) {
                Ok(pair) => resolved.push(pair),
                Err(err) => Self::fail(&mut report, observer, err),
            }
        }

        for (id, thread) in resolved {
            match self.verify_ticket(id, thread, observer) {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(err) => Self::fail(&mut report, observer, err),
            }
        }

        report
    }

    /// Validate a raw id and find the first review-thread link on the ticket
    pub fn resolve_thread(&self, raw: &str) -> Result<(TicketId, ThreadRef), VerifyError> {
        let id: TicketId = raw.parse().map_err(|source| VerifyError::InvalidTicketId {
            raw: raw.to_string(),
            source,
        })?;

        let links = self.tracker.external_links(id).map_err(|err| VerifyError::LinkLookup {
            ticket: id,
            cause: render_cause(&err),
        })?;

        links
            .iter()
            .find(|link| link.tracker_url == self.link_host)
            .map(|link| (id, link.thread()))
            .ok_or(VerifyError::NoThread { ticket: id })
    }

    /// Fetch, evaluate and record a single resolved ticket
    pub fn verify_ticket(
        &self,
        id: TicketId,
        thread: ThreadRef,
        observer: &dyn EvaluationObserver,
    ) -> Result<TicketOutcome, VerifyError> {
        let ticket = self.tracker.ticket(id).map_err(|err| VerifyError::TicketLookup {
            ticket: id,
            cause: render_cause(&err),
        })?;

        let comments = self.source.comments(&thread).map_err(|err| VerifyError::Comments {
            ticket: id,
            thread: thread.clone(),
            cause: render_cause(&err),
        })?;

        let reviews_considered = self.policy.reviews_act_as_approval(&thread.org, &thread.repo);
        let reviews = if reviews_considered {
            self.source.reviews(&thread).map_err(|err| VerifyError::Reviews {
                ticket: id,
                thread: thread.clone(),
                cause: render_cause(&err),
            })?
        } else {
            Vec::new()
        };

        let evaluation = evaluate_thread(self.classifier, &comments, &reviews, observer);
        observer.verdict(&ticket, &thread, &evaluation);

        self.sink.record(&ticket, &thread, &evaluation).map_err(|err| VerifyError::Sink {
            ticket: id,
            cause: render_cause(&err),
        })?;

        Ok(TicketOutcome {
            ticket,
            thread,
            reviews_considered,
            evaluation,
        })
    }

    fn fail(report: &mut VerifyReport, observer: &dyn EvaluationObserver, err: VerifyError) {
        observer.ticket_failed(&err);
        report.errors.push(err);
    }
}

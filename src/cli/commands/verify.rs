//! Verify a batch of tickets

use std::path::Path;

use qa_verify::adapters::{DryRunSink, LogObserver, SnapshotStore, StatusTransitionSink};
use qa_verify::config::Config;
use qa_verify::core::ports::VerdictSink;
use qa_verify::core::services::Verifier;
use qa_verify::output::{OutputMode, VerifyResult};

/// Verify tickets against a snapshot and print the verdicts
pub fn verify(
    config: &Config,
    snapshot: &Path,
    tickets: &[String],
    strict: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let store = SnapshotStore::load(snapshot)?;
    let classifier = config.classifier()?;

    let transition;
    let sink: &dyn VerdictSink = if config.transition.enabled {
        transition = StatusTransitionSink::new(&store, config.transition.status.clone());
        &transition
    } else {
        &DryRunSink
    };

    let verifier = Verifier::new(&store, &store, &config.reviews, sink)
        .with_classifier(&classifier)
        .with_link_host(config.links.host.clone());
    let observer = LogObserver::with_target(config.transition.status.clone());
    let report = verifier.verify_tickets(tickets, &observer);

    VerifyResult::from(&report).with_transitions(store.status_updates()?).render(mode);

    if strict && !report.is_complete() {
        anyhow::bail!("{} ticket(s) could not be verified", report.errors.len());
    }
    Ok(())
}

//! Evaluate a single thread file

use std::path::Path;

use qa_verify::adapters::LogObserver;
use qa_verify::adapters::snapshot::load_thread_log;
use qa_verify::config::Config;
use qa_verify::core::services::evaluate_thread;
use qa_verify::output::{EvaluateResult, OutputMode};

/// Evaluate the comments (and optionally reviews) in `thread`
pub fn evaluate(
    config: &Config,
    thread: &Path,
    reviews: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let log = load_thread_log(thread)?;
    let classifier = config.classifier()?;

    let considered: &[_] = if reviews { &log.reviews } else { &[] };
    let observer = LogObserver::default();
    let evaluation = evaluate_thread(&classifier, &log.comments, considered, &observer);

    EvaluateResult {
        reviews_considered: reviews,
        evaluation,
    }
    .render(mode);
    Ok(())
}

//! Review policy port

/// Decides whether formal reviews count as approval for a destination
pub trait ReviewPolicy: Send + Sync {
    /// Whether an approving review on `org/repo` acts like an approve command
    fn reviews_act_as_approval(&self, org: &str, repo: &str) -> bool;
}

/// The same answer for every destination
impl ReviewPolicy for bool {
    fn reviews_act_as_approval(&self, _org: &str, _repo: &str) -> bool {
        *self
    }
}

//! Approval sets
//!
//! [`ApprovalSet`] tracks who currently has an active approval on a thread.
//! [`QualifiedApprovers`] holds the identities allowed to grant the approval
//! that counts.

use std::collections::{BTreeSet, HashSet};

/// Identities with an active approval, in the order they first approved
///
/// Adding is idempotent and removal is by identity, so the set never holds
/// duplicates. Membership is a hash lookup; the ordered list is only kept so
/// approvals can be reported in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApprovalSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl ApprovalSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an approval. Returns `false` if the identity already approved.
    pub fn add(&mut self, identity: &str) -> bool {
        if !self.members.insert(identity.to_string()) {
            return false;
        }
        self.order.push(identity.to_string());
        true
    }

    /// Withdraw an approval. Returns `false` if the identity had none.
    pub fn remove(&mut self, identity: &str) -> bool {
        if !self.members.remove(identity) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|name| name == identity) {
            self.order.remove(pos);
        }
        true
    }

    /// Whether `identity` currently approves
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.members.contains(identity)
    }

    /// Number of active approvals
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nobody currently approves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Active approvers in the order they approved
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Active approvers as an owned list, in approval order
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.order.clone()
    }

    /// First approver (in approval order) who is also qualified
    #[must_use]
    pub fn first_qualified<'a>(&'a self, qualified: &QualifiedApprovers) -> Option<&'a str> {
        self.iter().find(|name| qualified.contains(name))
    }
}

impl<'a> FromIterator<&'a str> for ApprovalSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.add(name);
        }
        set
    }
}

/// Identities named by assignment announcements on a thread
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedApprovers(BTreeSet<String>);

impl QualifiedApprovers {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `identity` is qualified
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.0.contains(identity)
    }

    /// Number of qualified approvers
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no announcement named anyone
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Qualified approvers in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Qualified approvers as a sorted owned list
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for QualifiedApprovers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

//! Ordered, deduplicated subscription accumulator.

use std::collections::HashSet;

/// Prefixed subscriptions in first-seen order.
///
/// Membership is tracked on the unprefixed name; the prefix is applied once
/// when a name is first recorded.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionSet {
    prefix: String,
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl SubscriptionSet {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), ..Self::default() }
    }

    /// Record `name`, returning `false` if it was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.ordered.push(format!("{}{}", self.prefix, name));
        true
    }

    pub fn extend<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for name in names {
            self.insert(name);
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

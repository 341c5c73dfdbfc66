//! Update history for state containers.
//!
//! Provides tracking of the partial updates applied to a
//! [`State`](super::State), in the order they happened, optionally bounded
//! to the most recent entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Record of a single applied update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Revision the state reached after this update
    pub revision: u64,
    /// Fields overwritten by the update
    pub fields: Vec<String>,
    /// When the update was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied updates.
///
/// A history created with [`UpdateHistory::with_limit`] keeps only the most
/// recent `limit` records; older ones are evicted as new ones arrive.
///
/// # Example
///
/// ```rust
/// use shapekit::core::{UpdateHistory, UpdateRecord};
/// use chrono::Utc;
///
/// let history = UpdateHistory::new();
/// let history = history.record(UpdateRecord {
///     revision: 1,
///     fields: vec!["y".to_string()],
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.touched("y"), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateHistory {
    records: VecDeque<UpdateRecord>,
    limit: Option<usize>,
}

impl UpdateHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` records.
    ///
    /// ```rust
    /// use shapekit::core::{UpdateHistory, UpdateRecord};
    /// use chrono::Utc;
    ///
    /// let mut history = UpdateHistory::with_limit(2);
    /// for revision in 1..=3 {
    ///     history.push(UpdateRecord {
    ///         revision,
    ///         fields: vec!["x".to_string()],
    ///         timestamp: Utc::now(),
    ///     });
    /// }
    ///
    /// assert_eq!(history.len(), 2);
    /// assert_eq!(history.records().next().map(|r| r.revision), Some(2));
    /// ```
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of records retained, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append an update in place, evicting the oldest records beyond the limit.
    pub fn push(&mut self, update: UpdateRecord) {
        self.records.push_back(update);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    /// Record an update, returning a new history. The original is unchanged.
    pub fn record(&self, update: UpdateRecord) -> Self {
        let mut next = self.clone();
        next.push(update);
        next
    }

    /// Retained records, oldest first.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &UpdateRecord> + '_ {
        self.records.iter()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether no records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any.
    pub fn last(&self) -> Option<&UpdateRecord> {
        self.records.back()
    }

    /// Count how many retained updates overwrote `field`.
    pub fn touched(&self, field: &str) -> usize {
        self.records
            .iter()
            .filter(|record| record.fields.iter().any(|f| f == field))
            .count()
    }
}

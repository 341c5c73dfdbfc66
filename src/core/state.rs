//! Partial-update state container.

use super::history::{UpdateHistory, UpdateRecord};
use crate::shape::{Patch, Readonly, Record};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Number of updates a [`State`] created with [`State::new`] remembers.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Holds exactly one current value of a record type `T`.
///
/// The value only changes through [`State::update`], which overlays a
/// partial record onto it: fields present in the patch are replaced, every
/// other field keeps its prior value.
///
/// # Example
///
/// ```rust
/// use shapekit::core::State;
/// use shapekit::record;
///
/// record! {
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///     }
///     patch: PointPatch
/// }
///
/// let mut state = State::new(Point { x: 0, y: 0 });
/// state.update(PointPatch { y: Some(3), ..Default::default() });
///
/// assert_eq!(state.current(), &Point { x: 0, y: 3 });
/// assert_eq!(state.revision(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct State<T: Record> {
    current: T,
    revision: u64,
    history: UpdateHistory,
}

impl<T: Record> State<T> {
    /// Create a state holding `initial` at revision 0.
    ///
    /// The state remembers the last [`DEFAULT_HISTORY_LIMIT`] updates.
    pub fn new(initial: T) -> Self {
        Self::with_history_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a state that remembers at most `limit` updates.
    ///
    /// The revision counter keeps counting past the limit; only the
    /// history is trimmed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapekit::core::State;
    /// use shapekit::record;
    ///
    /// record! {
    ///     pub struct Counter {
    ///         pub value: u32,
    ///     }
    ///     patch: CounterPatch
    /// }
    ///
    /// let mut state = State::with_history_limit(Counter { value: 0 }, 2);
    /// for value in 1..=5 {
    ///     state.update(CounterPatch { value: Some(value) });
    /// }
    ///
    /// assert_eq!(state.revision(), 5);
    /// assert_eq!(state.history().len(), 2);
    /// ```
    pub fn with_history_limit(initial: T, limit: usize) -> Self {
        Self {
            current: initial,
            revision: 0,
            history: UpdateHistory::with_limit(limit),
        }
    }

    /// Borrow the current value.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Number of non-empty updates applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Most recent updates, oldest first, bounded by the history limit.
    pub fn history(&self) -> &UpdateHistory {
        &self.history
    }

    /// Overlay `patch` onto the current value and return the merged result.
    ///
    /// An empty patch leaves the value, revision and history untouched.
    pub fn update(&mut self, patch: T::Patch) -> &T {
        let fields = patch.fields();
        if fields.is_empty() {
            return &self.current;
        }

        patch.apply(&mut self.current);
        self.revision += 1;
        self.history.push(UpdateRecord {
            revision: self.revision,
            fields: fields.iter().map(|f| f.to_string()).collect(),
            timestamp: Utc::now(),
        });

        tracing::debug!(revision = self.revision, fields = ?fields, "applied partial update");
        &self.current
    }

    /// Copy of the current value that cannot be mutated.
    pub fn snapshot(&self) -> Readonly<T> {
        Readonly::new(self.current.clone())
    }

    /// Consume the state and return the current value.
    pub fn into_inner(self) -> T {
        self.current
    }
}

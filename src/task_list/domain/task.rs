//! Task record type.

use super::TaskId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single entry in the task list.
///
/// Text is stored exactly as entered. It may be empty, may duplicate another
/// task's text, and may even contain the codec separator; the codec does not
/// escape, so such a text will not survive a round trip intact (see
/// [`super::encode`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier, stamped with the clock's
    /// current time.
    #[must_use]
    pub fn new(text: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            text: text.into(),
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns when this in-memory record was created.
    ///
    /// The persisted representation does not retain creation times, so for
    /// hydrated tasks this is the hydration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//! Wire codec for the persisted task-list representation.
//!
//! The whole list is stored as one string: task texts joined with a fixed
//! two-character separator. Only text survives a round trip; identifiers
//! and timestamps are re-minted at decode time.

use super::Task;
use mockable::Clock;

/// Separator between task texts in the persisted representation.
///
/// Texts are not escaped. A text containing this sequence decodes back as
/// multiple tasks; callers that need a faithful round trip must keep the
/// separator out of task text.
pub const SEPARATOR: &str = "||";

/// Encodes a task list into its persisted representation.
///
/// The empty list encodes as the empty string.
#[must_use]
pub fn encode(tasks: &[Task]) -> String {
    tasks.iter().map(Task::text).collect::<Vec<_>>().join(SEPARATOR)
}

/// Decodes a persisted representation into a task list.
///
/// `None` (no data stored yet) decodes to the empty list. `Some("")`
/// decodes to a single task with empty text, not the empty list: splitting
/// the empty string yields one empty segment. The original application
/// behaves the same way, so the quirk is kept rather than special-cased.
#[must_use]
pub fn decode(raw: Option<&str>, clock: &impl Clock) -> Vec<Task> {
    raw.map_or_else(Vec::new, |joined| {
        joined
            .split(SEPARATOR)
            .map(|text| Task::new(text, clock))
            .collect()
    })
}

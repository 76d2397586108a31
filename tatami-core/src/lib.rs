/// tatami-core: Pure-computation rank/score engine for live judging sessions.
///
/// Tracks each competitor's working rank ("ticks"), resolves rank ties
/// deterministically, and stamps scores from a fixed rank-to-score table.
/// No IO and no persistence: state lives only for the running session.
///
/// Competitors are identified by `i64` ids handed out by the roster.
/// An id is never reused while a competitor exists.
///
/// # Quick start
///
/// ```rust
/// use tatami_core::Roster;
///
/// let mut roster = Roster::new(3);
///
/// // Two judges both call rank 1. The tie stays provisional until a
/// // score pass resolves it.
/// roster.set_exact(1, 1);
/// roster.set_exact(2, 1);
///
/// let snapshot = roster.assign_scores();
/// assert_eq!(snapshot[0].ticks, 1); // lower id wins the contested rank
/// assert_eq!(snapshot[0].score, Some(9.99));
/// assert_eq!(snapshot[1].ticks, 2);
/// assert_eq!(snapshot[1].score, Some(9.98));
/// assert_eq!(snapshot[2].score, None);
/// ```

pub mod confirm;
pub mod constants;
pub mod rank;
pub mod roster;
pub mod score;
pub mod types;

// Re-export primary public API at crate root.
pub use confirm::ConfirmationGate;
pub use rank::{adjust, finalize, insert_at, set_exact, set_to_bottom};
pub use roster::{Roster, RosterAction};
pub use score::{assign_scores, score_for};
pub use types::{Competitor, CompetitorId, Status};

/// Number of competitors a fresh default roster starts with, and the size
/// `reset` restores regardless of how the session began.
pub const DEFAULT_ROSTER_SIZE: usize = 5;

/// Score awarded to every finalized rank of 9 or deeper.
///
/// The table only differentiates ranks 1 through 8; anything below shares
/// this value, so pushing a competitor further down past rank 9 cannot
/// change their score.
pub const FALLBACK_SCORE: f64 = 9.93;

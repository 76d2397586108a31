/// Rank→score table and the score assignment pass.
use crate::constants::FALLBACK_SCORE;
use crate::rank::finalize;
use crate::types::{Competitor, Status};

/// Score for a finalized rank.
///
/// Fixed table for ranks 1 through 8; every deeper rank shares the
/// fallback value, and ranks 5/6 and 7/8 deliberately share a score (the
/// scheme tolerates ties at the bottom of the table). Total function: no
/// rank is undefined.
pub fn score_for(rank: u32) -> f64 {
    match rank {
        1 => 9.99,
        2 => 9.98,
        3 => 9.97,
        4 => 9.96,
        5 | 6 => 9.95,
        7 | 8 => 9.94,
        _ => FALLBACK_SCORE,
    }
}

/// Stamp every competitor's score from the table, finalizing first if any
/// provisional ranks remain.
///
/// Ranked competitors (ticks > 0, provisional or finalized) get
/// `score_for(ticks)`; everyone else has their score cleared.
pub fn assign_scores(competitors: &mut [Competitor]) {
    if competitors
        .iter()
        .any(|c| c.status == Status::Provisional && c.ticks > 0)
    {
        finalize(competitors);
    }

    for c in competitors.iter_mut() {
        c.score = if c.ticks > 0 && c.status.is_ranked() {
            Some(score_for(c.ticks))
        } else {
            None
        };
    }
}

/// Rank mutation algorithms: insertion with shift, single-competitor
/// adjustments, and tie-resolving finalization.
///
/// All functions mutate the competitor slice in place and are no-ops for an
/// unknown id, never an error. Equal working ranks between calls are legal:
/// they are the expected input to `finalize`, which resolves them
/// deterministically.
use crate::types::{Competitor, CompetitorId, Status};

/// Status transition shared by every tick mutation.
///
/// Gaining a first tick promotes Unranked -> Provisional; dropping back to
/// zero demotes to Unranked. Any other change leaves status alone, so a
/// finalized competitor keeps its status even while its ticks move.
fn transition_status(competitor: &mut Competitor, old_ticks: u32) {
    if old_ticks == 0 && competitor.ticks > 0 {
        competitor.status = Status::Provisional;
    } else if competitor.ticks == 0 {
        competitor.status = Status::Unranked;
    }
}

/// Insert a competitor at `desired_rank` and mark it finalized.
///
/// Every competitor holding `ticks >= desired_rank` is shifted down by one
/// first, so the target's slot is guaranteed vacant without any collision
/// check. Other competitors' ticks only ever increase and their status is
/// untouched. An unknown id leaves the collection shifted with no finalize
/// step applied; callers are expected to pass a live id.
pub fn insert_at(competitors: &mut [Competitor], id: CompetitorId, desired_rank: u32) {
    for c in competitors.iter_mut() {
        if c.ticks >= desired_rank {
            c.ticks += 1;
        }
    }

    if let Some(target) = competitors.iter_mut().find(|c| c.id == id) {
        target.ticks = desired_rank;
        target.status = Status::Finalized;
    }
}

/// Move a competitor's working rank by `delta`, clamped at zero.
pub fn adjust(competitors: &mut [Competitor], id: CompetitorId, delta: i32) {
    if let Some(c) = competitors.iter_mut().find(|c| c.id == id) {
        let old_ticks = c.ticks;
        c.ticks = old_ticks.saturating_add_signed(delta);
        transition_status(c, old_ticks);
    }
}

/// Set a competitor's working rank to an exact value.
pub fn set_exact(competitors: &mut [Competitor], id: CompetitorId, rank: u32) {
    if let Some(c) = competitors.iter_mut().find(|c| c.id == id) {
        let old_ticks = c.ticks;
        c.ticks = rank;
        transition_status(c, old_ticks);
    }
}

/// Push a competitor strictly below every current rank.
///
/// The target lands at `max + 1`, where the max scan covers the whole
/// collection, so pressing this repeatedly on the current bottom
/// competitor keeps pushing it further down.
pub fn set_to_bottom(competitors: &mut [Competitor], id: CompetitorId) {
    let max_ticks = competitors.iter().map(|c| c.ticks).max().unwrap_or(0);

    if let Some(c) = competitors.iter_mut().find(|c| c.id == id) {
        if c.ticks >= max_ticks + 1 {
            return;
        }
        let old_ticks = c.ticks;
        c.ticks = max_ticks + 1;
        transition_status(c, old_ticks);
    }
}

/// Resolve all provisional ranks into a collision-free finalized ordering.
///
/// Clears every score, then replays `insert_at` for each provisional
/// competitor in (ticks, id) ascending order, so the lower id wins a
/// contested rank. Each replay targets the rank the competitor asked for,
/// bumped to just past the previous landing slot when the two would cross:
/// a settled rank is never stolen by a later insertion, and distinct
/// requested ranks pass through untouched. Rank gaps are kept as-is. A
/// second call with no provisional competitors left only re-clears scores.
pub fn finalize(competitors: &mut [Competitor]) {
    for c in competitors.iter_mut() {
        c.score = None;
    }

    let mut pending: Vec<(u32, CompetitorId)> = competitors
        .iter()
        .filter(|c| c.status == Status::Provisional && c.ticks > 0)
        .map(|c| (c.ticks, c.id))
        .collect();
    pending.sort_unstable();

    let mut last_placed = 0;
    for (requested, id) in pending {
        let desired = requested.max(last_placed + 1);
        insert_at(competitors, id, desired);
        last_placed = desired;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(n: usize) -> Vec<Competitor> {
        (1..=n as CompetitorId)
            .map(|id| Competitor::new(id, format!("Competitor {id}")))
            .collect()
    }

    fn by_id(competitors: &[Competitor], id: CompetitorId) -> &Competitor {
        competitors.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_adjust_promotes_then_demotes() {
        let mut comps = fresh(2);

        adjust(&mut comps, 1, 1);
        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 1).status, Status::Provisional);

        adjust(&mut comps, 1, -1);
        assert_eq!(by_id(&comps, 1).ticks, 0);
        assert_eq!(by_id(&comps, 1).status, Status::Unranked);
    }

    #[test]
    fn test_adjust_clamps_at_zero() {
        let mut comps = fresh(1);
        adjust(&mut comps, 1, -5);
        assert_eq!(by_id(&comps, 1).ticks, 0);
        assert_eq!(by_id(&comps, 1).status, Status::Unranked);
    }

    #[test]
    fn test_adjust_three_times_reaches_rank_three() {
        let mut comps = fresh(5);
        for _ in 0..3 {
            adjust(&mut comps, 1, 1);
        }
        assert_eq!(by_id(&comps, 1).ticks, 3);
        assert_eq!(by_id(&comps, 1).status, Status::Provisional);
    }

    #[test]
    fn test_adjust_unknown_id_is_noop() {
        let mut comps = fresh(2);
        let before = comps.clone();
        adjust(&mut comps, 99, 1);
        assert_eq!(comps, before);
    }

    #[test]
    fn test_adjust_does_not_revert_finalized_status() {
        let mut comps = fresh(2);
        set_exact(&mut comps, 1, 1);
        finalize(&mut comps);
        assert_eq!(by_id(&comps, 1).status, Status::Finalized);

        adjust(&mut comps, 1, 1);
        assert_eq!(by_id(&comps, 1).ticks, 2);
        assert_eq!(by_id(&comps, 1).status, Status::Finalized);
    }

    #[test]
    fn test_set_exact() {
        let mut comps = fresh(3);
        set_exact(&mut comps, 2, 4);
        assert_eq!(by_id(&comps, 2).ticks, 4);
        assert_eq!(by_id(&comps, 2).status, Status::Provisional);

        set_exact(&mut comps, 2, 0);
        assert_eq!(by_id(&comps, 2).ticks, 0);
        assert_eq!(by_id(&comps, 2).status, Status::Unranked);
    }

    #[test]
    fn test_set_exact_leaves_others_alone() {
        let mut comps = fresh(3);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 1);
        // Both hold rank 1 until finalization; equal working ranks are legal.
        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 2).ticks, 1);
    }

    #[test]
    fn test_set_to_bottom_places_below_everyone() {
        let mut comps = fresh(3);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 2);

        set_to_bottom(&mut comps, 3);
        assert_eq!(by_id(&comps, 3).ticks, 3);
        assert_eq!(by_id(&comps, 3).status, Status::Provisional);
    }

    #[test]
    fn test_set_to_bottom_repeated_keeps_pushing_down() {
        let mut comps = fresh(2);
        set_exact(&mut comps, 1, 4);

        set_to_bottom(&mut comps, 2);
        assert_eq!(by_id(&comps, 2).ticks, 5);

        // The target now holds the max itself, so each press lands one deeper.
        set_to_bottom(&mut comps, 2);
        assert_eq!(by_id(&comps, 2).ticks, 6);
    }

    #[test]
    fn test_insert_at_shifts_equal_and_lower_ranks() {
        let mut comps = fresh(4);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 2);
        set_exact(&mut comps, 3, 3);

        insert_at(&mut comps, 4, 2);

        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 2).ticks, 3);
        assert_eq!(by_id(&comps, 3).ticks, 4);
        assert_eq!(by_id(&comps, 4).ticks, 2);
        assert_eq!(by_id(&comps, 4).status, Status::Finalized);
    }

    #[test]
    fn test_insert_at_never_decreases_other_ticks() {
        let mut comps = fresh(5);
        set_exact(&mut comps, 1, 2);
        set_exact(&mut comps, 2, 2);
        set_exact(&mut comps, 3, 5);
        let before = comps.clone();

        insert_at(&mut comps, 4, 2);

        for old in &before {
            if old.id == 4 {
                continue;
            }
            let new = by_id(&comps, old.id);
            assert!(
                new.ticks >= old.ticks,
                "competitor {} moved up from {} to {}",
                old.id,
                old.ticks,
                new.ticks
            );
            assert_eq!(new.status, old.status);
        }
    }

    #[test]
    fn test_insert_at_unknown_id_shifts_without_finalize() {
        let mut comps = fresh(2);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 2);

        insert_at(&mut comps, 99, 1);

        // The shift happened but nobody was placed or finalized.
        assert_eq!(by_id(&comps, 1).ticks, 2);
        assert_eq!(by_id(&comps, 2).ticks, 3);
        assert_eq!(by_id(&comps, 1).status, Status::Provisional);
        assert_eq!(by_id(&comps, 2).status, Status::Provisional);
    }

    #[test]
    fn test_finalize_resolves_tie_lower_id_wins() {
        let mut comps = fresh(5);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 1);

        finalize(&mut comps);

        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 2).ticks, 2);
        assert_eq!(by_id(&comps, 1).status, Status::Finalized);
        assert_eq!(by_id(&comps, 2).status, Status::Finalized);
    }

    #[test]
    fn test_finalize_three_way_tie() {
        let mut comps = fresh(3);
        for id in 1..=3 {
            set_exact(&mut comps, id, 1);
        }

        finalize(&mut comps);

        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 2).ticks, 2);
        assert_eq!(by_id(&comps, 3).ticks, 3);
    }

    #[test]
    fn test_finalize_no_two_finalized_share_a_rank() {
        let mut comps = fresh(6);
        set_exact(&mut comps, 1, 2);
        set_exact(&mut comps, 2, 2);
        set_exact(&mut comps, 3, 1);
        set_exact(&mut comps, 4, 3);
        set_exact(&mut comps, 5, 2);

        finalize(&mut comps);

        let mut ranks: Vec<u32> = comps
            .iter()
            .filter(|c| c.status == Status::Finalized)
            .map(|c| c.ticks)
            .collect();
        let total = ranks.len();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), total, "finalized ranks collide: {comps:?}");
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut comps = fresh(4);
        set_exact(&mut comps, 1, 1);
        set_exact(&mut comps, 2, 1);
        set_exact(&mut comps, 3, 2);

        finalize(&mut comps);
        let after_first = comps.clone();
        finalize(&mut comps);
        assert_eq!(comps, after_first);
    }

    #[test]
    fn test_finalize_keeps_rank_gaps() {
        let mut comps = fresh(2);
        set_exact(&mut comps, 1, 9);

        finalize(&mut comps);
        assert_eq!(by_id(&comps, 1).ticks, 9);
        assert_eq!(by_id(&comps, 1).status, Status::Finalized);
    }

    #[test]
    fn test_finalize_clears_scores() {
        let mut comps = fresh(2);
        set_exact(&mut comps, 1, 1);
        comps[0].score = Some(9.99);
        comps[1].score = Some(9.98);

        finalize(&mut comps);
        assert!(comps.iter().all(|c| c.score.is_none()));
    }

    #[test]
    fn test_finalize_skips_unranked_and_finalized() {
        let mut comps = fresh(3);
        set_exact(&mut comps, 1, 1);
        finalize(&mut comps);

        // Competitor 2 stays unranked; competitor 1 is already finalized and
        // must not be replayed.
        finalize(&mut comps);
        assert_eq!(by_id(&comps, 1).ticks, 1);
        assert_eq!(by_id(&comps, 2).ticks, 0);
        assert_eq!(by_id(&comps, 2).status, Status::Unranked);
    }
}

/// Session roster: owns the competitor collection and exposes every
/// mutation the presentation layer may trigger.
///
/// Each mutating method returns the fresh snapshot (creation order) for
/// display. Destructive operations stage a `RosterAction` behind the
/// confirmation gate instead of running immediately; the surface resolves
/// the gate with exactly one of `confirm` / `cancel`.
use crate::confirm::ConfirmationGate;
use crate::constants::DEFAULT_ROSTER_SIZE;
use crate::rank;
use crate::score;
use crate::types::{Competitor, CompetitorId, Status};

/// A destructive roster mutation awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    /// Drop one competitor from the collection.
    Remove(CompetitorId),
    /// Replace the collection with the default fresh roster.
    Reset,
}

pub struct Roster {
    competitors: Vec<Competitor>,
    /// Next id to hand out. Monotonic, so an id is never reused after a
    /// removal.
    next_id: CompetitorId,
    gate: ConfirmationGate<RosterAction>,
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new(DEFAULT_ROSTER_SIZE)
    }
}

impl Roster {
    /// A roster of `size` fresh unranked competitors with default names.
    pub fn new(size: usize) -> Self {
        let competitors = (1..=size as CompetitorId)
            .map(|id| Competitor::new(id, format!("Competitor {id}")))
            .collect();
        Roster {
            competitors,
            next_id: size as CompetitorId + 1,
            gate: ConfirmationGate::Idle,
        }
    }

    /// A roster built from explicit display names, ids assigned in order.
    pub fn with_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let competitors: Vec<Competitor> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Competitor::new(i as CompetitorId + 1, name))
            .collect();
        let next_id = competitors.len() as CompetitorId + 1;
        Roster {
            competitors,
            next_id,
            gate: ConfirmationGate::Idle,
        }
    }

    /// Current collection snapshot, in creation order.
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Append a fresh unranked competitor.
    pub fn add(&mut self) -> &[Competitor] {
        let id = self.next_id;
        self.next_id += 1;
        self.competitors
            .push(Competitor::new(id, format!("Competitor {id}")));
        &self.competitors
    }

    /// Stage removal of one competitor behind the confirmation gate.
    pub fn remove(&mut self, id: CompetitorId) -> &[Competitor] {
        self.gate
            .request("Remove this competitor?", RosterAction::Remove(id));
        &self.competitors
    }

    /// Stage a reset to the default roster behind the confirmation gate.
    pub fn reset(&mut self) -> &[Competitor] {
        self.gate
            .request("Reset all competitors?", RosterAction::Reset);
        &self.competitors
    }

    /// Execute whatever action is staged on the gate.
    pub fn confirm(&mut self) -> &[Competitor] {
        match self.gate.confirm() {
            Some(RosterAction::Remove(id)) => {
                self.competitors.retain(|c| c.id != id);
            }
            Some(RosterAction::Reset) => {
                *self = Roster::new(DEFAULT_ROSTER_SIZE);
            }
            None => {}
        }
        &self.competitors
    }

    /// Discard the staged action.
    pub fn cancel(&mut self) -> &[Competitor] {
        self.gate.cancel();
        &self.competitors
    }

    /// Message for the staged action, when one is pending.
    pub fn pending_message(&self) -> Option<&str> {
        self.gate.message()
    }

    pub fn has_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Move a competitor's working rank by `delta`.
    pub fn adjust(&mut self, id: CompetitorId, delta: i32) -> &[Competitor] {
        rank::adjust(&mut self.competitors, id, delta);
        &self.competitors
    }

    /// Set a competitor's working rank to an exact value.
    pub fn set_exact(&mut self, id: CompetitorId, rank: u32) -> &[Competitor] {
        rank::set_exact(&mut self.competitors, id, rank);
        &self.competitors
    }

    /// Push a competitor strictly below every current rank.
    pub fn set_to_bottom(&mut self, id: CompetitorId) -> &[Competitor] {
        rank::set_to_bottom(&mut self.competitors, id);
        &self.competitors
    }

    /// Resolve provisional ranks into a finalized ordering.
    pub fn finalize(&mut self) -> &[Competitor] {
        rank::finalize(&mut self.competitors);
        &self.competitors
    }

    /// Finalize if needed, then stamp every score from the table.
    pub fn assign_scores(&mut self) -> &[Competitor] {
        score::assign_scores(&mut self.competitors);
        &self.competitors
    }

    /// Reopen a finalized competitor for rank edits, keeping its ticks.
    pub fn revert_to_provisional(&mut self, id: CompetitorId) -> &[Competitor] {
        if let Some(c) = self.competitors.iter_mut().find(|c| c.id == id) {
            if c.status == Status::Finalized {
                c.status = Status::Provisional;
            }
        }
        &self.competitors
    }
}

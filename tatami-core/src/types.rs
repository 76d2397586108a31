/// Core data types for a judging session.
///
/// Competitors are identified by caller-visible `i64` ids handed out by the
/// roster. An id is never reused while a competitor exists.
use std::fmt;

/// A competitor id, unique within the collection.
pub type CompetitorId = i64;

/// Where a competitor sits in the rank lifecycle.
///
/// `Unranked` holds exactly while `ticks == 0`. A first tick promotes to
/// `Provisional`; only finalization produces `Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Unranked,
    Provisional,
    Finalized,
}

impl Status {
    /// Lowercase label used in display output.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Unranked => "unranked",
            Status::Provisional => "provisional",
            Status::Finalized => "finalized",
        }
    }

    /// True for the statuses that carry a working rank.
    pub fn is_ranked(self) -> bool {
        matches!(self, Status::Provisional | Status::Finalized)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One competitor in the session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Competitor {
    /// Id assigned at creation, unique within the collection.
    pub id: CompetitorId,
    /// Display label, opaque to the engine and never validated.
    pub name: String,
    /// Working rank counter. 0 means no rank assigned.
    pub ticks: u32,
    pub status: Status,
    /// Assigned score. Present only while the competitor is ranked and a
    /// score pass has run; cleared on every recompute.
    pub score: Option<f64>,
}

impl Competitor {
    /// A fresh unranked competitor with no score.
    pub fn new(id: CompetitorId, name: impl Into<String>) -> Self {
        Competitor {
            id,
            name: name.into(),
            ticks: 0,
            status: Status::Unranked,
            score: None,
        }
    }
}

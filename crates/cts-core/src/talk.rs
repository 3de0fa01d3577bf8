//! The talk value object and its bridge into the generic enumerator.

use std::collections::BTreeSet;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::knapsack::combinations_summing_to;
use crate::weight::Weighable;

/// Shortest talk allowed, in minutes.
pub const MIN_TALK_MINUTES: i64 = 5;

/// Longest talk allowed, in minutes.
pub const MAX_TALK_MINUTES: i64 = 60;

/// An immutable talk: a trimmed, non-empty title and a duration of
/// 5 to 60 whole minutes.
///
/// Talks compare by (title, duration), so two talks with identical
/// title and duration are indistinguishable duplicates and collapse
/// when stored in a set. The engine accepts this as an invariant of
/// the input, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TalkRepr", into = "TalkRepr")]
pub struct Talk {
    title: String,
    duration: TimeDelta,
}

/// Wire shape for [`Talk`]: duration carried as whole minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TalkRepr {
    title: String,
    minutes: i64,
}

impl Talk {
    /// Creates a talk after trimming the title and validating the
    /// duration bounds.
    pub fn new(title: impl Into<String>, duration: TimeDelta) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let minutes = duration.num_minutes();
        if duration != TimeDelta::minutes(minutes) {
            return Err(ValidationError::DurationNotWholeMinutes {
                seconds: duration.num_seconds(),
            });
        }
        if !(MIN_TALK_MINUTES..=MAX_TALK_MINUTES).contains(&minutes) {
            return Err(ValidationError::DurationOutOfRange { minutes });
        }

        Ok(Self { title, duration })
    }

    /// The talk's display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The talk's duration.
    pub const fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// The talk's duration in whole minutes.
    pub const fn minutes(&self) -> i64 {
        self.duration.num_minutes()
    }
}

impl Weighable for Talk {
    type Weight = TimeDelta;

    fn weight(&self) -> TimeDelta {
        self.duration
    }
}

impl TryFrom<TalkRepr> for Talk {
    type Error = ValidationError;

    fn try_from(repr: TalkRepr) -> Result<Self, Self::Error> {
        Self::new(repr.title, TimeDelta::minutes(repr.minutes))
    }
}

impl From<Talk> for TalkRepr {
    fn from(talk: Talk) -> Self {
        Self {
            minutes: talk.minutes(),
            title: talk.title,
        }
    }
}

/// Runs the subset-sum enumerator over a set of talks.
///
/// This is the only coupling between the talk domain and the generic
/// engine: talks are laid out in set order (title, then duration),
/// enumerated by duration, and each resulting combination is folded
/// back into a talk set. A new weighted-item domain gets its own
/// bridge like this one; the enumerator itself stays untouched.
pub fn talk_combinations(
    talks: &BTreeSet<Talk>,
    goal: TimeDelta,
) -> Result<Vec<BTreeSet<Talk>>, ValidationError> {
    let items: Vec<Talk> = talks.iter().cloned().collect();
    let combinations = combinations_summing_to(&items, goal)?;
    Ok(combinations
        .into_iter()
        .map(|combination| combination.into_items().into_iter().collect())
        .collect())
}

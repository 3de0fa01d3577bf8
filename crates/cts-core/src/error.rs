//! Failure types for the scheduling pipeline.
//!
//! Failures come in two kinds: [`ValidationError`] for malformed input
//! (the caller's fault, detected before any search runs) and
//! [`SchedulingError`] for feasibility failures (the search completed
//! but no assignment exists). Operations that can fail either way
//! return [`ScheduleError`].

use thiserror::Error;

/// Malformed or out-of-range input, detected before search begins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A talk title was empty after trimming.
    #[error("talk title cannot be empty")]
    EmptyTitle,

    /// A talk duration fell outside the allowed range.
    #[error("talk duration must be between 5 and 60 minutes, got {minutes}")]
    DurationOutOfRange { minutes: i64 },

    /// A talk duration was not a whole number of minutes.
    #[error("talk duration must be a whole number of minutes, got {seconds} seconds")]
    DurationNotWholeMinutes { seconds: i64 },

    /// The item collection handed to the enumerator was empty.
    #[error("at least one item is required")]
    NoItems,

    /// The target weight was zero or negative.
    #[error("goal weight must be positive")]
    NonPositiveGoal,

    /// An item with zero or negative weight was found.
    #[error("every item must have a positive weight")]
    NonPositiveWeight,

    /// A session was constructed without any talks.
    #[error("a session must contain at least one talk")]
    EmptySession,

    /// A track was built without any scheduled events.
    #[error("a track must contain at least one scheduled event")]
    EmptyTrack,

    /// The input cannot fill even a single track.
    #[error(
        "overall talk duration must exceed {minimum_minutes} minutes to \
         schedule one track of morning and afternoon sessions, got {total_minutes}"
    )]
    TotalDurationTooShort {
        total_minutes: i64,
        minimum_minutes: i64,
    },
}

/// The search completed but no feasible assignment exists.
///
/// Unlike validation failures these carry their cause chain, naming the
/// pipeline stage and iteration that failed. Retrying is pointless: the
/// algorithm is deterministic.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// No combination of the available talks sums exactly to the goal.
    #[error("no combination of talks adds up to a {goal_minutes}-minute morning session")]
    NoExactCombination { goal_minutes: i64 },

    /// Fewer talks remain than morning sessions still to fill.
    #[error(
        "{remaining_talks} talks remain but {remaining_sessions} morning sessions \
         are still required"
    )]
    TooFewTalksRemaining {
        remaining_talks: usize,
        remaining_sessions: usize,
    },

    /// One morning session out of the required set could not be filled.
    #[error("failed to schedule morning session {index} of {required}")]
    Session {
        index: usize,
        required: usize,
        #[source]
        source: Box<ScheduleError>,
    },

    /// Top-level wrapper for a failed scheduling run.
    #[error("failed to schedule the conference agenda")]
    Agenda {
        #[source]
        source: Box<ScheduleError>,
    },
}

/// Either failure kind, for operations that can fail both ways.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scheduling(#[from] SchedulingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_error_names_failed_session() {
        let inner = SchedulingError::NoExactCombination { goal_minutes: 180 };
        let err = SchedulingError::Session {
            index: 2,
            required: 3,
            source: Box::new(inner.into()),
        };
        assert_eq!(err.to_string(), "failed to schedule morning session 2 of 3");

        let source = std::error::Error::source(&err).expect("cause is chained");
        assert_eq!(
            source.to_string(),
            "no combination of talks adds up to a 180-minute morning session"
        );
    }

    #[test]
    fn validation_error_reports_bounds() {
        let err = ValidationError::DurationOutOfRange { minutes: 61 };
        assert_eq!(
            err.to_string(),
            "talk duration must be between 5 and 60 minutes, got 61"
        );
    }
}

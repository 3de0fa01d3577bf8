//! The two-phase session/track assignment pipeline.
//!
//! Phase one fills a fixed number of exact-duration morning sessions
//! with the subset-sum enumerator, threading leftover talks from one
//! session to the next. Phase two distributes whatever remains across
//! the tracks' afternoon sessions round-robin and anchors every block
//! to the clock, starting at the configured day-start time.
//!
//! The pipeline guarantees a feasible packing for the computed track
//! count; it does not search for the fewest tracks or the best
//! afternoon balance.

use std::collections::BTreeSet;

use chrono::{NaiveTime, TimeDelta};

use crate::error::{ScheduleError, SchedulingError, ValidationError};
use crate::event::{Event, Session, talks_duration};
use crate::talk::{Talk, talk_combinations};
use crate::track::{Track, TrackBuilder};

/// Tunable knobs of the scheduling run.
///
/// Lunch (60 min) and networking (120 min) lengths are fixed on the
/// [`Event`] variants; only the day start and the session envelope
/// vary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleParams {
    /// When the first block of every track starts.
    pub day_start: NaiveTime,

    /// Exact duration every morning session must reach.
    pub morning_goal: TimeDelta,

    /// Intended ceiling for afternoon sessions. Drives the track-count
    /// calculation only; assembly does not enforce it per track.
    pub afternoon_cap: TimeDelta,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            morning_goal: TimeDelta::hours(3),
            afternoon_cap: TimeDelta::hours(4),
        }
    }
}

impl ScheduleParams {
    /// Longest day a single track can hold: morning goal + afternoon cap.
    pub fn max_track_duration(&self) -> TimeDelta {
        self.morning_goal + self.afternoon_cap
    }

    /// Smallest total that still fills one track past its morning.
    pub fn min_track_duration(&self) -> TimeDelta {
        self.morning_goal + TimeDelta::minutes(1)
    }
}

/// One scheduled morning session plus the talks it did not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub session: Session,
    pub unused: BTreeSet<Talk>,
}

/// All required morning sessions plus the talks left for afternoons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorningSessions {
    pub sessions: Vec<Session>,
    pub unused: BTreeSet<Talk>,
}

/// Fills one morning session of exactly `goal` duration.
///
/// Picks the first combination the enumerator produces — heaviest head
/// first, head index ascending. That choice is deterministic but not
/// distinguished by any other criterion. An empty enumeration result
/// becomes a [`SchedulingError`]; an empty input set is a validation
/// failure.
pub fn schedule_morning_session(
    talks: &BTreeSet<Talk>,
    goal: TimeDelta,
) -> Result<SessionResult, ScheduleError> {
    if talks.is_empty() {
        return Err(ValidationError::NoItems.into());
    }

    let combinations = talk_combinations(talks, goal)?;
    let Some(chosen) = combinations.into_iter().next() else {
        return Err(SchedulingError::NoExactCombination {
            goal_minutes: goal.num_minutes(),
        }
        .into());
    };

    let unused = talks.difference(&chosen).cloned().collect();
    Ok(SessionResult {
        session: Session::morning(chosen)?,
        unused,
    })
}

/// Fills exactly `required` morning sessions, each from the talks the
/// previous one left over.
///
/// Fails when fewer talks remain than sessions still to fill, or when
/// any single session cannot be filled; either failure names the
/// iteration it happened in.
pub fn schedule_morning_sessions(
    talks: &BTreeSet<Talk>,
    required: usize,
    goal: TimeDelta,
) -> Result<MorningSessions, ScheduleError> {
    let mut sessions = Vec::with_capacity(required);
    let mut unused = talks.clone();

    for index in 1..=required {
        let remaining_sessions = required - sessions.len();
        if unused.len() < remaining_sessions {
            return Err(SchedulingError::TooFewTalksRemaining {
                remaining_talks: unused.len(),
                remaining_sessions,
            }
            .into());
        }

        let result =
            schedule_morning_session(&unused, goal).map_err(|source| SchedulingError::Session {
                index,
                required,
                source: Box::new(source),
            })?;
        tracing::trace!(index, required, "morning session scheduled");
        sessions.push(result.session);
        unused = result.unused;
    }

    Ok(MorningSessions { sessions, unused })
}

/// Schedules the full conference agenda: one track per required
/// morning session.
///
/// The track count is `ceil(total talk duration / max track duration)`.
/// Leftover talks are dealt round-robin, in set order, into the
/// tracks' afternoon sessions; afternoons take whatever lands in their
/// bucket, even past the cap. Each track runs morning session, lunch,
/// afternoon session, networking event, chained from the day start.
pub fn schedule_tracks(
    talks: &BTreeSet<Talk>,
    params: &ScheduleParams,
) -> Result<Vec<Track>, ScheduleError> {
    let total = talks_duration(talks);
    let minimum = params.min_track_duration();
    if total <= minimum {
        return Err(ValidationError::TotalDurationTooShort {
            total_minutes: total.num_minutes(),
            minimum_minutes: minimum.num_minutes(),
        }
        .into());
    }

    let required = required_track_count(total, params.max_track_duration());
    tracing::debug!(
        total_minutes = total.num_minutes(),
        required,
        "scheduling conference tracks"
    );

    let mornings = schedule_morning_sessions(talks, required, params.morning_goal).map_err(
        |source| SchedulingError::Agenda {
            source: Box::new(source),
        },
    )?;

    let buckets = distribute_round_robin(&mornings.unused, required);
    let mut tracks = Vec::with_capacity(required);
    for (session, bucket) in mornings.sessions.iter().zip(buckets) {
        let afternoon = Session::afternoon(bucket)?;
        let track = TrackBuilder::new(params.day_start)
            .schedule_session(session)
            .schedule_event(Event::Lunch)
            .schedule_session(&afternoon)
            .schedule_event(Event::Networking)
            .build()?;
        tracks.push(track);
    }
    Ok(tracks)
}

fn required_track_count(total: TimeDelta, max_track: TimeDelta) -> usize {
    let total_minutes = total.num_minutes();
    let max_minutes = max_track.num_minutes();
    let div = total_minutes / max_minutes;
    let count = if total_minutes % max_minutes == 0 { div } else { div + 1 };
    usize::try_from(count).expect("track count fits in usize")
}

/// Deals talks into `buckets` sets: first talk to bucket 0, second to
/// bucket 1, wrapping around. Iteration order is the talk set's
/// (title, duration) order, which keeps the distribution deterministic.
fn distribute_round_robin(talks: &BTreeSet<Talk>, buckets: usize) -> Vec<BTreeSet<Talk>> {
    let mut distributed = vec![BTreeSet::new(); buckets];
    for (position, talk) in talks.iter().enumerate() {
        distributed[position % buckets].insert(talk.clone());
    }
    distributed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk(title: &str, minutes: i64) -> Talk {
        Talk::new(title, TimeDelta::minutes(minutes)).unwrap()
    }

    fn talk_set(specs: &[(&str, i64)]) -> BTreeSet<Talk> {
        specs.iter().map(|&(title, minutes)| talk(title, minutes)).collect()
    }

    fn titles(talks: &BTreeSet<Talk>) -> Vec<String> {
        talks.iter().map(|t| t.title().to_owned()).collect()
    }

    // ========== Single Morning Session ==========

    #[test]
    fn picks_first_combination_and_returns_leftovers() {
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 60), ("D", 45), ("E", 30), ("F", 45)]);

        let result = schedule_morning_session(&talks, TimeDelta::hours(3)).unwrap();

        // Stable descending sort keeps title order for equal weights, so
        // the first-found combination is {A, B, C}.
        assert_eq!(titles(result.session.talks()), vec!["A", "B", "C"]);
        assert_eq!(titles(&result.unused), vec!["D", "E", "F"]);
        assert_eq!(result.session.duration(), TimeDelta::hours(3));
    }

    #[test]
    fn empty_input_is_a_validation_failure() {
        let err = schedule_morning_session(&BTreeSet::new(), TimeDelta::hours(3)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Validation(ValidationError::NoItems)
        ));
    }

    #[test]
    fn no_exact_combination_is_a_scheduling_failure() {
        // 50 + 50 = 100, 50 alone = 50: nothing reaches 60 exactly.
        let talks = talk_set(&[("A", 50), ("B", 50)]);

        let err = schedule_morning_session(&talks, TimeDelta::hours(1)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Scheduling(SchedulingError::NoExactCombination { goal_minutes: 60 })
        ));
    }

    // ========== Morning Sessions Sequence ==========

    #[test]
    fn threads_leftovers_across_sessions() {
        let talks = talk_set(&[
            ("A", 60),
            ("B", 60),
            ("C", 60),
            ("D", 60),
            ("E", 60),
            ("F", 60),
            ("G", 30),
        ]);

        let result = schedule_morning_sessions(&talks, 2, TimeDelta::hours(3)).unwrap();

        assert_eq!(result.sessions.len(), 2);
        let mut scheduled = BTreeSet::new();
        for session in &result.sessions {
            assert_eq!(session.duration(), TimeDelta::hours(3));
            for t in session.talks() {
                assert!(scheduled.insert(t.clone()), "talk scheduled twice");
            }
        }
        assert_eq!(titles(&result.unused), vec!["G"]);
    }

    #[test]
    fn too_few_talks_fails_before_searching() {
        let talks = talk_set(&[("A", 60)]);

        let err = schedule_morning_sessions(&talks, 2, TimeDelta::hours(3)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Scheduling(SchedulingError::TooFewTalksRemaining {
                remaining_talks: 1,
                remaining_sessions: 2,
            })
        ));
    }

    #[test]
    fn session_failure_names_the_iteration() {
        // First session consumes A+B+C; the rest cannot reach 180.
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 60), ("D", 50), ("E", 50)]);

        let err = schedule_morning_sessions(&talks, 2, TimeDelta::hours(3)).unwrap_err();
        match err {
            ScheduleError::Scheduling(SchedulingError::Session {
                index,
                required,
                source,
            }) => {
                assert_eq!((index, required), (2, 2));
                assert!(matches!(
                    *source,
                    ScheduleError::Scheduling(SchedulingError::NoExactCombination {
                        goal_minutes: 180
                    })
                ));
            }
            other => panic!("expected a session-tagged failure, got {other:?}"),
        }
    }

    // ========== Full Track Assembly ==========

    #[test]
    fn schedules_the_single_track_scenario() {
        // 300 minutes total: ceil(300 / 420) = 1 track.
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 60), ("D", 45), ("E", 30), ("F", 45)]);

        let tracks = schedule_tracks(&talks, &ScheduleParams::default()).unwrap();
        assert_eq!(tracks.len(), 1);

        let events = tracks[0].events();
        let timetable: Vec<(String, String)> = events
            .iter()
            .map(|e| (e.start().format("%H:%M").to_string(), e.label().to_owned()))
            .collect();
        assert_eq!(
            timetable,
            vec![
                ("09:00".to_owned(), "A".to_owned()),
                ("10:00".to_owned(), "B".to_owned()),
                ("11:00".to_owned(), "C".to_owned()),
                ("12:00".to_owned(), "Lunch".to_owned()),
                ("13:00".to_owned(), "D".to_owned()),
                ("13:45".to_owned(), "E".to_owned()),
                ("14:15".to_owned(), "F".to_owned()),
                ("15:00".to_owned(), "Networking event".to_owned()),
            ]
        );
        assert_eq!(
            events.last().unwrap().end(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        );
    }

    #[test]
    fn every_talk_lands_in_exactly_one_track() {
        let talks = talk_set(&[
            ("A", 60),
            ("B", 60),
            ("C", 60),
            ("D", 60),
            ("E", 60),
            ("F", 60),
            ("G", 45),
            ("H", 45),
            ("I", 30),
            ("J", 30),
            ("K", 30),
            ("L", 15),
        ]);

        let tracks = schedule_tracks(&talks, &ScheduleParams::default()).unwrap();
        // 555 minutes: ceil(555 / 420) = 2 tracks.
        assert_eq!(tracks.len(), 2);

        let mut seen = BTreeSet::new();
        for track in &tracks {
            for t in track.talks() {
                assert!(seen.insert(t), "talk appeared in two tracks");
            }
        }
        assert_eq!(seen, talks);
    }

    #[test]
    fn blocks_are_contiguous_from_day_start() {
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 60), ("D", 45), ("E", 30), ("F", 45)]);
        let params = ScheduleParams::default();

        let tracks = schedule_tracks(&talks, &params).unwrap();
        for track in &tracks {
            let events = track.events();
            assert_eq!(events[0].start(), params.day_start);
            for pair in events.windows(2) {
                assert_eq!(pair[1].start(), pair[0].end());
            }
        }
    }

    #[test]
    fn rerunning_yields_identical_tracks() {
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 60), ("D", 45), ("E", 30), ("F", 45)]);
        let params = ScheduleParams::default();

        let first = schedule_tracks(&talks, &params).unwrap();
        let second = schedule_tracks(&talks, &params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn total_at_or_below_minimum_is_rejected() {
        // Exactly 181 minutes: still not strictly above the minimum.
        let talks = talk_set(&[("A", 60), ("B", 60), ("C", 56), ("D", 5)]);

        let err = schedule_tracks(&talks, &ScheduleParams::default()).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Validation(ValidationError::TotalDurationTooShort {
                total_minutes: 181,
                minimum_minutes: 181,
            })
        ));
    }

    #[test]
    fn infeasible_morning_session_aborts_without_tracks() {
        // 190 minutes total but no subset reaches 180 exactly.
        let talks = talk_set(&[("A", 50), ("B", 50), ("C", 45), ("D", 45)]);

        let err = schedule_tracks(&talks, &ScheduleParams::default()).unwrap_err();
        match err {
            ScheduleError::Scheduling(SchedulingError::Agenda { source }) => {
                assert!(matches!(
                    *source,
                    ScheduleError::Scheduling(SchedulingError::Session { index: 1, .. })
                ));
            }
            other => panic!("expected an agenda-level failure, got {other:?}"),
        }
    }

    #[test]
    fn track_count_rounds_up_only_on_a_remainder() {
        let max_track = TimeDelta::minutes(420);
        assert_eq!(required_track_count(TimeDelta::minutes(300), max_track), 1);
        assert_eq!(required_track_count(TimeDelta::minutes(420), max_track), 1);
        assert_eq!(required_track_count(TimeDelta::minutes(421), max_track), 2);
        assert_eq!(required_track_count(TimeDelta::minutes(840), max_track), 2);
        assert_eq!(required_track_count(TimeDelta::minutes(841), max_track), 3);
    }

    #[test]
    fn round_robin_deals_in_set_order() {
        let talks = talk_set(&[("A", 30), ("B", 30), ("C", 30), ("D", 30), ("E", 30)]);

        let buckets = distribute_round_robin(&talks, 2);
        assert_eq!(titles(&buckets[0]), vec!["A", "C", "E"]);
        assert_eq!(titles(&buckets[1]), vec!["B", "D"]);
    }
}

//! Core scheduling engine for the conference track scheduler.
//!
//! This crate contains the algorithmic heart of the system:
//! - Subset-sum enumeration: every combination of weighted items that
//!   sums exactly to a target
//! - Session scheduling: filling fixed-duration morning sessions and
//!   distributing the remainder into afternoon sessions
//! - Track assembly: anchoring sessions, lunch and networking blocks
//!   to absolute times of day
//!
//! Parsing input files and rendering finished schedules live in the
//! `cts` binary crate; nothing here touches I/O.

mod error;
mod event;
mod knapsack;
mod schedule;
mod talk;
mod track;
mod weight;

pub use error::{ScheduleError, SchedulingError, ValidationError};
pub use event::{Event, LUNCH_MINUTES, NETWORKING_MINUTES, Session, SessionKind, talks_duration};
pub use knapsack::{Combination, combinations_summing_to};
pub use schedule::{
    MorningSessions, ScheduleParams, SessionResult, schedule_morning_session,
    schedule_morning_sessions, schedule_tracks,
};
pub use talk::{MAX_TALK_MINUTES, MIN_TALK_MINUTES, Talk, talk_combinations};
pub use track::{ScheduledEvent, Track, TrackBuilder};
pub use weight::{Weighable, Weight};

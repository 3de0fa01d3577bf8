//! Schedulable events: leaf blocks and talk sessions.
//!
//! A track is assembled from leaf events only. [`Session`] is the
//! composite: a named talk group scheduled as one block but expanded
//! into its talks when laid into a track. The [`Event`] enum has no
//! sequence variant, so a nested composite can never end up with a
//! timestamp.

use std::collections::BTreeSet;

use chrono::TimeDelta;
use serde::Serialize;

use crate::error::ValidationError;
use crate::talk::Talk;

/// Fixed length of the lunch break, in minutes.
pub const LUNCH_MINUTES: i64 = 60;

/// Fixed length of the networking event, in minutes.
pub const NETWORKING_MINUTES: i64 = 120;

/// A leaf event: the only thing that may carry a start time in a
/// finished track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Talk(Talk),
    Lunch,
    Networking,
}

impl Event {
    /// The label shown on the printed agenda.
    pub fn label(&self) -> &str {
        match self {
            Self::Talk(talk) => talk.title(),
            Self::Lunch => "Lunch",
            Self::Networking => "Networking event",
        }
    }

    /// How long the event runs.
    pub fn duration(&self) -> TimeDelta {
        match self {
            Self::Talk(talk) => talk.duration(),
            Self::Lunch => TimeDelta::minutes(LUNCH_MINUTES),
            Self::Networking => TimeDelta::minutes(NETWORKING_MINUTES),
        }
    }
}

/// Which half of the day a session fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Morning,
    Afternoon,
}

impl SessionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning session",
            Self::Afternoon => "Afternoon session",
        }
    }
}

/// A named, non-empty group of talks treated as one timed block.
///
/// Duration is the sum of the member durations. Talks iterate in set
/// order (title, then duration), which fixes the order they are laid
/// into a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kind: SessionKind,
    talks: BTreeSet<Talk>,
}

impl Session {
    /// Builds a morning session; fails on an empty talk set.
    pub fn morning(talks: BTreeSet<Talk>) -> Result<Self, ValidationError> {
        Self::new(SessionKind::Morning, talks)
    }

    /// Builds an afternoon session; fails on an empty talk set.
    pub fn afternoon(talks: BTreeSet<Talk>) -> Result<Self, ValidationError> {
        Self::new(SessionKind::Afternoon, talks)
    }

    fn new(kind: SessionKind, talks: BTreeSet<Talk>) -> Result<Self, ValidationError> {
        if talks.is_empty() {
            return Err(ValidationError::EmptySession);
        }
        Ok(Self { kind, talks })
    }

    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    pub const fn talks(&self) -> &BTreeSet<Talk> {
        &self.talks
    }

    /// Total duration of the member talks.
    pub fn duration(&self) -> TimeDelta {
        talks_duration(&self.talks)
    }
}

/// Sums the durations of a talk collection.
pub fn talks_duration<'a, I>(talks: I) -> TimeDelta
where
    I: IntoIterator<Item = &'a Talk>,
{
    talks
        .into_iter()
        .fold(TimeDelta::zero(), |total, talk| total + talk.duration())
}

//! Tracks: time-anchored sequences of leaf events.

use std::collections::BTreeSet;

use chrono::{NaiveTime, TimeDelta};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::event::{Event, Session};
use crate::talk::Talk;

/// A leaf event anchored to an absolute start time.
///
/// Only scheduled events carry temporal position; the end time is
/// derived as start + duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    start: NaiveTime,
    event: Event,
}

impl ScheduledEvent {
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.start + self.event.duration()
    }

    pub const fn event(&self) -> &Event {
        &self.event
    }

    pub fn label(&self) -> &str {
        self.event.label()
    }

    pub fn duration(&self) -> TimeDelta {
        self.event.duration()
    }
}

impl Serialize for ScheduledEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ScheduledEvent", 3)?;
        state.serialize_field("start", &self.start.format("%H:%M").to_string())?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("minutes", &self.duration().num_minutes())?;
        state.end()
    }
}

/// One full day lane: morning session talks, lunch, afternoon session
/// talks, networking event, each starting when the previous block ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    events: Vec<ScheduledEvent>,
}

impl Track {
    /// The scheduled events in day order.
    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// All talks placed in this track, across both sessions.
    pub fn talks(&self) -> BTreeSet<Talk> {
        self.events
            .iter()
            .filter_map(|scheduled| match scheduled.event() {
                Event::Talk(talk) => Some(talk.clone()),
                Event::Lunch | Event::Networking => None,
            })
            .collect()
    }
}

/// Accumulator for incremental track assembly.
///
/// The first event starts at the day-start time; every later event
/// starts at the previous event's end. Sessions are expanded into
/// their member talks, so a finished track holds leaves only.
#[derive(Debug)]
pub struct TrackBuilder {
    day_start: NaiveTime,
    scheduled: Vec<ScheduledEvent>,
}

impl TrackBuilder {
    pub const fn new(day_start: NaiveTime) -> Self {
        Self {
            day_start,
            scheduled: Vec::new(),
        }
    }

    /// Appends one leaf event at the next free time slot.
    #[must_use]
    pub fn schedule_event(mut self, event: Event) -> Self {
        let start = self
            .scheduled
            .last()
            .map_or(self.day_start, ScheduledEvent::end);
        self.scheduled.push(ScheduledEvent { start, event });
        self
    }

    /// Appends every talk of a session, in session order.
    #[must_use]
    pub fn schedule_session(mut self, session: &Session) -> Self {
        for talk in session.talks() {
            self = self.schedule_event(Event::Talk(talk.clone()));
        }
        self
    }

    /// Finishes the track; fails if nothing was scheduled.
    pub fn build(self) -> Result<Track, ValidationError> {
        if self.scheduled.is_empty() {
            return Err(ValidationError::EmptyTrack);
        }
        Ok(Track {
            events: self.scheduled,
        })
    }
}

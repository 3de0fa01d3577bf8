//! Schedule rendering.
//!
//! Rendering policy lives entirely here: the engine hands over tracks
//! of (start time, label, duration) triples and this module decides
//! how they read. A 5-minute talk prints as `lightning`; lunch and
//! networking carry no duration suffix.

use std::fmt::Write;

use cts_core::{Event, ScheduledEvent, Track};

/// Renders tracks as the human-readable agenda.
pub fn render_tracks(tracks: &[Track]) -> String {
    let mut out = String::new();
    for (position, track) in tracks.iter().enumerate() {
        let _ = writeln!(out, "Track {}:", position + 1);
        for event in track.events() {
            let _ = writeln!(out, "{}", render_event(event));
        }
        out.push('\n');
    }
    out
}

/// Renders tracks as pretty-printed JSON.
pub fn render_tracks_json(tracks: &[Track]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "tracks": tracks }))
}

fn render_event(event: &ScheduledEvent) -> String {
    let start = event.start().format("%I:%M %p");
    match event.event() {
        Event::Lunch | Event::Networking => format!("{start} {}", event.label()),
        Event::Talk(talk) if talk.minutes() == 5 => format!("{start} {} lightning", event.label()),
        Event::Talk(talk) => format!("{start} {} {}min", event.label(), talk.minutes()),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::TimeDelta;
    use cts_core::{ScheduleParams, Talk, schedule_tracks};
    use insta::assert_snapshot;

    use super::*;

    fn talk_set(specs: &[(&str, i64)]) -> BTreeSet<Talk> {
        specs
            .iter()
            .map(|&(title, minutes)| Talk::new(title, TimeDelta::minutes(minutes)).unwrap())
            .collect()
    }

    #[test]
    fn renders_single_track_agenda() {
        let talks = talk_set(&[
            ("Async in Practice", 60),
            ("Borrowing Without Tears", 60),
            ("Crates We Love", 60),
            ("Designing APIs", 45),
            ("Error Handling", 30),
            ("Fearless Refactoring", 45),
        ]);
        let tracks = schedule_tracks(&talks, &ScheduleParams::default()).unwrap();

        assert_snapshot!(render_tracks(&tracks), @r"
        Track 1:
        09:00 AM Async in Practice 60min
        10:00 AM Borrowing Without Tears 60min
        11:00 AM Crates We Love 60min
        12:00 PM Lunch
        01:00 PM Designing APIs 45min
        01:45 PM Error Handling 30min
        02:15 PM Fearless Refactoring 45min
        03:00 PM Networking event
        ");
    }

    #[test]
    fn lightning_talks_print_without_minutes() {
        let talks = talk_set(&[
            ("A", 60),
            ("B", 60),
            ("C", 60),
            ("D", 45),
            ("E", 45),
            ("F", 5),
        ]);
        let tracks = schedule_tracks(&talks, &ScheduleParams::default()).unwrap();

        let output = render_tracks(&tracks);
        assert!(output.contains("F lightning\n"), "got:\n{output}");
        assert!(!output.contains(" 5min"), "got:\n{output}");
    }

    #[test]
    fn json_output_carries_every_scheduled_event() {
        let talks = talk_set(&[
            ("A", 60),
            ("B", 60),
            ("C", 60),
            ("D", 45),
            ("E", 30),
            ("F", 45),
        ]);
        let tracks = schedule_tracks(&talks, &ScheduleParams::default()).unwrap();

        let json = render_tracks_json(&tracks).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let events = value["tracks"][0]["events"].as_array().unwrap();
        // Six talks plus lunch plus networking.
        assert_eq!(events.len(), 8);
        assert_eq!(events[0]["start"], "09:00");
        assert_eq!(events[3]["label"], "Lunch");
        assert_eq!(events[3]["minutes"], 60);
    }
}

use crate::model::score::Score;
use anyhow::{Result, anyhow, bail};
use log::debug;
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::path::Path;

/// Pulses per quarter note used for every written file.
pub const TICKS_PER_BEAT: u32 = 480;
const MICROSECONDS_PER_MINUTE: u32 = 60_000_000;

fn beats_to_ticks(beats: f64) -> u32 {
    (beats * TICKS_PER_BEAT as f64).round() as u32
}

/// Sort key for events sharing a tick: metas first, then note-offs, so a
/// note ending exactly where the next one starts is released before the new
/// note-on lands on the same pitch.
fn event_order_key(kind: &TrackEventKind) -> u8 {
    match kind {
        TrackEventKind::Meta(_) => 0,
        TrackEventKind::Midi { message, .. } => match message {
            MidiMessage::ProgramChange { .. } => 1,
            MidiMessage::NoteOff { .. } => 2,
            _ => 3,
        },
        TrackEventKind::SysEx(_) | TrackEventKind::Escape(_) => 4,
    }
}

/// Serialize a score to a format-1 SMF: one track per `TrackSetup`, each
/// opening with a tempo meta and a program change at tick 0, followed by the
/// track's delta-encoded note-on/note-off pairs and an end-of-track meta.
pub fn score_to_smf(score: &Score) -> Result<Smf<'static>> {
    if score.tempo_bpm == 0 {
        bail!("Cannot serialize a score with a zero tempo..!");
    }
    if score.tracks.is_empty() {
        bail!("Cannot serialize a score with no tracks..!");
    }

    let tempo_mpqn = MICROSECONDS_PER_MINUTE / score.tempo_bpm;
    let header = Header::new(
        Format::Parallel,
        Timing::Metrical((TICKS_PER_BEAT as u16).into()),
    );
    let mut tracks: Vec<Vec<TrackEvent>> = Vec::with_capacity(score.tracks.len());

    for setup in score.tracks.iter() {
        let mut abs_events: Vec<(u32, TrackEventKind)> = Vec::new();

        abs_events.push((0, TrackEventKind::Meta(MetaMessage::Tempo(tempo_mpqn.into()))));
        abs_events.push((
            0,
            TrackEventKind::Midi {
                channel: setup.channel.into(),
                message: MidiMessage::ProgramChange {
                    program: setup.program.into(),
                },
            },
        ));

        for ev in score.events.iter().filter(|ev| ev.track == setup.track) {
            if ev.start_beats < 0.0 || ev.duration_beats < 0.0 {
                bail!(
                    "Refusing to serialize an event with negative timing..! [start: {}, duration: {}]",
                    ev.start_beats,
                    ev.duration_beats
                );
            }

            abs_events.push((
                beats_to_ticks(ev.start_beats),
                TrackEventKind::Midi {
                    channel: ev.channel.into(),
                    message: MidiMessage::NoteOn {
                        key: ev.pitch.into(),
                        vel: ev.velocity.into(),
                    },
                },
            ));
            abs_events.push((
                beats_to_ticks(ev.start_beats + ev.duration_beats),
                TrackEventKind::Midi {
                    channel: ev.channel.into(),
                    message: MidiMessage::NoteOff {
                        key: ev.pitch.into(),
                        vel: 0.into(),
                    },
                },
            ));
        }

        abs_events.sort_by(|(tick_a, kind_a), (tick_b, kind_b)| {
            tick_a
                .cmp(tick_b)
                .then_with(|| event_order_key(kind_a).cmp(&event_order_key(kind_b)))
        });

        let mut track: Vec<TrackEvent> = Vec::with_capacity(abs_events.len() + 1);
        let mut last_tick = 0u32;
        for (tick, kind) in abs_events.into_iter() {
            track.push(TrackEvent {
                delta: tick.saturating_sub(last_tick).into(),
                kind,
            });
            last_tick = tick;
        }

        track.push(TrackEvent {
            delta: 0.into(),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        });

        debug!(
            "Serialized track {} with {} events (channel {}, program {})...",
            setup.track,
            track.len(),
            setup.channel,
            setup.program
        );

        tracks.push(track);
    }

    Ok(Smf { header, tracks })
}

/// Write the score to `path` as a Standard MIDI File.
pub fn export_score<P: AsRef<Path>>(score: &Score, path: P) -> Result<()> {
    let smf = score_to_smf(score)?;

    smf.save(path.as_ref()).map_err(|e| {
        anyhow!(
            "Failed to write MIDI file {}: {}",
            path.as_ref().display(),
            e
        )
    })?;

    debug!(
        "Wrote {} tracks to '{}'...",
        smf.tracks.len(),
        path.as_ref().display()
    );

    Ok(())
}

use crate::model::score::NoteEvent;
use crate::theory::{ScaleNote, ScaleType, midi_number};
use anyhow::{Result, bail};

/// Beats per bar in the fixed 4/4 meter; every chord sustains one bar.
const BEATS_PER_BAR: f64 = 4.0;

const CHORD_VELOCITY: u8 = 70;

/// Harmonize a melody of `length` notes with one sustained triad per
/// 4-beat bar, across `length / 4` bars.
///
/// The scale type's degree progression is cycled across the bars.
/// Triads are stacked by skipping two scale positions per voice, wrapping the
/// third and fifth past the top of the scale. A degree whose root index falls
/// past the top leaves its bar silent; the harmonic clock advances by a full
/// bar either way, so chords never drift against the bar count.
pub fn generate_chords(
    scale: &[ScaleNote],
    scale_type: ScaleType,
    length: usize,
    track: u8,
    channel: u8,
) -> Result<Vec<NoteEvent>> {
    if scale.is_empty() {
        bail!("Cannot harmonize over an empty scale..!");
    }

    let progression = scale_type.progression();
    let bars = length / 4;

    let mut events = Vec::with_capacity(bars * 3);
    let mut time = 0.0;

    for bar in 0..bars {
        let degree = progression[bar % progression.len()];
        let root_idx = (degree - 1) * 2;

        if root_idx < scale.len() {
            let third_idx = (root_idx + 2) % scale.len();
            let fifth_idx = (root_idx + 4) % scale.len();

            for idx in [root_idx, third_idx, fifth_idx] {
                let note = &scale[idx];
                events.push(NoteEvent {
                    track,
                    channel,
                    pitch: midi_number(note.name, note.octave)?,
                    start_beats: time,
                    duration_beats: BEATS_PER_BAR,
                    velocity: CHORD_VELOCITY,
                });
            }
        }

        time += BEATS_PER_BAR;
    }

    Ok(events)
}

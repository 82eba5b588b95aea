use crate::model::score::NoteEvent;
use crate::rng::Randomness;
use crate::theory::{ScaleNote, midi_number};
use anyhow::{Result, bail};

/// Widest allowed jump between consecutive scale indices (a sixth).
const MAX_LEAP: usize = 3;

/// Durations (in beats) a melody note may take.
const NOTE_DURATIONS: [f64; 3] = [0.5, 1.0, 2.0];

const VELOCITY_MIN: i64 = 85;
const VELOCITY_MAX: i64 = 110;

/// Generate `length` melody notes as a stochastic walk over the scale.
///
/// The first note is drawn from the whole scale; every following note is
/// drawn from a window of at most `MAX_LEAP` scale positions around its
/// predecessor, which biases the line toward stepwise motion.
pub fn generate_melody<R: Randomness>(
    scale: &[ScaleNote],
    length: usize,
    track: u8,
    channel: u8,
    rng: &mut R,
) -> Result<Vec<NoteEvent>> {
    if scale.is_empty() {
        bail!("Cannot generate a melody from an empty scale..!");
    }

    let top = scale.len() - 1;
    let mut events = Vec::with_capacity(length);
    let mut time = 0.0;
    let mut prev_idx: Option<usize> = None;

    for _ in 0..length {
        let note_idx = match prev_idx {
            Some(prev) => {
                let low = prev.saturating_sub(MAX_LEAP);
                let high = (prev + MAX_LEAP).min(top);
                rng.int_in_range(low as i64, high as i64) as usize
            }
            None => rng.int_in_range(0, top as i64) as usize,
        };
        prev_idx = Some(note_idx);

        let note = &scale[note_idx];
        let duration = *rng.choose(&NOTE_DURATIONS);
        let velocity = rng.int_in_range(VELOCITY_MIN, VELOCITY_MAX) as u8;

        events.push(NoteEvent {
            track,
            channel,
            pitch: midi_number(note.name, note.octave)?,
            start_beats: time,
            duration_beats: duration,
            velocity,
        });

        time += duration;
    }

    Ok(events)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rng::{ScriptedRandomness, SeededRandomness};
    use crate::theory::{ScaleType, build_scale};

    #[test]
    fn melody_has_the_requested_length() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("C", ScaleType::Major, 2, 4).unwrap();
        let mut rng = SeededRandomness::new(Some(99));

        for length in [0, 1, 8, 32] {
            let melody = generate_melody(&scale, length, 0, 0, &mut rng).unwrap();
            assert_eq!(melody.len(), length);
        }
    }

    #[test]
    fn consecutive_pitches_stay_within_the_leap_window() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("D", ScaleType::Minor, 2, 4).unwrap();
        let mut rng = SeededRandomness::new(Some(2024));
        let melody = generate_melody(&scale, 200, 0, 0, &mut rng).unwrap();

        // Recover each note's scale index from its pitch; the scale spans two
        // octaves so every pitch appears at exactly one index.
        let indices = melody
            .iter()
            .map(|ev| {
                scale
                    .iter()
                    .position(|n| midi_number(n.name, n.octave).unwrap() == ev.pitch)
                    .unwrap()
            })
            .collect::<Vec<_>>();

        for pair in indices.windows(2) {
            assert!(pair[0].abs_diff(pair[1]) <= MAX_LEAP);
        }
    }

    #[test]
    fn time_cursor_accumulates_the_drawn_durations() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("G", ScaleType::Major, 2, 4).unwrap();
        let mut rng = SeededRandomness::new(Some(5));
        let melody = generate_melody(&scale, 50, 0, 0, &mut rng).unwrap();

        let mut expected_start = 0.0;
        for ev in &melody {
            assert_eq!(ev.start_beats, expected_start);
            assert!(NOTE_DURATIONS.contains(&ev.duration_beats));
            expected_start += ev.duration_beats;
        }
    }

    #[test]
    fn velocities_stay_inside_the_drawn_range() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("A", ScaleType::Minor, 2, 4).unwrap();
        let mut rng = SeededRandomness::new(Some(77));
        let melody = generate_melody(&scale, 100, 0, 0, &mut rng).unwrap();

        assert!(
            melody
                .iter()
                .all(|ev| (VELOCITY_MIN..=VELOCITY_MAX).contains(&(ev.velocity as i64)))
        );
    }

    #[test]
    fn scripted_draws_produce_an_exact_sequence() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("C", ScaleType::Major, 2, 4).unwrap();

        // Per note: scale index, duration choice, velocity.
        let mut rng = ScriptedRandomness::new([
            0, 2, 100, // C4, 2 beats
            3, 0, 90, // F4, half beat
            6, 1, 85, // B4, 1 beat
        ]);

        let melody = generate_melody(&scale, 3, 0, 0, &mut rng).unwrap();

        assert_eq!(melody[0].pitch, 60);
        assert_eq!(melody[0].start_beats, 0.0);
        assert_eq!(melody[0].duration_beats, 2.0);
        assert_eq!(melody[0].velocity, 100);

        assert_eq!(melody[1].pitch, 65);
        assert_eq!(melody[1].start_beats, 2.0);
        assert_eq!(melody[1].duration_beats, 0.5);

        assert_eq!(melody[2].pitch, 71);
        assert_eq!(melody[2].start_beats, 2.5);
        assert_eq!(melody[2].duration_beats, 1.0);
        assert_eq!(melody[2].velocity, 85);
    }

    #[test]
    fn window_clamps_at_both_ends_of_the_scale() {
        env_logger::try_init().unwrap_or(());

        let scale = build_scale("C", ScaleType::Major, 1, 4).unwrap();

        // Start at the top index, then draw far past either bound.
        let mut rng = ScriptedRandomness::new([
            6, 0, 85, // top of a 7-note scale
            100, 0, 85, // clamped to index 6
            -100, 0, 85, // clamped to index 3 (6 - MAX_LEAP)
        ]);

        let melody = generate_melody(&scale, 3, 0, 0, &mut rng).unwrap();

        assert_eq!(melody[0].pitch, 71); // B4
        assert_eq!(melody[1].pitch, 71); // still B4
        assert_eq!(melody[2].pitch, 65); // F4
    }

    #[test]
    fn single_note_scale_always_picks_the_root() {
        env_logger::try_init().unwrap_or(());

        let scale = vec![ScaleNote {
            name: "C",
            octave: 4,
        }];
        let mut rng = SeededRandomness::new(Some(8));
        let melody = generate_melody(&scale, 16, 0, 0, &mut rng).unwrap();

        assert!(melody.iter().all(|ev| ev.pitch == 60));
    }

    #[test]
    fn empty_scale_is_rejected() {
        env_logger::try_init().unwrap_or(());

        let mut rng = SeededRandomness::new(Some(3));
        assert!(generate_melody(&[], 4, 0, 0, &mut rng).is_err());
    }
}

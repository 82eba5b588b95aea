use anyhow::{Result, bail};

/// The 12 chromatic note names (sharps only), ascending from C.
pub const CHROMATIC_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// The octave whose C is MIDI note 60.
pub const MIDDLE_OCTAVE: i32 = 4;

// Semitone steps of one diatonic octave. Each pattern sums to 12,
// so the walk lands back on the root after 7 steps.
const MAJOR_INTERVALS: [usize; 7] = [2, 2, 1, 2, 2, 2, 1];
const MINOR_INTERVALS: [usize; 7] = [2, 1, 2, 2, 1, 2, 2];

// 1-based scale degrees, cycled across the bars of the chord section.
const MAJOR_PROGRESSION: [usize; 4] = [1, 4, 5, 1];
const MINOR_PROGRESSION: [usize; 4] = [1, 6, 4, 5];

/// General MIDI percussion keys for the drum voices used by the pattern generator.
pub const DRUM_NOTES: &[(&str, u8)] = &[("kick", 36), ("snare", 38), ("hihat", 42), ("ride", 51)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
}

impl ScaleType {
    pub fn intervals(&self) -> &'static [usize; 7] {
        match self {
            ScaleType::Major => &MAJOR_INTERVALS,
            ScaleType::Minor => &MINOR_INTERVALS,
        }
    }

    pub fn progression(&self) -> &'static [usize] {
        match self {
            ScaleType::Major => &MAJOR_PROGRESSION,
            ScaleType::Minor => &MINOR_PROGRESSION,
        }
    }
}

/// One degree of a built scale: a chromatic note name plus its absolute octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleNote {
    pub name: &'static str,
    pub octave: i32,
}

/// Position of a note name in the chromatic set, case-insensitive.
pub fn chromatic_index(name: &str) -> Option<usize> {
    CHROMATIC_NOTES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
}

/// Return a reference to the GM percussion key for the given drum voice, if present.
pub fn drum_note(voice: &str) -> Option<u8> {
    DRUM_NOTES
        .iter()
        .find(|(name, _)| *name == voice)
        .map(|(_, key)| *key)
}

/// Build an ascending scale of `octaves * 7` notes rooted at `key`.
///
/// Each octave block restarts the interval walk at the root's chromatic
/// index, so note names repeat per block while the octave number climbs.
pub fn build_scale(
    key: &str,
    scale_type: ScaleType,
    octaves: u32,
    base_octave: i32,
) -> Result<Vec<ScaleNote>> {
    let Some(start_idx) = chromatic_index(key) else {
        bail!(
            "Unknown key '{}'..! Expected one of: {}.",
            key,
            CHROMATIC_NOTES.join(", ")
        );
    };

    let mut scale = Vec::with_capacity(octaves as usize * 7);

    for octave in 0..octaves {
        let mut current_idx = start_idx;
        for &interval in scale_type.intervals() {
            scale.push(ScaleNote {
                name: CHROMATIC_NOTES[current_idx],
                octave: base_octave + octave as i32,
            });
            current_idx = (current_idx + interval) % 12;
        }
    }

    Ok(scale)
}

/// Convert a note name and octave to a MIDI note number, anchored at
/// C4 = 60. Fails for names outside the chromatic set or notes that
/// land outside the 0..=127 MIDI range.
pub fn midi_number(name: &str, octave: i32) -> Result<u8> {
    let Some(offset) = chromatic_index(name) else {
        bail!("Unknown note name '{}'..!", name);
    };

    let midi = 60 + offset as i32 + (octave - MIDDLE_OCTAVE) * 12;
    if !(0..=127).contains(&midi) {
        bail!("Note {}{} is outside the MIDI range 0..=127..!", name, octave);
    }

    Ok(midi as u8)
}

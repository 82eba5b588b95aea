use crate::model::score::{NoteEvent, Score, TrackSetup};
use crate::rng::Randomness;
use crate::theory::{self, ScaleType};
use anyhow::{Result, bail};
use log::{debug, warn};

mod drums;
mod harmony;
mod melody;

pub use drums::*;
pub use harmony::*;
pub use melody::*;

pub const MELODY_TRACK: u8 = 0;
pub const CHORD_TRACK: u8 = 1;
pub const DRUM_TRACK: u8 = 2;

/// General MIDI reserves channel 9 for percussion.
pub const DRUM_CHANNEL: u8 = 9;
const MELODY_CHANNEL: u8 = 0;
const CHORD_CHANNEL: u8 = 0;

// GM programs: acoustic grand for the melody, string ensemble for the pads.
const MELODY_PROGRAM: u8 = 0;
const CHORD_PROGRAM: u8 = 48;
const DRUM_PROGRAM: u8 = 0;

const SCALE_OCTAVES: u32 = 2;

const DRUM_HIT_DURATION: f64 = 0.25;
const DRUM_VELOCITY: u8 = 100;

/// Everything the composer needs to know about the song to write.
#[derive(Debug, Clone)]
pub struct CompositionParams {
    pub key: String,
    pub scale_type: ScaleType,
    pub tempo_bpm: u32,
    pub length: usize,
    pub base_octave: i32,
    pub enable_chords: bool,
    pub enable_drums: bool,
}

impl Default for CompositionParams {
    fn default() -> Self {
        Self {
            key: String::from("C"),
            scale_type: ScaleType::Major,
            tempo_bpm: 120,
            length: 32,
            base_octave: 4,
            enable_chords: true,
            enable_drums: true,
        }
    }
}

/// Compose a full score: a melodic walk on track 0, sustained chords on
/// track 1 and a drum pattern on track 2, the latter two only when enabled.
pub fn compose<R: Randomness>(params: &CompositionParams, rng: &mut R) -> Result<Score> {
    if params.tempo_bpm == 0 {
        bail!("Tempo must be a positive number of beats per minute..!");
    }

    let scale = theory::build_scale(
        &params.key,
        params.scale_type,
        SCALE_OCTAVES,
        params.base_octave,
    )?;

    debug!(
        "Built a {}-note {:?} scale rooted at {}...",
        scale.len(),
        params.scale_type,
        params.key
    );

    let mut tracks = vec![TrackSetup {
        track: MELODY_TRACK,
        channel: MELODY_CHANNEL,
        program: MELODY_PROGRAM,
    }];

    let mut events = generate_melody(
        &scale,
        params.length,
        MELODY_TRACK,
        MELODY_CHANNEL,
        rng,
    )?;

    if params.enable_chords {
        tracks.push(TrackSetup {
            track: CHORD_TRACK,
            channel: CHORD_CHANNEL,
            program: CHORD_PROGRAM,
        });

        events.extend(generate_chords(
            &scale,
            params.scale_type,
            params.length,
            CHORD_TRACK,
            CHORD_CHANNEL,
        )?);
    }

    if params.enable_drums {
        tracks.push(TrackSetup {
            track: DRUM_TRACK,
            channel: DRUM_CHANNEL,
            program: DRUM_PROGRAM,
        });

        for hit in generate_drum_pattern(params.length / 4) {
            let Some(pitch) = theory::drum_note(hit.voice) else {
                warn!("No GM key for drum voice '{}': skipping hit at beat {}..!", hit.voice, hit.beat);
                continue;
            };

            events.push(NoteEvent {
                track: DRUM_TRACK,
                channel: DRUM_CHANNEL,
                pitch,
                start_beats: hit.beat,
                duration_beats: DRUM_HIT_DURATION,
                velocity: DRUM_VELOCITY,
            });
        }
    }

    debug!(
        "Composed {} events across {} tracks...",
        events.len(),
        tracks.len()
    );

    Ok(Score {
        tempo_bpm: params.tempo_bpm,
        tracks,
        events,
    })
}

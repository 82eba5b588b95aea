use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    pub track: u8,
    pub channel: u8,
    pub pitch: u8,
    pub start_beats: f64,
    pub duration_beats: f64,
    pub velocity: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSetup {
    pub track: u8,
    pub channel: u8,
    pub program: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Score {
    pub tempo_bpm: u32,
    pub tracks: Vec<TrackSetup>,
    pub events: Vec<NoteEvent>,
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "tunesmith",
    about = "Procedurally compose a multi-track MIDI song from a key and a scale!"
)]
pub struct Args {
    /// Root key for the composition (one of the 12 chromatic names, e.g. C, F#, A).
    #[arg(short, long, default_value = "C")]
    pub key: String,

    /// The scale to compose in. Supports Major|Minor.
    #[arg(short, long, default_value = "major")]
    pub scale_type: String,

    /// Tempo in beats per minute.
    #[arg(short, long, default_value_t = 120)]
    pub tempo: u32,

    /// How many melody notes to generate.
    #[arg(short, long, default_value_t = 32)]
    pub length: usize,

    /// Base octave for the melodic scale (octave 4 contains middle C).
    #[arg(short, long, default_value_t = 4)]
    pub base_octave: i32,

    /// Skip the sustained chord track.
    #[arg(long, default_value_t = false)]
    pub no_chords: bool,

    /// Skip the drum track.
    #[arg(long, default_value_t = false)]
    pub no_drums: bool,

    /// Seed for the composition RNG. The same seed and arguments reproduce the same song.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path of the MIDI file to write.
    #[arg(short, long, default_value = "generated_music.mid")]
    pub out: PathBuf,

    /// Dry run (print first dry_run_max events and exit).
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Maximum events to print in dry run.
    #[arg(long, default_value_t = 80)]
    pub dry_run_max: usize,
}

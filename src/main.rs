use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use tunesmith::{Args, CompositionParams, SeededRandomness, compose, export_score, parse_scale_type};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let scale_type = parse_scale_type(&args.scale_type)?;

    let params = CompositionParams {
        key: args.key.clone(),
        scale_type,
        tempo_bpm: args.tempo,
        length: args.length,
        base_octave: args.base_octave,
        enable_chords: !args.no_chords,
        enable_drums: !args.no_drums,
    };

    info!(
        "Composing {} notes in {} {:?} at {}bpm...",
        params.length, params.key, params.scale_type, params.tempo_bpm
    );

    let mut rng = SeededRandomness::new(args.seed);
    let score = compose(&params, &mut rng)?;

    debug!(
        "Composed {} events across {} tracks..!",
        score.events.len(),
        score.tracks.len()
    );

    if args.dry_run {
        info!("Previewing at most {} events..!", args.dry_run_max);
        for (i, ev) in score.events.iter().enumerate() {
            if i >= args.dry_run_max {
                break;
            }

            info!(
                "Event {}: track={} channel={} pitch={} start={:.2} dur={:.2} vel={}",
                i, ev.track, ev.channel, ev.pitch, ev.start_beats, ev.duration_beats, ev.velocity
            );
        }
        return Ok(());
    }

    export_score(&score, &args.out)?;
    info!("Wrote '{}', happy listening..!", args.out.display());

    Ok(())
}

/// One percussion hit: a named drum voice at an absolute beat offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumHit {
    pub voice: &'static str,
    pub beat: f64,
}

/// Lay down a fixed 4/4 backbeat across `measures` measures: kick on beats
/// 1 and 3, snare on 2 and 4, hihat on every eighth. Ten hits per measure,
/// tiled at 4-beat intervals. Deterministic; no randomness involved.
pub fn generate_drum_pattern(measures: usize) -> Vec<DrumHit> {
    let mut pattern = Vec::with_capacity(measures * 10);

    for measure in 0..measures {
        let bar_start = measure as f64 * 4.0;

        for beat in 0..4 {
            let offset = bar_start + beat as f64;

            if beat == 0 || beat == 2 {
                pattern.push(DrumHit {
                    voice: "kick",
                    beat: offset,
                });
            }
            if beat == 1 || beat == 3 {
                pattern.push(DrumHit {
                    voice: "snare",
                    beat: offset,
                });
            }

            pattern.push(DrumHit {
                voice: "hihat",
                beat: offset,
            });
            pattern.push(DrumHit {
                voice: "hihat",
                beat: offset + 0.5,
            });
        }
    }

    pattern
}

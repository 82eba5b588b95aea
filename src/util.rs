use crate::theory::ScaleType;
use anyhow::{Result, bail};

pub fn parse_scale_type(input: &str) -> Result<ScaleType> {
    match input.to_lowercase().as_str() {
        "maj" | "major" => Ok(ScaleType::Major),
        "min" | "minor" => Ok(ScaleType::Minor),
        other => {
            bail!(
                "Unknown scale type '{}'..! Supported scale types are 'major' and 'minor'.",
                other
            )
        }
    }
}

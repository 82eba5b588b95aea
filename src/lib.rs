mod composer;
mod midi_exporter;
mod model;
mod rng;
mod theory;
mod util;

pub use composer::*;
pub use midi_exporter::*;
pub use model::config::*;
pub use model::score::*;
pub use rng::*;
pub use theory::*;
pub use util::*;

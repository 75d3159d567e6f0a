//! Regional registry of municipalities and mountain huts with
//! grouped statistics by province and altitude range.

pub mod load;
pub mod model;
pub mod registry;

pub use model::{AltitudeRange, MountainHut, Municipality};
pub use registry::{Region, DEFAULT_RANGE};

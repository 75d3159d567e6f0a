//! Patient/doctor assignment registry with per-doctor and
//! per-specialization statistics.

pub mod load;
pub mod model;
pub mod registry;

pub use model::{Doctor, Patient};
pub use registry::Clinic;

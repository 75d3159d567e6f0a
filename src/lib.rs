pub mod clinic;
pub mod diet;
pub mod region;
pub mod social;
pub mod utils;

pub use clinic::Clinic;
pub use diet::{Food, Takeaway};
pub use region::Region;
pub use social::Social;
pub use utils::error::{DomainError, EntityKind, Result};

//! Friend graph and group membership with superlative queries.

pub mod model;
pub mod network;

pub use model::{Group, Person};
pub use network::Social;

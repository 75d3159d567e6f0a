//! Nutrition tracking and takeaway orders.

pub mod food;
pub mod order;
pub mod restaurant;
pub mod takeaway;

pub use food::{Food, NutritionFacts, Nutrients};
pub use order::{Order, OrderStatus, PaymentMethod};
pub use restaurant::Restaurant;
pub use takeaway::{Customer, Takeaway};

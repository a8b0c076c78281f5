//! Barge compartments: independent LIFO bays addressed from 1.
//!
//! Barrels are stacked inside a compartment, so only the most recently
//! loaded barrel can be taken out. Compartments know nothing about the
//! barge's total capacity; that is enforced by [`crate::barge::Barge`].

pub mod error;
pub mod index;
pub mod stack;

pub use error::{CompartmentError, CompartmentResult};
pub use index::CompartmentIndex;
pub use stack::Compartment;

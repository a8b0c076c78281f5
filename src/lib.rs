//! # barge-route
//!
//! A barge loading simulator. Fuel barrels are loaded into and unloaded from
//! numbered compartments, each of which behaves as a last-in-first-out stack.
//! A route (a sequence of load/unload operations) is checked against the
//! stacking order and the barge's total capacity, and the peak number of
//! barrels aboard is reported when the route is consistent.
//!
//! ## Architecture
//!
//! - **Compartments** (`compartment`): LIFO stacks of [`fuel::FuelType`] tags
//! - **Barge** (`barge`): owns the compartments, counts barrels, validates operations
//! - **Operations** (`operation`): the `<action> <compartment> <fuel>` line grammar
//! - **Routes** (`route`): whole-sequence validation with a latched first error
//! - **Integers** (`integer`): operand values of any width, compared by value
//! - **Parameters & limits** (`params`, `config`): the `N K P` header and its bounds
//!
//! ## Library usage
//!
//! ```
//! use barge_route::barge::Barge;
//!
//! let mut barge = Barge::new(1, 2);
//! barge.process("+ 1 5", 1).unwrap();
//! barge.process("+ 1 5", 2).unwrap();
//! barge.process("- 1 5", 3).unwrap();
//! barge.process("- 1 5", 4).unwrap();
//! assert!(barge.is_empty());
//! assert_eq!(barge.max_barrels(), 2);
//! ```

pub mod barge;
pub mod compartment;
pub mod config;
pub mod error;
pub mod fuel;
pub mod integer;
pub mod operation;
pub mod params;
pub mod route;

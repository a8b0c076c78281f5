//! The barge: a fixed set of compartments under one capacity limit.
//!
//! Every mutating call returns a [`BargeResult`]. There is no stored error
//! state on the barge itself; a caller that wants to halt on the first
//! failure (or retry a rejected line) does so by matching on the result, see
//! [`crate::route::RouteValidator`].
//!
//! Loads are not atomic with respect to the capacity check. An overflowing
//! load is applied first and reported afterwards: the barrel stays aboard,
//! the total is incremented and the peak includes it. Every other rejection
//! leaves the barge untouched.

use crate::compartment::{Compartment, CompartmentIndex};
use crate::error::{BargeError, BargeResult};
use crate::fuel::FuelType;
use crate::integer::Integer;
use crate::operation::{Action, Operation};

/// A barge with `K` LIFO compartments and a capacity of `P` barrels.
#[derive(Debug, Clone)]
pub struct Barge {
    compartments: Vec<Compartment>,
    capacity: usize,
    total_barrels: usize,
    max_barrels: usize,
}

impl Barge {
    /// Create a barge with `num_compartments` empty compartments numbered
    /// `1..=num_compartments` and room for `capacity` barrels in total.
    pub fn new(num_compartments: usize, capacity: usize) -> Self {
        tracing::debug!(
            compartments = num_compartments,
            capacity,
            "creating barge"
        );
        Self {
            compartments: vec![Compartment::new(); num_compartments],
            capacity,
            total_barrels: 0,
            max_barrels: 0,
        }
    }

    /// Load a barrel of `fuel` on top of compartment `index`.
    ///
    /// The barrel is pushed and counted before the capacity check, and the
    /// peak is updated in every case. When the new total exceeds the
    /// capacity this returns [`BargeError::CapacityExceeded`] with the load
    /// already applied.
    pub fn load(&mut self, index: CompartmentIndex, fuel: FuelType) -> BargeResult<()> {
        let compartment = self.compartment_mut(index)?;
        tracing::debug!(compartment = %index, fuel = %fuel, "loading barrel");
        compartment.push(fuel);
        self.total_barrels += 1;
        self.max_barrels = self.max_barrels.max(self.total_barrels);

        if self.total_barrels > self.capacity {
            return Err(BargeError::CapacityExceeded {
                capacity: self.capacity,
                total: self.total_barrels,
            });
        }
        Ok(())
    }

    /// Unload the top barrel of compartment `index`, which must be `fuel`.
    ///
    /// Fails without touching the barge if the compartment is empty or its
    /// top barrel holds a different fuel type.
    pub fn unload(&mut self, index: CompartmentIndex, fuel: FuelType) -> BargeResult<()> {
        let compartment = self.compartment_mut(index)?;
        match compartment.peek() {
            Err(_) => return Err(BargeError::EmptyCompartment { index }),
            Ok(top) if *top != fuel => {
                return Err(BargeError::FuelMismatch {
                    expected: fuel,
                    actual: top.clone(),
                    index,
                });
            }
            Ok(_) => {}
        }

        // The top was just inspected, so the stack is non-empty.
        if compartment.pop().is_ok() {
            self.total_barrels -= 1;
        }

        tracing::debug!(
            compartment = %index,
            fuel = %fuel,
            total = self.total_barrels,
            "unloaded barrel"
        );
        Ok(())
    }

    /// Range-check a parsed operation and dispatch it to [`Self::load`] or
    /// [`Self::unload`].
    pub fn apply(&mut self, operation: &Operation) -> BargeResult<()> {
        self.dispatch(operation.clone())
    }

    /// Parse one operation line and apply it.
    ///
    /// Checks run in order and the first failure wins: field count, action
    /// token, integer operands, compartment range, then the load/unload rules.
    pub fn process(&mut self, text: &str, line: usize) -> BargeResult<()> {
        let operation = Operation::parse(text, line)?;
        self.dispatch(operation)
    }

    /// Whether no barrels are aboard.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_barrels == 0
    }

    /// Barrels currently aboard across all compartments.
    #[inline]
    pub fn total_barrels(&self) -> usize {
        self.total_barrels
    }

    /// Highest number of barrels aboard after any load so far.
    #[inline]
    pub fn max_barrels(&self) -> usize {
        self.max_barrels
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn num_compartments(&self) -> usize {
        self.compartments.len()
    }

    /// Look up a compartment by its 1-based index.
    pub fn compartment(&self, index: CompartmentIndex) -> Option<&Compartment> {
        self.compartments.get(index.slot())
    }

    /// Iterate over all compartments in index order.
    pub fn compartments(&self) -> impl Iterator<Item = (CompartmentIndex, &Compartment)> {
        self.compartments
            .iter()
            .enumerate()
            .filter_map(|(slot, c)| CompartmentIndex::new(slot + 1).map(|idx| (idx, c)))
    }

    fn dispatch(&mut self, operation: Operation) -> BargeResult<()> {
        let index = self.resolve(operation.compartment)?;
        match operation.action {
            Action::Load => self.load(index, operation.fuel),
            Action::Unload => self.unload(index, operation.fuel),
        }
    }

    fn resolve(&self, number: Integer) -> BargeResult<CompartmentIndex> {
        let max = self.compartments.len();
        number
            .to_usize()
            .and_then(CompartmentIndex::new)
            .filter(|idx| idx.get() <= max)
            .ok_or(BargeError::CompartmentOutOfRange { index: number, max })
    }

    fn compartment_mut(&mut self, index: CompartmentIndex) -> BargeResult<&mut Compartment> {
        let max = self.compartments.len();
        self.compartments
            .get_mut(index.slot())
            .ok_or_else(|| BargeError::CompartmentOutOfRange {
                index: Integer::from(index.get() as i64),
                max,
            })
    }
}

impl std::fmt::Display for Barge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Barge(compartments: {}, barrels: {}/{}, peak: {})",
            self.compartments.len(),
            self.total_barrels,
            self.capacity,
            self.max_barrels
        )
    }
}

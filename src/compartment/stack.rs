//! The LIFO barrel stack inside a single compartment.

use super::error::{CompartmentError, CompartmentResult};
use crate::fuel::FuelType;

/// Barrels stacked in one compartment, bottom first.
///
/// Only the top barrel (the most recently pushed) can be inspected or
/// removed. The stack has no size limit of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compartment {
    barrels: Vec<FuelType>,
}

impl Compartment {
    /// Create an empty compartment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a barrel on top of the stack.
    #[inline]
    pub fn push(&mut self, fuel: FuelType) {
        self.barrels.push(fuel);
    }

    /// Remove and return the top barrel.
    #[inline]
    pub fn pop(&mut self) -> CompartmentResult<FuelType> {
        self.barrels.pop().ok_or(CompartmentError::EmptyStack)
    }

    /// Return the top barrel without removing it.
    #[inline]
    pub fn peek(&self) -> CompartmentResult<&FuelType> {
        self.barrels.last().ok_or(CompartmentError::EmptyStack)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.barrels.is_empty()
    }

    /// Number of barrels currently stacked here.
    #[inline]
    pub fn len(&self) -> usize {
        self.barrels.len()
    }

    /// Iterate over the barrels from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, FuelType> {
        self.barrels.iter()
    }
}

impl std::fmt::Display for Compartment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, fuel) in self.barrels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{fuel}")?;
        }
        write!(f, "]")
    }
}

//! 1-based compartment addressing.

use std::num::NonZeroUsize;

/// Address of a compartment aboard the barge.
///
/// Compartments are numbered from 1, matching the operation grammar. Uses
/// `NonZeroUsize` so that index 0 cannot be constructed and
/// `Option<CompartmentIndex>` costs nothing extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct CompartmentIndex(NonZeroUsize);

impl CompartmentIndex {
    /// Create an index from its 1-based number.
    ///
    /// Returns `None` if `number` is zero.
    pub const fn new(number: usize) -> Option<Self> {
        match NonZeroUsize::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// The 1-based compartment number.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based slot in the barge's compartment storage.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0.get() - 1
    }
}

impl std::fmt::Display for CompartmentIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Fuel type tags carried by barrels.

use crate::integer::Integer;

/// Opaque identifier for the kind of fuel in a barrel.
///
/// Only equality is meaningful. Any integer is accepted: negative, zero, or
/// wider than 64 bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FuelType(Integer);

impl FuelType {
    /// Wrap a raw fuel tag.
    pub const fn new(raw: i64) -> Self {
        Self(Integer::from_i64(raw))
    }

    /// Parse a fuel tag token. Returns `None` if it is not an integer.
    pub fn parse(token: &str) -> Option<Self> {
        Integer::parse(token).map(Self)
    }

    /// The tag as `i64`, if it fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }
}

impl From<i64> for FuelType {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_type_accepts_any_integer() {
        assert_eq!(FuelType::new(-7).as_i64(), Some(-7));
        assert_eq!(FuelType::from(0).as_i64(), Some(0));
        assert_eq!(FuelType::new(i64::MAX).to_string(), i64::MAX.to_string());
    }

    #[test]
    fn wide_fuel_tags_compare_by_value() {
        let a = FuelType::parse("99999999999999999999").unwrap();
        let b = FuelType::parse("+099999999999999999999").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, FuelType::parse("99999999999999999998").unwrap());
        assert!(FuelType::parse("five").is_none());
    }
}

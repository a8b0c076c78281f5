//! The operation line grammar: `<action> <compartment> <fuel_type>`.
//!
//! `action` is `+` (load) or `-` (unload). Both operands are integers of any
//! size; the compartment number is kept as written because range checking
//! belongs to the barge, which knows how many compartments it has.

use crate::error::{BargeError, BargeResult};
use crate::fuel::FuelType;
use crate::integer::Integer;

/// What an operation does with a barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `+`: put a barrel on top of a compartment.
    Load,
    /// `-`: take the top barrel out of a compartment.
    Unload,
}

impl Action {
    /// Parse the action token. Only the exact tokens `+` and `-` are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Load),
            "-" => Some(Self::Unload),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Load => '+',
            Self::Unload => '-',
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Unload => write!(f, "unload"),
        }
    }
}

/// A parsed, not yet range-checked operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation {
    pub action: Action,
    /// Compartment number exactly as written.
    pub compartment: Integer,
    pub fuel: FuelType,
}

impl Operation {
    pub fn new(
        action: Action,
        compartment: impl Into<Integer>,
        fuel: impl Into<FuelType>,
    ) -> Self {
        Self {
            action,
            compartment: compartment.into(),
            fuel: fuel.into(),
        }
    }

    /// Parse one operation line.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// field count, then the action token, then both operands as integers.
    /// `line` is only used to label the error.
    pub fn parse(text: &str, line: usize) -> BargeResult<Self> {
        let mut fields = text.split_whitespace();
        let (Some(action), Some(compartment), Some(fuel), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(BargeError::MalformedCommand { line });
        };

        let action = Action::from_token(action).ok_or_else(|| BargeError::UnknownAction {
            action: action.to_string(),
            line,
        })?;

        let (Some(compartment), Some(fuel)) = (Integer::parse(compartment), FuelType::parse(fuel))
        else {
            return Err(BargeError::NonIntegerOperands { line });
        };

        Ok(Self::new(action, compartment, fuel))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.action.symbol(), self.compartment, self.fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_load_and_unload() {
        assert_eq!(
            Operation::parse("+ 1 5", 1).unwrap(),
            Operation::new(Action::Load, 1, 5)
        );
        assert_eq!(
            Operation::parse("  -\t2   -9 \n", 1).unwrap(),
            Operation::new(Action::Unload, 2, -9)
        );
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        for text in ["", "   ", "+ 1", "+ 1 2 3", "+1 5"] {
            assert_eq!(
                Operation::parse(text, 7),
                Err(BargeError::MalformedCommand { line: 7 }),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn action_checked_before_operands() {
        assert_eq!(
            Operation::parse("* x y", 2),
            Err(BargeError::UnknownAction {
                action: "*".into(),
                line: 2
            })
        );
        assert!(matches!(
            Operation::parse("++ 1 1", 2),
            Err(BargeError::UnknownAction { .. })
        ));
    }

    #[test]
    fn non_integer_operands() {
        for text in ["+ a 5", "- 1 b", "+ 1.5 2", "+ 1 9e9"] {
            assert_eq!(
                Operation::parse(text, 3),
                Err(BargeError::NonIntegerOperands { line: 3 }),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn out_of_range_compartment_still_parses() {
        let op = Operation::parse("+ 0 1", 1).unwrap();
        assert_eq!(op.compartment, 0);
        let op = Operation::parse("- -3 1", 1).unwrap();
        assert_eq!(op.compartment, -3);
    }

    #[test]
    fn operands_wider_than_64_bits_are_integers() {
        let op = Operation::parse("+ 1 99999999999999999999", 1).unwrap();
        assert_eq!(op.fuel, FuelType::parse("99999999999999999999").unwrap());

        let op = Operation::parse("- 99999999999999999999 -5", 2).unwrap();
        assert_eq!(op.compartment.to_string(), "99999999999999999999");
        assert_eq!(op.fuel, FuelType::new(-5));
    }

    #[test]
    fn display_round_trips_to_grammar() {
        let op = Operation::new(Action::Unload, 4, -2);
        assert_eq!(op.to_string(), "- 4 -2");
        assert_eq!(Operation::parse(&op.to_string(), 1).unwrap(), op);
    }
}

//! The closed set of calculation variants and their type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CalculationError;
use super::evaluation::{self, Evaluator};

/// Discriminator stored alongside every calculation.
///
/// The tag alone decides which evaluation rule applies, so a record can
/// never carry one tag while behaving like another variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationKind {
    /// Sum of all inputs.
    Addition,
    /// First input minus each following input.
    Subtraction,
    /// Product of all inputs.
    Multiplication,
    /// First input divided by each following input.
    Division,
}

impl CalculationKind {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
            Self::Multiplication => "multiplication",
            Self::Division => "division",
        }
    }

    /// Resolve a tag case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use calculator::domain::CalculationKind;
    ///
    /// assert_eq!(CalculationKind::parse_tag("ADDITION"), Ok(CalculationKind::Addition));
    /// assert!(CalculationKind::parse_tag("modulus").is_err());
    /// ```
    pub fn parse_tag(tag: &str) -> Result<Self, CalculationError> {
        let normalized = tag.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| CalculationError::UnsupportedType {
                tag: tag.to_owned(),
            })
    }

    /// Evaluation rule bound to this variant.
    pub fn evaluator(self) -> Evaluator {
        match self {
            Self::Addition => evaluation::add,
            Self::Subtraction => evaluation::subtract,
            Self::Multiplication => evaluation::multiply,
            Self::Division => evaluation::divide,
        }
    }

    /// Canonical tags sorted alphabetically, for error messages.
    pub fn sorted_tags() -> Vec<&'static str> {
        let mut tags: Vec<_> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
        tags.sort_unstable();
        tags
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("addition", CalculationKind::Addition)]
    #[case("Addition", CalculationKind::Addition)]
    #[case("ADDITION", CalculationKind::Addition)]
    #[case("AdDiTiOn", CalculationKind::Addition)]
    #[case("Subtraction", CalculationKind::Subtraction)]
    #[case("MULTIPLICATION", CalculationKind::Multiplication)]
    #[case("division", CalculationKind::Division)]
    fn parse_tag_ignores_case(#[case] tag: &str, #[case] expected: CalculationKind) {
        assert_eq!(tag.parse::<CalculationKind>(), Ok(expected));
    }

    #[rstest]
    #[case("modulus")]
    #[case("")]
    #[case(" addition")]
    fn parse_tag_rejects_unknown_tags(#[case] tag: &str) {
        assert_eq!(
            CalculationKind::parse_tag(tag),
            Err(CalculationError::UnsupportedType {
                tag: tag.to_owned()
            })
        );
    }

    #[rstest]
    fn tags_round_trip_through_as_str() {
        for kind in CalculationKind::ALL {
            assert_eq!(CalculationKind::parse_tag(kind.as_str()), Ok(kind));
        }
    }

    #[rstest]
    fn sorted_tags_are_alphabetical() {
        assert_eq!(
            CalculationKind::sorted_tags(),
            vec!["addition", "division", "multiplication", "subtraction"]
        );
    }

    #[rstest]
    fn serde_uses_lowercase_tags() {
        let value = serde_json::to_value(CalculationKind::Multiplication).expect("serialise");
        assert_eq!(value, "multiplication");
    }
}

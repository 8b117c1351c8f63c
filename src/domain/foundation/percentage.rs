//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Computes `part / whole` as a percentage, rounding half away from zero.
    ///
    /// A zero `whole` yields 0%; ratios above one clamp to 100%.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let rounded = (part.min(whole) * 200 + whole) / (2 * whole);
        Self::new(rounded as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn from_ratio_rounds_to_nearest() {
        let sevenths: Vec<u8> = (1..=7)
            .map(|n| Percentage::from_ratio(n, 7).value())
            .collect();
        assert_eq!(sevenths, vec![14, 29, 43, 57, 71, 86, 100]);
    }

    #[test]
    fn from_ratio_rounds_half_up() {
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
        assert_eq!(Percentage::from_ratio(1, 200).value(), 1);
    }

    #[test]
    fn from_ratio_handles_degenerate_inputs() {
        assert_eq!(Percentage::from_ratio(3, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(9, 7), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}

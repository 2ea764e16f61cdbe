use crate::models::traits::TerminalPayoff;
use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

/// Exercise side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Undiscounted payoff: `max(S_T - K, 0)` for a call, `max(K - S_T, 0)` for a put.
    #[inline]
    pub fn payoff(self, s_t: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (s_t - strike).max(0.0),
            OptionType::Put => (strike - s_t).max(0.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(anyhow!("Invalid option type: {}", other)),
        }
    }
}

/// A vanilla European contract: side plus strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vanilla {
    pub option_type: OptionType,
    pub strike: f64,
}

impl Vanilla {
    pub fn new(option_type: OptionType, strike: f64) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl TerminalPayoff for Vanilla {
    #[inline]
    fn payoff(&self, s_t: f64) -> f64 {
        self.option_type.payoff(s_t, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_is_floored_at_zero() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.payoff(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
        assert_eq!(OptionType::Call.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse_option_type() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("straddle".parse::<OptionType>().is_err());
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_vanilla_delegates_to_option_type() {
        let put = Vanilla::new(OptionType::Put, 95.0);
        assert_eq!(put.payoff(90.0), 5.0);
        assert_eq!(put.payoff(100.0), 0.0);
    }
}

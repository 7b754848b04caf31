use thiserror::Error;

pub const MAX_ROUNDING_DECIMALS: u32 = 12;

/// What to do with missing or non-numeric judge cells. `Ignore` drops them
/// from both judge statistics and the row average; the matching z-score
/// contribution is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValueStrategy {
    Ignore,
}

impl MissingValueStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingValueStrategy::Ignore => "ignore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub cutoff_rank: u32,
    pub rounding_decimals: u32,
    pub missing_values: MissingValueStrategy,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("rounding decimals {0} out of range (max {MAX_ROUNDING_DECIMALS})")]
    DecimalsOutOfRange(u32),
    #[error("unknown missing-value strategy {0:?} (supported: ignore)")]
    UnknownMissingStrategy(String),
}

impl Settings {
    pub fn new(
        cutoff_rank: u32,
        rounding_decimals: u32,
        missing_values: &str,
    ) -> Result<Self, SettingsError> {
        if rounding_decimals > MAX_ROUNDING_DECIMALS {
            return Err(SettingsError::DecimalsOutOfRange(rounding_decimals));
        }
        let missing_values = match missing_values.trim().to_ascii_lowercase().as_str() {
            "ignore" => MissingValueStrategy::Ignore,
            other => return Err(SettingsError::UnknownMissingStrategy(other.to_string())),
        };
        Ok(Settings {
            cutoff_rank,
            rounding_decimals,
            missing_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_accepted() {
        let s = Settings::new(42, 2, "ignore").unwrap();
        assert_eq!(s.cutoff_rank, 42);
        assert_eq!(s.rounding_decimals, 2);
        assert_eq!(s.missing_values, MissingValueStrategy::Ignore);
    }

    #[test]
    fn test_strategy_is_case_insensitive() {
        let s = Settings::new(10, 0, " Ignore ").unwrap();
        assert_eq!(s.missing_values, MissingValueStrategy::Ignore);
    }

    #[test]
    fn test_decimals_cap() {
        assert_eq!(
            Settings::new(42, 13, "ignore"),
            Err(SettingsError::DecimalsOutOfRange(13))
        );
        assert!(Settings::new(42, 12, "ignore").is_ok());
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert_eq!(
            Settings::new(42, 2, "zero"),
            Err(SettingsError::UnknownMissingStrategy("zero".to_string()))
        );
    }
}

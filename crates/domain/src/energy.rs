use std::{fmt, slice::Iter, str::FromStr};

use crate::{Difficulty, Property};

/// Seconds needed to perform a single set, independent of the energy level.
pub const SECONDS_PER_SET: u32 = 45;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl EnergyLevel {
    #[must_use]
    pub fn allowed_difficulties(self) -> &'static [Difficulty] {
        match self {
            EnergyLevel::Low => &[Difficulty::Beginner],
            EnergyLevel::Medium => &[Difficulty::Beginner, Difficulty::Intermediate],
            EnergyLevel::High => &[
                Difficulty::Beginner,
                Difficulty::Intermediate,
                Difficulty::Advanced,
            ],
        }
    }

    #[must_use]
    pub fn allows(self, difficulty: Difficulty) -> bool {
        self.allowed_difficulties().contains(&difficulty)
    }

    #[must_use]
    pub fn rest_seconds(self) -> u32 {
        match self {
            EnergyLevel::Low => 90,
            EnergyLevel::Medium => 60,
            EnergyLevel::High => 30,
        }
    }

    #[must_use]
    pub fn sets(self, default_sets: u32) -> u32 {
        match self {
            EnergyLevel::Low => default_sets.saturating_sub(1).max(2),
            EnergyLevel::Medium => default_sets,
            EnergyLevel::High => default_sets.saturating_add(1),
        }
    }

    #[must_use]
    pub fn reps(self, default_reps: u32) -> u32 {
        match self {
            EnergyLevel::Low => scale(default_reps, 3, 4, false).max(6),
            EnergyLevel::Medium => default_reps,
            EnergyLevel::High => scale(default_reps, 5, 4, true),
        }
    }

    /// Estimated minutes for `sets` sets including the rest after each set.
    #[must_use]
    pub fn exercise_minutes(self, sets: u32) -> f64 {
        f64::from(SECONDS_PER_SET + self.rest_seconds()) * f64::from(sets) / 60.0
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            EnergyLevel::Low => "Easier workout, longer rests",
            EnergyLevel::Medium => "Balanced intensity",
            EnergyLevel::High => "Challenging, shorter rests",
        }
    }
}

/// `value * numerator / denominator` without overflow, saturating at `u32::MAX`.
fn scale(value: u32, numerator: u64, denominator: u64, round_up: bool) -> u32 {
    let scaled = u64::from(value) * numerator;
    let scaled = if round_up {
        scaled.div_ceil(denominator)
    } else {
        scaled / denominator
    };
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

impl Property for EnergyLevel {
    fn iter() -> Iter<'static, EnergyLevel> {
        static ENERGY_LEVELS: [EnergyLevel; 3] =
            [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High];
        ENERGY_LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::High => "High",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name().to_lowercase())
    }
}

impl FromStr for EnergyLevel {
    type Err = EnergyLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            other => Err(EnergyLevelError::Invalid(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EnergyLevelError {
    #[error("Invalid energy level \"{0}\"")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(EnergyLevel::Low, &[Difficulty::Beginner])]
    #[case(EnergyLevel::Medium, &[Difficulty::Beginner, Difficulty::Intermediate])]
    #[case(
        EnergyLevel::High,
        &[Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
    )]
    fn test_allowed_difficulties(#[case] energy_level: EnergyLevel, #[case] expected: &[Difficulty]) {
        assert_eq!(energy_level.allowed_difficulties(), expected);
    }

    #[test]
    fn test_allowed_difficulties_nested() {
        for (lower, higher) in [
            (EnergyLevel::Low, EnergyLevel::Medium),
            (EnergyLevel::Medium, EnergyLevel::High),
        ] {
            for difficulty in lower.allowed_difficulties() {
                assert!(higher.allows(*difficulty));
            }
        }
    }

    #[rstest]
    #[case(EnergyLevel::Low, 2, 2)]
    #[case(EnergyLevel::Low, 3, 2)]
    #[case(EnergyLevel::Low, 4, 3)]
    #[case(EnergyLevel::Low, 1, 2)]
    #[case(EnergyLevel::Medium, 3, 3)]
    #[case(EnergyLevel::High, 3, 4)]
    #[case(EnergyLevel::High, 2, 3)]
    fn test_sets(#[case] energy_level: EnergyLevel, #[case] default: u32, #[case] expected: u32) {
        assert_eq!(energy_level.sets(default), expected);
    }

    #[rstest]
    #[case(EnergyLevel::Low, 12, 9)]
    #[case(EnergyLevel::Low, 10, 7)]
    #[case(EnergyLevel::Low, 8, 6)]
    #[case(EnergyLevel::Low, 3, 6)]
    #[case(EnergyLevel::Low, 40, 30)]
    #[case(EnergyLevel::Medium, 5, 5)]
    #[case(EnergyLevel::High, 12, 15)]
    #[case(EnergyLevel::High, 10, 13)]
    #[case(EnergyLevel::High, 8, 10)]
    #[case(EnergyLevel::High, 3, 4)]
    fn test_reps(#[case] energy_level: EnergyLevel, #[case] default: u32, #[case] expected: u32) {
        assert_eq!(energy_level.reps(default), expected);
    }

    #[rstest]
    #[case(EnergyLevel::Low, u32::MAX, u32::MAX - 1)]
    #[case(EnergyLevel::Medium, u32::MAX, u32::MAX)]
    #[case(EnergyLevel::High, u32::MAX, u32::MAX)]
    fn test_sets_large(
        #[case] energy_level: EnergyLevel,
        #[case] default: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(energy_level.sets(default), expected);
    }

    #[rstest]
    #[case(EnergyLevel::Low, u32::MAX, 3_221_225_471)]
    #[case(EnergyLevel::Medium, u32::MAX, u32::MAX)]
    #[case(EnergyLevel::High, u32::MAX / 2, 2_684_354_559)]
    #[case(EnergyLevel::High, u32::MAX, u32::MAX)]
    #[case(EnergyLevel::High, 3_435_973_836, u32::MAX)]
    fn test_reps_large(
        #[case] energy_level: EnergyLevel,
        #[case] default: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(energy_level.reps(default), expected);
    }

    #[test]
    fn test_exercise_minutes_large() {
        assert_approx_eq!(
            EnergyLevel::Low.exercise_minutes(u32::MAX),
            f64::from(u32::MAX) * 2.25
        );
    }

    #[rstest]
    #[case(EnergyLevel::Low, 2, 4.5)]
    #[case(EnergyLevel::Medium, 3, 5.25)]
    #[case(EnergyLevel::High, 4, 5.0)]
    fn test_exercise_minutes(
        #[case] energy_level: EnergyLevel,
        #[case] sets: u32,
        #[case] expected: f64,
    ) {
        assert_approx_eq!(energy_level.exercise_minutes(sets), expected);
    }

    #[test]
    fn test_seconds_per_set_is_constant() {
        assert_eq!(SECONDS_PER_SET, 45);
        for energy_level in EnergyLevel::iter() {
            assert_approx_eq!(
                energy_level.exercise_minutes(1),
                f64::from(SECONDS_PER_SET + energy_level.rest_seconds()) / 60.0
            );
        }
    }

    #[rstest]
    #[case("low", Ok(EnergyLevel::Low))]
    #[case("HIGH", Ok(EnergyLevel::High))]
    #[case("extreme", Err(EnergyLevelError::Invalid("extreme".to_string())))]
    fn test_energy_level_from_str(
        #[case] value: &str,
        #[case] expected: Result<EnergyLevel, EnergyLevelError>,
    ) {
        assert_eq!(value.parse::<EnergyLevel>(), expected);
    }

    #[test]
    fn test_energy_level_display() {
        assert_eq!(EnergyLevel::Medium.to_string(), "medium");
    }
}

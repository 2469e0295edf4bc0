use std::{fmt, str::FromStr};

pub const KG_PER_LB: f64 = 2.204_62;

/// Standard kettlebell sizes.
pub const KETTLEBELL_WEIGHTS_KG: [u32; 12] = [4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48];
pub const KETTLEBELL_WEIGHTS_LBS: [u32; 12] = [9, 18, 26, 35, 44, 53, 62, 70, 79, 88, 97, 106];

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Units {
    Kg,
    #[default]
    Lbs,
}

impl Units {
    #[must_use]
    pub fn kettlebell_weights(self) -> &'static [u32] {
        match self {
            Units::Kg => &KETTLEBELL_WEIGHTS_KG,
            Units::Lbs => &KETTLEBELL_WEIGHTS_LBS,
        }
    }

    /// Moves a weight given in kg one step along the kettlebell ladder of this unit.
    ///
    /// Weights that are not on the ladder move to its lightest kettlebell.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn adjust_weight(self, kg: f64, adjustment: Adjustment) -> f64 {
        let weights = self.kettlebell_weights();
        let current = match self {
            Units::Kg => weights.iter().position(|w| f64::from(*w) == kg),
            Units::Lbs => weights.iter().position(|w| *w == kg_to_lbs(kg)),
        };
        let index = match (current, adjustment) {
            (Some(i), Adjustment::Up) => (i + 1).min(weights.len() - 1),
            (Some(i), Adjustment::Down) => i.saturating_sub(1),
            (None, _) => 0,
        };
        match self {
            Units::Kg => f64::from(weights[index]),
            Units::Lbs => lbs_to_kg(weights[index]),
        }
    }

    #[must_use]
    pub fn format_weight(self, kg: f64) -> String {
        match self {
            Units::Kg => format!("{kg} kg"),
            Units::Lbs => format!("{} lbs", kg_to_lbs(kg)),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::Kg => "kg",
                Units::Lbs => "lbs",
            }
        )
    }
}

impl FromStr for Units {
    type Err = UnitsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "kg" => Ok(Units::Kg),
            "lbs" => Ok(Units::Lbs),
            other => Err(UnitsError::Invalid(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UnitsError {
    #[error("Invalid units \"{0}\"")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Adjustment {
    Up,
    Down,
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn kg_to_lbs(kg: f64) -> u32 {
    (kg * KG_PER_LB).round().max(0.0) as u32
}

#[must_use]
pub fn lbs_to_kg(lbs: u32) -> f64 {
    (f64::from(lbs) / KG_PER_LB * 10.0).round() / 10.0
}

#[must_use]
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let minutes = minutes % 60;
    if minutes > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{hours}h")
    }
}

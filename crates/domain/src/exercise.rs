use std::{fmt, slice::Iter, str::FromStr};

use derive_more::{Deref, Display};

use crate::{MuscleGroup, Property};

/// Static source record of a catalog exercise.
#[derive(Clone, Copy, Debug)]
pub struct ExerciseData {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub secondary_muscle_groups: &'static [MuscleGroup],
    pub difficulty: Difficulty,
    pub equipment: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub default_sets: u32,
    pub default_reps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub secondary_muscle_groups: &'static [MuscleGroup],
    pub difficulty: Difficulty,
    pub equipment: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
    pub default_sets: u32,
    pub default_reps: u32,
}

impl Exercise {
    #[must_use]
    pub fn works(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_group == muscle_group || self.secondary_muscle_groups.contains(&muscle_group)
    }

    #[must_use]
    pub fn matches(&self, search: &str) -> bool {
        let search = search.trim().to_lowercase();
        search.is_empty()
            || self.name.to_lowercase().contains(&search)
            || self.description.to_lowercase().contains(&search)
    }
}

impl From<&ExerciseData> for Exercise {
    fn from(value: &ExerciseData) -> Self {
        Exercise {
            id: ExerciseID::from_name(value.name),
            name: value.name,
            muscle_group: value.muscle_group,
            secondary_muscle_groups: value.secondary_muscle_groups,
            difficulty: value.difficulty,
            equipment: value.equipment,
            description: value.description,
            instructions: value.instructions,
            tips: value.tips,
            default_sets: value.default_sets,
            default_reps: value.default_reps,
        }
    }
}

#[derive(Deref, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ExerciseID {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Derives the stable identifier of an exercise from its name.
///
/// Lowercases, replaces each run of whitespace by a hyphen and drops every character outside
/// `[a-z0-9-]`. Identifiers are persisted with completed workouts, so the mapping must not
/// change.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }

    slug
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name().to_lowercase())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(DifficultyError::Invalid(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Invalid difficulty \"{0}\"")]
    Invalid(String),
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub search: String,
    pub muscle_group: Option<MuscleGroup>,
    pub difficulty: Option<Difficulty>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                e.matches(&self.search)
                    && self.muscle_group.is_none_or(|m| e.muscle_group == m)
                    && self.difficulty.is_none_or(|d| e.difficulty == d)
            })
            .collect()
    }
}

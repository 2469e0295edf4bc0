use std::{fmt, slice::Iter, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Back,
    Biceps,
    Chest,
    Triceps,
    Glutes,
    Shoulders,
    Core,
    Flexibility,
    Mobility,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 9] = [
            MuscleGroup::Back,
            MuscleGroup::Biceps,
            MuscleGroup::Chest,
            MuscleGroup::Triceps,
            MuscleGroup::Glutes,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
            MuscleGroup::Flexibility,
            MuscleGroup::Mobility,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Back => "Back",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Core => "Core",
            MuscleGroup::Flexibility => "Flexibility",
            MuscleGroup::Mobility => "Mobility",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MuscleGroup::Back => "back",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Core => "core",
            MuscleGroup::Flexibility => "flexibility",
            MuscleGroup::Mobility => "mobility",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();
        MuscleGroup::iter()
            .find(|m| m.id() == value)
            .copied()
            .ok_or(MuscleGroupError::Invalid(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group \"{0}\"")]
    Invalid(String),
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

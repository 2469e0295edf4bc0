use std::fmt;

use chrono::{DateTime, Duration, Utc};
use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, EnergyLevel, ExerciseID, MuscleGroup, ReadError, UpdateError, UserID,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(
        &self,
        user_id: UserID,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Workout>, ReadError>;
    async fn get_workout(&self, user_id: UserID, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(
        &self,
        user_id: UserID,
        workout: NewWorkout,
    ) -> Result<Workout, CreateError>;
    async fn modify_workout(
        &self,
        user_id: UserID,
        id: WorkoutID,
        exercises: Option<Vec<WorkoutExercise>>,
        completed_at: Option<DateTime<Utc>>,
        notes: Option<String>,
        rating: Option<Option<Rating>>,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, user_id: UserID, id: WorkoutID)
    -> Result<WorkoutID, DeleteError>;

    async fn get_workout_stats(
        &self,
        user_id: UserID,
        now: DateTime<Utc>,
    ) -> Result<WorkoutStats, ReadError> {
        let workouts = self.get_workouts(user_id, 0, usize::MAX).await?;
        Ok(WorkoutStats::new(&workouts, now))
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    /// Workouts of a user, most recently completed first.
    async fn read_workouts(
        &self,
        user_id: UserID,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Workout>, ReadError>;
    async fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(
        &self,
        user_id: UserID,
        workout: NewWorkout,
    ) -> Result<Workout, CreateError>;
    async fn modify_workout(
        &self,
        id: WorkoutID,
        exercises: Option<Vec<WorkoutExercise>>,
        completed_at: Option<DateTime<Utc>>,
        notes: Option<String>,
        rating: Option<Option<Rating>>,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// A finished workout that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub energy_level: EnergyLevel,
    pub duration_minutes: u32,
    pub muscle_groups: Vec<MuscleGroup>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub notes: String,
    pub rating: Option<Rating>,
}

impl NewWorkout {
    #[must_use]
    pub fn total_volume(&self) -> u32 {
        total_volume(&self.exercises)
    }

    #[must_use]
    pub fn elapsed_minutes(&self) -> i64 {
        elapsed_minutes(self.started_at, self.completed_at)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub user_id: UserID,
    pub energy_level: EnergyLevel,
    /// Requested duration.
    pub duration_minutes: u32,
    pub muscle_groups: Vec<MuscleGroup>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub total_volume: u32,
    pub notes: String,
    pub rating: Option<Rating>,
}

impl Workout {
    #[must_use]
    pub fn new(id: WorkoutID, user_id: UserID, workout: NewWorkout) -> Self {
        let total_volume = workout.total_volume();
        Self {
            id,
            user_id,
            energy_level: workout.energy_level,
            duration_minutes: workout.duration_minutes,
            muscle_groups: workout.muscle_groups,
            started_at: workout.started_at,
            completed_at: workout.completed_at,
            exercises: workout.exercises,
            total_volume,
            notes: workout.notes,
            rating: workout.rating,
        }
    }

    /// Applies a partial update.
    ///
    /// Each given outcome replaces the stored outcome with the same exercise and position. The
    /// total volume is recomputed afterwards. Fails without changes if an outcome matches no
    /// stored one.
    pub fn update(
        &mut self,
        exercises: Option<Vec<WorkoutExercise>>,
        completed_at: Option<DateTime<Utc>>,
        notes: Option<String>,
        rating: Option<Option<Rating>>,
    ) -> Result<(), UpdateError> {
        if let Some(exercises) = exercises {
            let mut updated = self.exercises.clone();
            for exercise in exercises {
                let Some(stored) = updated.iter_mut().find(|e| {
                    e.exercise_id == exercise.exercise_id && e.order_index == exercise.order_index
                }) else {
                    return Err(UpdateError::Conflict);
                };
                *stored = exercise;
            }
            self.exercises = updated;
            self.total_volume = total_volume(&self.exercises);
        }
        if let Some(completed_at) = completed_at {
            self.completed_at = completed_at;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        Ok(())
    }

    #[must_use]
    pub fn elapsed_minutes(&self) -> i64 {
        elapsed_minutes(self.started_at, self.completed_at)
    }

    #[must_use]
    pub fn completed_exercises(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

impl fmt::Display for WorkoutID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one exercise of a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub order_index: usize,
    pub planned_sets: u32,
    pub planned_reps: u32,
    /// Reps of each completed set.
    pub actual_reps: Vec<u32>,
    /// Kettlebell weight in kg.
    pub weight: Option<f64>,
    pub completed: bool,
    pub skipped: bool,
}

impl WorkoutExercise {
    #[must_use]
    pub fn actual_sets(&self) -> usize {
        self.actual_reps.len()
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.actual_reps.iter().sum()
    }

    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight.unwrap_or_default() * f64::from(self.total_reps())
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn total_volume(exercises: &[WorkoutExercise]) -> u32 {
    exercises
        .iter()
        .map(WorkoutExercise::volume)
        .sum::<f64>()
        .round()
        .max(0.0) as u32
}

fn elapsed_minutes(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> i64 {
    (completed_at - started_at).num_minutes().max(0)
}

#[derive(Deref, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be in the range 1 to 5 ({0})")]
    OutOfRange(u8),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub workouts_last_7_days: usize,
    pub total_minutes: u32,
    pub average_minutes: u32,
}

impl WorkoutStats {
    #[must_use]
    pub fn new(workouts: &[Workout], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        let total_workouts = workouts.len();
        let total_minutes = workouts.iter().map(|w| w.duration_minutes).sum::<u32>();
        #[allow(clippy::cast_possible_truncation)]
        let average_minutes = if total_workouts > 0 {
            let n = total_workouts as u64;
            ((u64::from(total_minutes) * 2 + n) / (2 * n)) as u32
        } else {
            0
        };
        Self {
            total_workouts,
            workouts_last_7_days: workouts
                .iter()
                .filter(|w| w.completed_at >= week_ago)
                .count(),
            total_minutes,
            average_minutes,
        }
    }
}

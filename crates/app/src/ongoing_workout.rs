use chrono::{DateTime, Utc};
use kettle_domain::{
    Catalog, EnergyLevelError, ExerciseProgress, GenerationRequest, MuscleGroupError,
    PrescribedExercise, SessionRunner,
};

#[allow(async_fn_in_trait)]
pub trait OngoingWorkoutService {
    async fn get_ongoing_workout(&self) -> Result<Option<OngoingWorkout>, String>;
    async fn set_ongoing_workout(
        &self,
        ongoing_workout: Option<OngoingWorkout>,
    ) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait OngoingWorkoutRepository {
    async fn read_ongoing_workout(&self) -> Result<Option<OngoingWorkout>, String>;
    async fn write_ongoing_workout(
        &self,
        ongoing_workout: Option<OngoingWorkout>,
    ) -> Result<(), String>;
}

/// Snapshot of a running session that survives a restart of the application.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct OngoingWorkout {
    pub muscle_groups: Vec<String>,
    pub energy_level: String,
    pub duration_minutes: u32,
    pub start_time: DateTime<Utc>,
    pub exercise_idx: usize,
    pub exercises: Vec<OngoingExercise>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct OngoingExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: u32,
    pub completed_sets: Vec<u32>,
    pub weight: f64,
    pub target_reps: u32,
    pub skipped: bool,
}

impl From<&SessionRunner<'_>> for OngoingWorkout {
    fn from(runner: &SessionRunner<'_>) -> Self {
        Self {
            muscle_groups: runner
                .muscle_groups()
                .iter()
                .map(ToString::to_string)
                .collect(),
            energy_level: runner.energy_level().to_string(),
            duration_minutes: runner.duration_minutes(),
            start_time: runner.started_at(),
            exercise_idx: runner.current_index(),
            exercises: runner
                .exercises()
                .iter()
                .zip(runner.progress())
                .map(|(e, p)| OngoingExercise {
                    exercise_id: e.exercise.id.to_string(),
                    sets: e.sets,
                    reps: e.reps,
                    completed_sets: p.completed_sets.clone(),
                    weight: p.weight,
                    target_reps: p.reps,
                    skipped: p.skipped,
                })
                .collect(),
        }
    }
}

impl OngoingWorkout {
    /// Continues the session with exercises of the given catalog.
    pub fn restore<'a>(
        &self,
        catalog: &'a Catalog,
    ) -> Result<SessionRunner<'a>, OngoingWorkoutError> {
        let request = GenerationRequest {
            muscle_groups: self
                .muscle_groups
                .iter()
                .map(|m| m.parse())
                .collect::<Result<_, _>>()?,
            energy_level: self.energy_level.parse()?,
            duration_minutes: self.duration_minutes,
        };

        let mut exercises = Vec::with_capacity(self.exercises.len());
        let mut progress = Vec::with_capacity(self.exercises.len());
        for e in &self.exercises {
            let exercise = catalog
                .get(&e.exercise_id.as_str().into())
                .ok_or_else(|| OngoingWorkoutError::UnknownExercise(e.exercise_id.clone()))?;
            exercises.push(PrescribedExercise {
                exercise,
                sets: e.sets,
                reps: e.reps,
            });
            progress.push(ExerciseProgress {
                completed_sets: e.completed_sets.clone(),
                weight: e.weight,
                reps: e.target_reps,
                skipped: e.skipped,
            });
        }

        Ok(SessionRunner::restore(
            &request,
            exercises,
            self.start_time,
            progress,
            self.exercise_idx,
        ))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum OngoingWorkoutError {
    #[error("unknown exercise \"{0}\"")]
    UnknownExercise(String),
    #[error(transparent)]
    MuscleGroup(#[from] MuscleGroupError),
    #[error(transparent)]
    EnergyLevel(#[from] EnergyLevelError),
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use kettle_domain::{Adjustment, EnergyLevel, MuscleGroup, Units};
    use pretty_assertions::assert_eq;

    use super::*;

    fn runner() -> SessionRunner<'static> {
        let catalog = Catalog::kettlebell();
        let exercises = ["kettlebell-swing", "goblet-squat"]
            .into_iter()
            .filter_map(|id| catalog.get(&id.into()))
            .map(|e| PrescribedExercise::new(e, EnergyLevel::High))
            .collect::<Vec<_>>();
        assert_eq!(exercises.len(), 2);
        SessionRunner::new(
            &GenerationRequest {
                muscle_groups: vec![MuscleGroup::Glutes],
                energy_level: EnergyLevel::High,
                duration_minutes: 20,
            },
            exercises,
            Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_ongoing_workout_restore() {
        let mut runner = runner();
        runner.adjust_weight(Adjustment::Up, Units::Kg);
        runner.complete_set();
        runner.adjust_reps(Adjustment::Down);
        runner.next();

        let ongoing_workout = OngoingWorkout::from(&runner);
        assert_eq!(ongoing_workout.energy_level, "high");
        assert_eq!(ongoing_workout.muscle_groups, vec!["glutes"]);
        assert_eq!(ongoing_workout.exercise_idx, 1);

        let restored = ongoing_workout.restore(Catalog::kettlebell()).unwrap();
        assert_eq!(restored.current_index(), runner.current_index());
        assert_eq!(restored.exercises(), runner.exercises());
        assert_eq!(restored.progress(), runner.progress());
        assert_eq!(restored.started_at(), runner.started_at());
        assert_eq!(restored.energy_level(), EnergyLevel::High);
        assert_eq!(restored.muscle_groups(), &[MuscleGroup::Glutes]);
    }

    #[test]
    fn test_ongoing_workout_restore_unknown_exercise() {
        let mut ongoing_workout = OngoingWorkout::from(&runner());
        ongoing_workout.exercises[0].exercise_id = "kettlebell-curl-deluxe".to_string();
        assert!(matches!(
            ongoing_workout.restore(Catalog::kettlebell()),
            Err(OngoingWorkoutError::UnknownExercise(id)) if id == "kettlebell-curl-deluxe"
        ));
    }

    #[test]
    fn test_ongoing_workout_restore_invalid_energy_level() {
        let mut ongoing_workout = OngoingWorkout::from(&runner());
        ongoing_workout.energy_level = "extreme".to_string();
        assert!(matches!(
            ongoing_workout.restore(Catalog::kettlebell()),
            Err(OngoingWorkoutError::EnergyLevel(_))
        ));
    }
}

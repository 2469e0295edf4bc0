#![allow(clippy::missing_errors_doc)]

use std::{
    collections::VecDeque,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use kettle_app::{
    self as app, OngoingWorkout, OngoingWorkoutRepository, Settings, SettingsRepository,
};
use kettle_domain as domain;
use log::debug;
use strum::AsRefStr;
use uuid::Uuid;

/// Keeps every store as a JSON file in a single directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, store: Store) -> PathBuf {
        self.dir.join(format!("{}.json", store.as_ref()))
    }

    async fn read<V>(&self, store: Store) -> Result<Option<V>, domain::StorageError>
    where
        V: for<'de> serde::Deserialize<'de>,
    {
        let path = self.path(store);
        match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map(Some).map_err(|err| {
                domain::StorageError::Corrupted(format!("{}: {err}", path.display()))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write<V: serde::Serialize>(
        &self,
        store: Store,
        value: &V,
    ) -> Result<(), domain::StorageError> {
        let path = self.path(store);
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &path).await?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    async fn read_all_workouts(&self) -> Result<Vec<domain::Workout>, domain::StorageError> {
        self.read::<Vec<Workout>>(Store::Workouts)
            .await?
            .unwrap_or_default()
            .into_iter()
            .map(|w| {
                domain::Workout::try_from(w)
                    .map_err(|err| domain::StorageError::Corrupted(err.to_string()))
            })
            .collect()
    }

    async fn write_all_workouts(
        &self,
        workouts: &[domain::Workout],
    ) -> Result<(), domain::StorageError> {
        self.write(
            Store::Workouts,
            &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
        )
        .await
    }
}

impl domain::WorkoutRepository for JsonStore {
    async fn read_workouts(
        &self,
        user_id: domain::UserID,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let mut workouts = self
            .read_all_workouts()
            .await?
            .into_iter()
            .filter(|w| w.user_id == user_id)
            .collect::<Vec<_>>();
        workouts.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(workouts.into_iter().skip(offset).take(limit).collect())
    }

    async fn read_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::Workout, domain::ReadError> {
        self.read_all_workouts()
            .await?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(domain::ReadError::NotFound)
    }

    async fn create_workout(
        &self,
        user_id: domain::UserID,
        workout: domain::NewWorkout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = self.read_all_workouts().await?;
        let workout = domain::Workout::new(Uuid::new_v4().into(), user_id, workout);
        workouts.push(workout.clone());
        self.write_all_workouts(&workouts).await?;
        Ok(workout)
    }

    async fn modify_workout(
        &self,
        id: domain::WorkoutID,
        exercises: Option<Vec<domain::WorkoutExercise>>,
        completed_at: Option<DateTime<Utc>>,
        notes: Option<String>,
        rating: Option<Option<domain::Rating>>,
    ) -> Result<domain::Workout, domain::UpdateError> {
        let mut workouts = self.read_all_workouts().await?;
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(domain::UpdateError::NotFound)?;
        workout.update(exercises, completed_at, notes, rating)?;
        let workout = workout.clone();
        self.write_all_workouts(&workouts).await?;
        Ok(workout)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let mut workouts = self.read_all_workouts().await?;
        let len = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == len {
            return Err(domain::DeleteError::NotFound);
        }
        self.write_all_workouts(&workouts).await?;
        Ok(id)
    }
}

impl SettingsRepository for JsonStore {
    async fn read_settings(&self) -> Result<Settings, String> {
        self.read(Store::Settings)
            .await
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        self.write(Store::Settings, &settings)
            .await
            .map_err(|err| err.to_string())
    }
}

impl OngoingWorkoutRepository for JsonStore {
    async fn read_ongoing_workout(&self) -> Result<Option<OngoingWorkout>, String> {
        self.read::<Option<OngoingWorkout>>(Store::OngoingWorkout)
            .await
            .map(Option::flatten)
            .map_err(|err| err.to_string())
    }

    async fn write_ongoing_workout(
        &self,
        ongoing_workout: Option<OngoingWorkout>,
    ) -> Result<(), String> {
        self.write(Store::OngoingWorkout, &ongoing_workout)
            .await
            .map_err(|err| err.to_string())
    }
}

impl app::log::Repository for JsonStore {
    fn read_entries(&self) -> Result<VecDeque<app::log::Entry>, app::log::Error> {
        match std::fs::read(self.path(Store::Log)) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|err| app::log::Error::Unknown(err.to_string())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(VecDeque::new()),
            Err(err) => Err(app::log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: app::log::Entry) -> Result<(), app::log::Error> {
        let mut entries = self.read_entries()?;
        app::log::push_entry(&mut entries, entry);
        let bytes =
            serde_json::to_vec(&entries).map_err(|err| app::log::Error::Unknown(err.to_string()))?;
        let path = self.path(Store::Log);
        let tmp = path.with_extension("json.tmp");
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&tmp, bytes))
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|err| app::log::Error::Unknown(err.to_string()))
    }
}

#[derive(AsRefStr, Debug, Clone, Copy)]
pub enum Store {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "ongoing_workout")]
    OngoingWorkout,
    #[strum(serialize = "log")]
    Log,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WorkoutError {
    #[error(transparent)]
    MuscleGroup(#[from] domain::MuscleGroupError),
    #[error(transparent)]
    EnergyLevel(#[from] domain::EnergyLevelError),
    #[error(transparent)]
    Rating(#[from] domain::RatingError),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub energy_level: String,
    pub duration_minutes: u32,
    pub muscle_groups: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub exercises: Vec<WorkoutExercise>,
    pub total_volume: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl From<domain::Workout> for Workout {
    fn from(value: domain::Workout) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            energy_level: value.energy_level.to_string(),
            duration_minutes: value.duration_minutes,
            muscle_groups: value
                .muscle_groups
                .iter()
                .map(ToString::to_string)
                .collect(),
            started_at: value.started_at,
            completed_at: value.completed_at,
            exercises: value.exercises.iter().map(WorkoutExercise::from).collect(),
            total_volume: value.total_volume,
            notes: value.notes.clone(),
            rating: value.rating.map(|r| *r),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = WorkoutError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            energy_level: value.energy_level.parse()?,
            duration_minutes: value.duration_minutes,
            muscle_groups: value
                .muscle_groups
                .iter()
                .map(|m| m.parse())
                .collect::<Result<_, _>>()?,
            started_at: value.started_at,
            completed_at: value.completed_at,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::WorkoutExercise::from)
                .collect(),
            total_volume: value.total_volume,
            notes: value.notes,
            rating: value.rating.map(domain::Rating::new).transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: String,
    pub order_index: usize,
    pub planned_sets: u32,
    pub planned_reps: u32,
    pub actual_reps: Vec<u32>,
    pub weight: Option<f64>,
    pub completed: bool,
    pub skipped: bool,
}

impl From<&domain::WorkoutExercise> for WorkoutExercise {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            order_index: value.order_index,
            planned_sets: value.planned_sets,
            planned_reps: value.planned_reps,
            actual_reps: value.actual_reps.clone(),
            weight: value.weight,
            completed: value.completed,
            skipped: value.skipped,
        }
    }
}

impl From<WorkoutExercise> for domain::WorkoutExercise {
    fn from(value: WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            order_index: value.order_index,
            planned_sets: value.planned_sets,
            planned_reps: value.planned_reps,
            actual_reps: value.actual_reps,
            weight: value.weight,
            completed: value.completed,
            skipped: value.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use kettle_app::log::Repository;
    use kettle_domain::WorkoutRepository;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::tests::data::{NEW_WORKOUT, NEW_WORKOUT_2, USER, USER_2, WORKOUT};

    use super::*;

    fn store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn test_workout_try_from() {
        assert_eq!(
            domain::Workout::try_from(Workout::from(WORKOUT.clone())),
            Ok(WORKOUT.clone())
        );
    }

    #[test]
    fn test_workout_try_from_invalid() {
        let mut workout = Workout::from(WORKOUT.clone());
        workout.rating = Some(7);
        assert_eq!(
            domain::Workout::try_from(workout.clone()),
            Err(WorkoutError::Rating(domain::RatingError::OutOfRange(7)))
        );
        workout.rating = None;
        workout.muscle_groups.push("legs".to_string());
        assert!(matches!(
            domain::Workout::try_from(workout),
            Err(WorkoutError::MuscleGroup(_))
        ));
    }

    #[test]
    fn test_workout_serde() {
        let obj = Workout::from(WORKOUT.clone());
        let serialized = json!(obj);
        assert_eq!(serialized["energy_level"], "medium");
        assert_eq!(serialized["muscle_groups"], json!(["glutes", "core"]));
        let deserialized: Workout = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[tokio::test]
    async fn test_create_and_read_workouts() {
        let (_dir, store) = store();
        assert!(store.read_workouts(*USER, 0, 10).await.unwrap().is_empty());

        let first = store
            .create_workout(*USER, NEW_WORKOUT.clone())
            .await
            .unwrap();
        let second = store
            .create_workout(*USER, NEW_WORKOUT_2.clone())
            .await
            .unwrap();
        store
            .create_workout(*USER_2, NEW_WORKOUT.clone())
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.total_volume, NEW_WORKOUT.total_volume());

        let reopened = JsonStore::new(store.dir());
        assert_eq!(
            reopened.read_workouts(*USER, 0, 10).await.unwrap(),
            vec![second.clone(), first.clone()]
        );
        assert_eq!(
            reopened.read_workouts(*USER, 1, 10).await.unwrap(),
            vec![first.clone()]
        );
        assert_eq!(
            reopened.read_workouts(*USER, 0, 1).await.unwrap(),
            vec![second]
        );
        assert_eq!(reopened.read_workout(first.id).await.unwrap(), first);
    }

    #[tokio::test]
    async fn test_read_workout_not_found() {
        let (_dir, store) = store();
        assert!(matches!(
            store.read_workout(1.into()).await,
            Err(domain::ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_modify_workout() {
        let (_dir, store) = store();
        let workout = store
            .create_workout(*USER, NEW_WORKOUT.clone())
            .await
            .unwrap();

        let mut exercise = workout.exercises[0].clone();
        exercise.actual_reps = vec![20, 20, 20];
        exercise.weight = Some(24.0);
        let completed_at = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();

        let modified = store
            .modify_workout(
                workout.id,
                Some(vec![exercise.clone()]),
                Some(completed_at),
                Some("Grip gave out".to_string()),
                Some(domain::Rating::new(3).ok()),
            )
            .await
            .unwrap();

        assert_eq!(modified.exercises[0], exercise);
        assert_eq!(modified.exercises[1], workout.exercises[1]);
        assert_eq!(
            modified.total_volume,
            24 * 60 + workout.exercises[1].volume() as u32
        );
        assert_eq!(modified.completed_at, completed_at);
        assert_eq!(modified.notes, "Grip gave out");
        assert_eq!(modified.rating, domain::Rating::new(3).ok());
        assert_eq!(store.read_workout(workout.id).await.unwrap(), modified);
    }

    #[tokio::test]
    async fn test_modify_workout_errors() {
        let (_dir, store) = store();
        let workout = store
            .create_workout(*USER, NEW_WORKOUT.clone())
            .await
            .unwrap();

        assert!(matches!(
            store
                .modify_workout(1.into(), None, None, Some(String::new()), None)
                .await,
            Err(domain::UpdateError::NotFound)
        ));

        let mut exercise = workout.exercises[0].clone();
        exercise.order_index = 42;
        assert!(matches!(
            store
                .modify_workout(workout.id, Some(vec![exercise]), None, None, None)
                .await,
            Err(domain::UpdateError::Conflict)
        ));
        assert_eq!(store.read_workout(workout.id).await.unwrap(), workout);
    }

    #[tokio::test]
    async fn test_delete_workout() {
        let (_dir, store) = store();
        let workout = store
            .create_workout(*USER, NEW_WORKOUT.clone())
            .await
            .unwrap();

        assert_eq!(store.delete_workout(workout.id).await.unwrap(), workout.id);
        assert!(matches!(
            store.delete_workout(workout.id).await,
            Err(domain::DeleteError::NotFound)
        ));
        assert!(store.read_workouts(*USER, 0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupted_workouts() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.path(Store::Workouts), "[{").unwrap();
        assert!(matches!(
            store.read_workouts(*USER, 0, 10).await,
            Err(domain::ReadError::Storage(domain::StorageError::Corrupted(
                _
            )))
        ));
        assert!(matches!(
            store.create_workout(*USER, NEW_WORKOUT.clone()).await,
            Err(domain::CreateError::Storage(
                domain::StorageError::Corrupted(_)
            ))
        ));
    }

    #[tokio::test]
    async fn test_settings() {
        let (_dir, store) = store();
        assert_eq!(store.read_settings().await, Ok(Settings::default()));

        let settings = Settings {
            units: domain::Units::Kg,
            theme: app::Theme::Dark,
        };
        store.write_settings(settings).await.unwrap();
        assert_eq!(store.read_settings().await, Ok(settings));
    }

    #[tokio::test]
    async fn test_ongoing_workout() {
        let (_dir, store) = store();
        assert_eq!(store.read_ongoing_workout().await, Ok(None));

        let ongoing_workout = OngoingWorkout {
            muscle_groups: vec!["core".to_string()],
            energy_level: "low".to_string(),
            duration_minutes: 15,
            start_time: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
            exercise_idx: 0,
            exercises: vec![app::OngoingExercise {
                exercise_id: "halo".to_string(),
                sets: 2,
                reps: 6,
                completed_sets: vec![6],
                weight: 8.0,
                target_reps: 6,
                skipped: false,
            }],
        };
        store
            .write_ongoing_workout(Some(ongoing_workout.clone()))
            .await
            .unwrap();
        assert_eq!(
            store.read_ongoing_workout().await,
            Ok(Some(ongoing_workout))
        );

        store.write_ongoing_workout(None).await.unwrap();
        assert_eq!(store.read_ongoing_workout().await, Ok(None));
    }

    #[test]
    fn test_log_entries() {
        let (_dir, store) = store();
        assert_eq!(store.read_entries(), Ok(VecDeque::new()));

        for i in 0..105 {
            store
                .write_entry(app::log::Entry {
                    time: String::new(),
                    level: log::Level::Info,
                    message: i.to_string(),
                })
                .unwrap();
        }

        let entries = store.read_entries().unwrap();
        assert_eq!(entries.len(), app::log::MAX_ENTRIES);
        assert_eq!(entries[0].message, "104");
        assert_eq!(entries[entries.len() - 1].message, "5");
    }

    #[test]
    fn test_log_entry_replaces_interrupted_write() {
        let (_dir, store) = store();
        let tmp = store.dir().join("log.json.tmp");
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(&tmp, "[{\"time\"").unwrap();

        store
            .write_entry(app::log::Entry {
                time: "Apr 08 12:00:00".to_string(),
                level: log::Level::Warn,
                message: "low disk space".to_string(),
            })
            .unwrap();

        assert!(!tmp.exists());
        assert_eq!(
            store.read_entries().unwrap(),
            VecDeque::from([app::log::Entry {
                time: "Apr 08 12:00:00".to_string(),
                level: log::Level::Warn,
                message: "low disk space".to_string(),
            }])
        );
    }
}

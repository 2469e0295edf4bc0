use chrono::{DateTime, Utc};
use log::{debug, error};

use crate::{
    CreateError, DeleteError, NewWorkout, Rating, ReadError, UpdateError, UserID, Workout,
    WorkoutExercise, WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(_) | $error::Other(_) => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> Service<R> {
    async fn owned_workout(&self, user_id: UserID, id: WorkoutID) -> Result<Workout, ReadError> {
        let workout = self.repository.read_workout(id).await?;
        if workout.user_id == user_id {
            Ok(workout)
        } else {
            Err(ReadError::Forbidden)
        }
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(
        &self,
        user_id: UserID,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(user_id, offset, limit),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn get_workout(&self, user_id: UserID, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(self.owned_workout(user_id, id), ReadError, "get", "workout")
    }

    async fn create_workout(
        &self,
        user_id: UserID,
        workout: NewWorkout,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(user_id, workout),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn modify_workout(
        &self,
        user_id: UserID,
        id: WorkoutID,
        exercises: Option<Vec<WorkoutExercise>>,
        completed_at: Option<DateTime<Utc>>,
        notes: Option<String>,
        rating: Option<Option<Rating>>,
    ) -> Result<Workout, UpdateError> {
        log_on_error!(
            async move {
                self.owned_workout(user_id, id).await?;
                self.repository
                    .modify_workout(id, exercises, completed_at, notes, rating)
                    .await
            },
            UpdateError,
            "modify",
            "workout"
        )
    }

    async fn delete_workout(
        &self,
        user_id: UserID,
        id: WorkoutID,
    ) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            async move {
                self.owned_workout(user_id, id).await?;
                self.repository.delete_workout(id).await
            },
            DeleteError,
            "delete",
            "workout"
        )
    }
}

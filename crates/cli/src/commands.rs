use std::fmt::Write;

use anyhow::{Context as _, anyhow};
use chrono::Utc;
use kettle_app::{OngoingWorkout, OngoingWorkoutService, Settings, SettingsService, Theme};
use kettle_domain::{
    Catalog, Difficulty, EnergyLevel, Exercise, ExerciseFilter, ExerciseID, GenerationRequest,
    MuscleGroup, NewWorkout, PrescribedExercise, Property, Service, SessionRunner, Units, UserID,
    Workout, WorkoutID, WorkoutService, WorkoutStats, estimate_duration, format_duration,
    generate,
};
use kettle_storage::JsonStore;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

pub struct Context {
    user_id: UserID,
    catalog: &'static Catalog,
    workouts: Service<JsonStore>,
    app: kettle_app::Service<JsonStore>,
}

impl Context {
    pub fn new(store: JsonStore, user_id: UserID) -> Self {
        Self {
            user_id,
            catalog: Catalog::kettlebell(),
            workouts: Service::new(store.clone()),
            app: kettle_app::Service::new(store),
        }
    }

    pub fn exercises(
        &self,
        muscle_group: Option<MuscleGroup>,
        difficulty: Option<Difficulty>,
        search: String,
    ) -> anyhow::Result<()> {
        let filter = ExerciseFilter {
            search,
            muscle_group,
            difficulty,
        };
        print!("{}", exercise_list(&filter.exercises(self.catalog.iter())));
        Ok(())
    }

    pub fn exercise(&self, id: &str, search: &str) -> anyhow::Result<()> {
        let exercise = self
            .catalog
            .get(&ExerciseID::from(id))
            .ok_or_else(|| anyhow!("unknown exercise \"{id}\""))?;
        print!("{}", exercise_details(exercise));

        let alternatives = self.catalog.alternatives(exercise, search);
        if !alternatives.is_empty() {
            println!("\nAlternatives:");
            print!("{}", exercise_list(&alternatives));
        }
        let related = self.catalog.related(exercise, search);
        if !related.is_empty() {
            println!("\nRelated:");
            print!("{}", exercise_list(&related));
        }
        Ok(())
    }

    pub fn generate(&self, request: &GenerationRequest, seed: Option<u64>) -> anyhow::Result<()> {
        let workout = generate(self.catalog, request, &mut rng(seed));
        print!("{}", workout_plan(&workout, request.energy_level));
        Ok(())
    }

    pub async fn run(&self, request: &GenerationRequest, seed: Option<u64>) -> anyhow::Result<()> {
        let settings = self.app.get_settings().await.map_err(|err| anyhow!(err))?;

        let mut runner = match self
            .app
            .get_ongoing_workout()
            .await
            .map_err(|err| anyhow!(err))?
        {
            Some(ongoing_workout) => {
                info!("continuing interrupted workout");
                print!("{}", continue_notice(&ongoing_workout));
                ongoing_workout
                    .restore(self.catalog)
                    .context("failed to continue interrupted workout")?
            }
            None => {
                let workout = generate(self.catalog, request, &mut rng(seed));
                SessionRunner::new(request, workout, Utc::now())
            }
        };

        if runner.is_finished() {
            self.app
                .set_ongoing_workout(None)
                .await
                .map_err(|err| anyhow!(err))?;
            println!("No exercises fit into the requested workout.");
            return Ok(());
        }

        print!(
            "{}",
            workout_plan(runner.exercises(), runner.energy_level())
        );

        while !runner.is_finished() {
            let index = runner.current_index();
            let Some((exercise, progress)) = runner.current() else {
                break;
            };
            if progress.skipped || progress.completed_sets.len() >= exercise.sets as usize {
                if index + 1 == runner.exercises().len() {
                    break;
                }
                runner.next();
                continue;
            }
            let line = format!(
                "{}: {} x {} @ {}",
                exercise.exercise.name,
                exercise.sets,
                progress.reps,
                settings.units.format_weight(progress.weight)
            );
            while runner.current_index() == index && !runner.is_finished() {
                runner.complete_set();
            }
            println!("{line} done");
            self.app
                .set_ongoing_workout(Some(OngoingWorkout::from(&runner)))
                .await
                .map_err(|err| anyhow!(err))?;
        }

        let summary = runner.summary();
        let new_workout = runner.finish(Utc::now());
        let workout = match self.stored_workout(&new_workout).await? {
            Some(workout) => {
                info!("workout {} was already stored", workout.id);
                workout
            }
            None => {
                self.workouts
                    .create_workout(self.user_id, new_workout)
                    .await?
            }
        };
        self.app
            .set_ongoing_workout(None)
            .await
            .map_err(|err| anyhow!(err))?;

        debug!("stored workout {}", workout.id);
        println!(
            "\nWorkout complete: {} exercises, {} sets, {} reps",
            summary.completed_exercises, summary.total_sets, summary.total_reps
        );
        println!("Stored as {}", workout.id);
        Ok(())
    }

    /// The stored workout of the same session, if a previous run was interrupted after storing
    /// it but before clearing the ongoing workout.
    async fn stored_workout(&self, workout: &NewWorkout) -> anyhow::Result<Option<Workout>> {
        Ok(self
            .workouts
            .get_workouts(self.user_id, 0, usize::MAX)
            .await?
            .into_iter()
            .find(|w| w.started_at == workout.started_at))
    }

    pub async fn history(&self, offset: usize, limit: usize) -> anyhow::Result<()> {
        let stats = self
            .workouts
            .get_workout_stats(self.user_id, Utc::now())
            .await?;
        let workouts = self
            .workouts
            .get_workouts(self.user_id, offset, limit)
            .await?;
        print!("{}", workout_history(&workouts, &stats));
        Ok(())
    }

    pub async fn show(&self, id: WorkoutID) -> anyhow::Result<()> {
        let settings = self.app.get_settings().await.map_err(|err| anyhow!(err))?;
        let workout = self.workouts.get_workout(self.user_id, id).await?;
        print!("{}", workout_details(&workout, self.catalog, settings.units));
        Ok(())
    }

    pub async fn delete(&self, id: WorkoutID) -> anyhow::Result<()> {
        self.workouts.delete_workout(self.user_id, id).await?;
        println!("Deleted {id}");
        Ok(())
    }

    pub async fn settings(&self, units: Option<Units>, theme: Option<Theme>) -> anyhow::Result<()> {
        let mut settings = self.app.get_settings().await.map_err(|err| anyhow!(err))?;
        if units.is_some() || theme.is_some() {
            settings = Settings {
                units: units.unwrap_or(settings.units),
                theme: theme.unwrap_or(settings.theme),
            };
            self.app
                .set_settings(settings)
                .await
                .map_err(|err| anyhow!(err))?;
        }
        println!("units: {}\ntheme: {}", settings.units, settings.theme);
        Ok(())
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn continue_notice(ongoing_workout: &OngoingWorkout) -> String {
    format!(
        "Continuing the interrupted workout started at {} ({} minutes, {} energy). \
         Muscle group, energy and duration options are ignored.\n",
        ongoing_workout.start_time.format("%Y-%m-%d %H:%M"),
        ongoing_workout.duration_minutes,
        ongoing_workout.energy_level
    )
}

fn exercise_list(exercises: &[&Exercise]) -> String {
    let mut output = String::new();
    for exercise in exercises {
        let _ = writeln!(
            output,
            "{:<32} {:<32} {:<12} {}",
            exercise.id.to_string(),
            exercise.name,
            exercise.muscle_group.name(),
            exercise.difficulty.name()
        );
    }
    output
}

fn exercise_details(exercise: &Exercise) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", exercise.name);
    let _ = writeln!(output, "{}\n", exercise.description);
    let _ = writeln!(
        output,
        "Muscle group: {}",
        exercise.muscle_group.name()
    );
    if !exercise.secondary_muscle_groups.is_empty() {
        let _ = writeln!(
            output,
            "Secondary: {}",
            exercise
                .secondary_muscle_groups
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let _ = writeln!(output, "Difficulty: {}", exercise.difficulty.name());
    let _ = writeln!(output, "Equipment: {}", exercise.equipment);
    let _ = writeln!(
        output,
        "Default: {} x {}",
        exercise.default_sets, exercise.default_reps
    );
    let _ = writeln!(output, "\nInstructions:");
    for (i, instruction) in exercise.instructions.iter().enumerate() {
        let _ = writeln!(output, "  {}. {instruction}", i + 1);
    }
    if !exercise.tips.is_empty() {
        let _ = writeln!(output, "\nTips:");
        for tip in exercise.tips {
            let _ = writeln!(output, "  - {tip}");
        }
    }
    output
}

fn workout_plan(workout: &[PrescribedExercise], energy_level: EnergyLevel) -> String {
    let mut output = String::new();
    if workout.is_empty() {
        let _ = writeln!(output, "No exercises fit into the requested workout.");
        return output;
    }
    let _ = writeln!(
        output,
        "{} exercises, about {:.0} minutes, {} s rest between sets ({})\n",
        workout.len(),
        estimate_duration(workout, energy_level),
        energy_level.rest_seconds(),
        energy_level.description()
    );
    for (i, prescribed) in workout.iter().enumerate() {
        let _ = writeln!(
            output,
            "{:>2}. {:<32} {} x {:<3} {}",
            i + 1,
            prescribed.exercise.name,
            prescribed.sets,
            prescribed.reps,
            prescribed.exercise.muscle_group.name()
        );
    }
    output
}

fn workout_history(workouts: &[Workout], stats: &WorkoutStats) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Workouts: {}  This week: {}  Total time: {}  Average: {}\n",
        stats.total_workouts,
        stats.workouts_last_7_days,
        format_duration(stats.total_minutes),
        format_duration(stats.average_minutes)
    );
    for workout in workouts {
        let _ = writeln!(
            output,
            "{}  {}  {:<8} {:<7} {}",
            workout.id,
            workout.completed_at.format("%Y-%m-%d %H:%M"),
            format_duration(workout.duration_minutes),
            workout.energy_level.name(),
            workout
                .muscle_groups
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    output
}

fn workout_details(workout: &Workout, catalog: &Catalog, units: Units) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{}  {} energy  {}",
        workout.completed_at.format("%Y-%m-%d %H:%M"),
        workout.energy_level.name(),
        format_duration(workout.duration_minutes)
    );
    let _ = writeln!(
        output,
        "Completed {} of {} exercises in {} min, volume {}",
        workout.completed_exercises(),
        workout.exercises.len(),
        workout.elapsed_minutes(),
        units.format_weight(f64::from(workout.total_volume))
    );
    if let Some(rating) = workout.rating {
        let _ = writeln!(output, "Rating: {rating}/5");
    }
    if !workout.notes.is_empty() {
        let _ = writeln!(output, "Notes: {}", workout.notes);
    }
    let _ = writeln!(output);
    for exercise in &workout.exercises {
        let name = catalog
            .get(&exercise.exercise_id)
            .map_or(exercise.exercise_id.to_string(), |e| e.name.to_string());
        let status = if exercise.skipped {
            "skipped".to_string()
        } else {
            exercise
                .actual_reps
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" / ")
        };
        let weight = exercise
            .weight
            .map(|w| units.format_weight(w))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            "{:>2}. {:<32} {} x {:<3} {:<16} {weight}",
            exercise.order_index + 1,
            name,
            exercise.planned_sets,
            exercise.planned_reps,
            status
        );
    }
    output
}

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    Adjustment, EnergyLevel, Exercise, GenerationRequest, MuscleGroup, NewWorkout,
    PrescribedExercise, Units, WorkoutExercise,
};

/// Weight in kg every exercise starts with.
pub const DEFAULT_WEIGHT: f64 = 16.0;

/// Progress of a single exercise during a session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseProgress {
    /// Reps of each completed set.
    pub completed_sets: Vec<u32>,
    /// Kettlebell weight in kg.
    pub weight: f64,
    /// Reps of the next set.
    pub reps: u32,
    pub skipped: bool,
}

impl ExerciseProgress {
    #[must_use]
    pub fn new(reps: u32) -> Self {
        Self {
            completed_sets: vec![],
            weight: DEFAULT_WEIGHT,
            reps,
            skipped: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed_exercises: usize,
    pub total_sets: usize,
    pub total_reps: u32,
}

/// Guides a user through a generated workout.
#[derive(Debug, Clone)]
pub struct SessionRunner<'a> {
    energy_level: EnergyLevel,
    duration_minutes: u32,
    muscle_groups: Vec<MuscleGroup>,
    started_at: DateTime<Utc>,
    exercises: Vec<PrescribedExercise<'a>>,
    progress: Vec<ExerciseProgress>,
    current: usize,
    finished: bool,
}

impl<'a> SessionRunner<'a> {
    #[must_use]
    pub fn new(
        request: &GenerationRequest,
        exercises: Vec<PrescribedExercise<'a>>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let progress = exercises
            .iter()
            .map(|e| ExerciseProgress::new(e.reps))
            .collect();
        Self {
            energy_level: request.energy_level,
            duration_minutes: request.duration_minutes,
            muscle_groups: request.target_muscle_groups(),
            started_at,
            exercises,
            progress,
            current: 0,
            finished: false,
        }
    }

    /// Continues an interrupted session.
    ///
    /// Missing progress entries start fresh, surplus entries are dropped and the position is
    /// clamped to the last exercise.
    #[must_use]
    pub fn restore(
        request: &GenerationRequest,
        exercises: Vec<PrescribedExercise<'a>>,
        started_at: DateTime<Utc>,
        mut progress: Vec<ExerciseProgress>,
        current: usize,
    ) -> Self {
        progress.truncate(exercises.len());
        for exercise in &exercises[progress.len()..] {
            progress.push(ExerciseProgress::new(exercise.reps));
        }
        let mut runner = Self::new(request, exercises, started_at);
        runner.progress = progress;
        runner.current = current.min(runner.exercises.len().saturating_sub(1));
        runner
    }

    #[must_use]
    pub fn energy_level(&self) -> EnergyLevel {
        self.energy_level
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn muscle_groups(&self) -> &[MuscleGroup] {
        &self.muscle_groups
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn exercises(&self) -> &[PrescribedExercise<'a>] {
        &self.exercises
    }

    #[must_use]
    pub fn progress(&self) -> &[ExerciseProgress] {
        &self.progress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<(&PrescribedExercise<'a>, &ExerciseProgress)> {
        Some((
            self.exercises.get(self.current)?,
            self.progress.get(self.current)?,
        ))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished || self.exercises.is_empty()
    }

    /// Records a set with the current rep target.
    ///
    /// After the last prescribed set the runner advances to the next exercise or finishes the
    /// session. Returns false if all sets of the current exercise are already done.
    pub fn complete_set(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        let sets = self.exercises[self.current].sets as usize;
        let progress = &mut self.progress[self.current];
        if progress.completed_sets.len() >= sets {
            return false;
        }
        progress.completed_sets.push(progress.reps);
        if progress.completed_sets.len() >= sets {
            self.advance();
        }
        true
    }

    pub fn skip(&mut self) {
        if self.is_finished() {
            return;
        }
        self.progress[self.current].skipped = true;
        self.advance();
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.exercises.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn adjust_reps(&mut self, adjustment: Adjustment) {
        if let Some(progress) = self.progress.get_mut(self.current) {
            progress.reps = match adjustment {
                Adjustment::Up => progress.reps + 1,
                Adjustment::Down => progress.reps.saturating_sub(1).max(1),
            };
        }
    }

    pub fn adjust_weight(&mut self, adjustment: Adjustment, units: Units) {
        if let Some(progress) = self.progress.get_mut(self.current) {
            progress.weight = units.adjust_weight(progress.weight, adjustment);
        }
    }

    /// Replaces the current exercise while keeping its prescription.
    pub fn swap(&mut self, exercise: &'a Exercise) {
        if let Some(current) = self.exercises.get_mut(self.current) {
            debug!("swap {} for {}", current.exercise.name, exercise.name);
            current.exercise = exercise;
            self.progress[self.current] = ExerciseProgress::new(current.reps);
        }
    }

    pub fn restart(&mut self) {
        self.progress = self
            .exercises
            .iter()
            .map(|e| ExerciseProgress::new(e.reps))
            .collect();
        self.current = 0;
        self.finished = false;
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completed_exercises: self
                .exercises
                .iter()
                .zip(&self.progress)
                .filter(|(e, p)| p.skipped || p.completed_sets.len() >= e.sets as usize)
                .count(),
            total_sets: self.progress.iter().map(|p| p.completed_sets.len()).sum(),
            total_reps: self
                .progress
                .iter()
                .map(|p| p.completed_sets.iter().sum::<u32>())
                .sum(),
        }
    }

    /// Ends the session and summarizes its outcome.
    #[must_use]
    pub fn finish(&mut self, completed_at: DateTime<Utc>) -> NewWorkout {
        self.finished = true;
        NewWorkout {
            energy_level: self.energy_level,
            duration_minutes: self.duration_minutes,
            muscle_groups: self.muscle_groups.clone(),
            started_at: self.started_at,
            completed_at,
            exercises: self
                .exercises
                .iter()
                .zip(&self.progress)
                .enumerate()
                .map(|(order_index, (e, p))| WorkoutExercise {
                    exercise_id: e.exercise.id.clone(),
                    order_index,
                    planned_sets: e.sets,
                    planned_reps: e.reps,
                    actual_reps: p.completed_sets.clone(),
                    weight: Some(p.weight),
                    completed: p.completed_sets.len() >= e.sets as usize,
                    skipped: p.skipped,
                })
                .collect(),
            notes: String::new(),
            rating: None,
        }
    }

    fn advance(&mut self) {
        if self.current + 1 < self.exercises.len() {
            self.current += 1;
        } else {
            self.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Catalog, Difficulty, ExerciseData, lbs_to_kg};

    const fn exercise(name: &'static str, default_sets: u32, default_reps: u32) -> ExerciseData {
        ExerciseData {
            name,
            muscle_group: MuscleGroup::Glutes,
            secondary_muscle_groups: &[],
            difficulty: Difficulty::Beginner,
            equipment: "1 KB",
            description: "",
            instructions: &["Move"],
            tips: &[],
            default_sets,
            default_reps,
        }
    }

    static EXERCISES: [ExerciseData; 3] = [
        exercise("Swing", 2, 10),
        exercise("Goblet Squat", 3, 8),
        exercise("Bridge", 2, 12),
    ];

    fn catalog() -> Catalog {
        Catalog::from_data(&EXERCISES).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            muscle_groups: vec![MuscleGroup::Glutes],
            energy_level: EnergyLevel::Medium,
            duration_minutes: 30,
        }
    }

    fn started_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
    }

    fn runner(catalog: &Catalog) -> SessionRunner<'_> {
        let exercises = catalog
            .iter()
            .take(2)
            .map(|e| PrescribedExercise::new(e, EnergyLevel::Medium))
            .collect();
        SessionRunner::new(&request(), exercises, started_at())
    }

    #[test]
    fn test_complete_sets_advances_and_finishes() {
        let catalog = catalog();
        let mut runner = runner(&catalog);

        assert!(runner.complete_set());
        assert_eq!(runner.current_index(), 0);
        assert!(runner.complete_set());
        assert_eq!(runner.current_index(), 1);
        assert!(!runner.is_finished());

        for _ in 0..3 {
            assert!(runner.complete_set());
        }
        assert!(runner.is_finished());
        assert!(!runner.complete_set());
        assert_eq!(
            runner.summary(),
            ProgressSummary {
                completed_exercises: 2,
                total_sets: 5,
                total_reps: 2 * 10 + 3 * 8,
            }
        );
    }

    #[test]
    fn test_complete_set_after_navigating_back() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.complete_set();
        runner.complete_set();
        runner.previous();
        assert_eq!(runner.current_index(), 0);
        assert!(!runner.complete_set());
        assert_eq!(runner.progress()[0].completed_sets, vec![10, 10]);
    }

    #[test]
    fn test_skip() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.skip();
        assert!(runner.progress()[0].skipped);
        assert_eq!(runner.current_index(), 1);
        runner.skip();
        assert!(runner.is_finished());
        assert_eq!(
            runner.summary(),
            ProgressSummary {
                completed_exercises: 2,
                total_sets: 0,
                total_reps: 0,
            }
        );
    }

    #[test]
    fn test_navigation_bounds() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.previous();
        assert_eq!(runner.current_index(), 0);
        runner.next();
        runner.next();
        assert_eq!(runner.current_index(), 1);
        assert!(!runner.is_finished());
    }

    #[test]
    fn test_adjust_reps() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.adjust_reps(Adjustment::Up);
        assert_eq!(runner.current().unwrap().1.reps, 11);
        for _ in 0..20 {
            runner.adjust_reps(Adjustment::Down);
        }
        assert_eq!(runner.current().unwrap().1.reps, 1);
        runner.complete_set();
        assert_eq!(runner.progress()[0].completed_sets, vec![1]);
    }

    #[test]
    fn test_adjust_weight() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        assert_eq!(runner.current().unwrap().1.weight, DEFAULT_WEIGHT);
        runner.adjust_weight(Adjustment::Up, Units::Kg);
        assert_eq!(runner.current().unwrap().1.weight, 20.0);
        runner.adjust_weight(Adjustment::Down, Units::Lbs);
        assert_eq!(runner.current().unwrap().1.weight, lbs_to_kg(35));
        runner.next();
        assert_eq!(runner.current().unwrap().1.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_swap() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.complete_set();
        runner.adjust_reps(Adjustment::Up);
        let bridge = catalog.get(&"bridge".into()).unwrap();
        runner.swap(bridge);

        let (exercise, progress) = runner.current().unwrap();
        assert_eq!(exercise.exercise.name, "Bridge");
        assert_eq!((exercise.sets, exercise.reps), (2, 10));
        assert_eq!(progress, &ExerciseProgress::new(10));
    }

    #[test]
    fn test_restart() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.complete_set();
        runner.skip();
        runner.skip();
        assert!(runner.is_finished());
        runner.restart();
        assert!(!runner.is_finished());
        assert_eq!(runner.current_index(), 0);
        assert_eq!(runner.summary(), ProgressSummary::default());
    }

    #[test]
    fn test_finish() {
        let catalog = catalog();
        let mut runner = runner(&catalog);
        runner.adjust_weight(Adjustment::Up, Units::Kg);
        runner.complete_set();
        runner.adjust_reps(Adjustment::Down);
        runner.complete_set();
        runner.skip();

        let completed_at = Utc.with_ymd_and_hms(2026, 3, 10, 8, 24, 30).unwrap();
        let workout = runner.finish(completed_at);

        assert_eq!(
            workout,
            NewWorkout {
                energy_level: EnergyLevel::Medium,
                duration_minutes: 30,
                muscle_groups: vec![MuscleGroup::Glutes],
                started_at: started_at(),
                completed_at,
                exercises: vec![
                    WorkoutExercise {
                        exercise_id: "swing".into(),
                        order_index: 0,
                        planned_sets: 2,
                        planned_reps: 10,
                        actual_reps: vec![10, 9],
                        weight: Some(20.0),
                        completed: true,
                        skipped: false,
                    },
                    WorkoutExercise {
                        exercise_id: "goblet-squat".into(),
                        order_index: 1,
                        planned_sets: 3,
                        planned_reps: 8,
                        actual_reps: vec![],
                        weight: Some(DEFAULT_WEIGHT),
                        completed: false,
                        skipped: true,
                    },
                ],
                notes: String::new(),
                rating: None,
            }
        );
        assert_eq!(workout.total_volume(), 20 * 19);
        assert_eq!(workout.elapsed_minutes(), 24);
        assert!(runner.is_finished());
    }

    #[test]
    fn test_empty_session() {
        let mut runner = SessionRunner::new(&request(), vec![], started_at());
        assert!(runner.is_finished());
        assert!(runner.current().is_none());
        assert!(!runner.complete_set());
        runner.skip();
        runner.adjust_reps(Adjustment::Up);
        runner.next();
        assert!(runner.finish(started_at()).exercises.is_empty());
    }

    #[test]
    fn test_restore() {
        let catalog = catalog();
        let exercises = catalog
            .iter()
            .map(|e| PrescribedExercise::new(e, EnergyLevel::Medium))
            .collect::<Vec<_>>();
        let progress = vec![ExerciseProgress {
            completed_sets: vec![10, 10],
            weight: 24.0,
            reps: 10,
            skipped: false,
        }];
        let runner = SessionRunner::restore(&request(), exercises, started_at(), progress, 7);
        assert_eq!(runner.current_index(), 2);
        assert_eq!(runner.progress().len(), 3);
        assert_eq!(runner.progress()[0].weight, 24.0);
        assert_eq!(runner.progress()[2], ExerciseProgress::new(12));
        assert_eq!(runner.summary().total_sets, 2);
    }
}

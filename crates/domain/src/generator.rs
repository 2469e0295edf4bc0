use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{Catalog, EnergyLevel, Exercise, MuscleGroup};

/// Minutes of a session reserved for warm-up and cool-down.
pub const RESERVED_MINUTES: u32 = 5;
/// Rough average duration of one exercise, used to spread a session over muscle groups.
pub const MINUTES_PER_EXERCISE: u32 = 4;
/// Further exercises are added while the workout is shorter than the target by more than this.
pub const FILL_THRESHOLD_MINUTES: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub muscle_groups: Vec<MuscleGroup>,
    pub energy_level: EnergyLevel,
    pub duration_minutes: u32,
}

impl GenerationRequest {
    /// Requested muscle groups in request order without repetitions.
    #[must_use]
    pub fn target_muscle_groups(&self) -> Vec<MuscleGroup> {
        let mut muscle_groups = Vec::with_capacity(self.muscle_groups.len());
        for muscle_group in &self.muscle_groups {
            if !muscle_groups.contains(muscle_group) {
                muscle_groups.push(*muscle_group);
            }
        }
        muscle_groups
    }

    /// Minutes available for exercises, `None` if nothing fits.
    #[must_use]
    pub fn target_minutes(&self) -> Option<f64> {
        if self.duration_minutes > RESERVED_MINUTES {
            Some(f64::from(self.duration_minutes - RESERVED_MINUTES))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescribedExercise<'a> {
    pub exercise: &'a Exercise,
    pub sets: u32,
    pub reps: u32,
}

impl<'a> PrescribedExercise<'a> {
    #[must_use]
    pub fn new(exercise: &'a Exercise, energy_level: EnergyLevel) -> Self {
        Self {
            exercise,
            sets: energy_level.sets(exercise.default_sets),
            reps: energy_level.reps(exercise.default_reps),
        }
    }

    #[must_use]
    pub fn minutes(&self, energy_level: EnergyLevel) -> f64 {
        energy_level.exercise_minutes(self.sets)
    }
}

/// Assembles a randomized workout that fits into the requested duration.
///
/// Only exercises whose primary muscle group was requested and whose difficulty is allowed for
/// the energy level are considered. First each muscle group gets an equal share of randomly
/// chosen exercises, then random exercises of any requested group are added until the workout
/// is close to the target time. The result is shuffled so that muscle groups alternate.
///
/// An empty workout is a valid result, e.g. if no muscle group was requested, the duration
/// does not exceed the reserved minutes or no exercise is eligible.
pub fn generate<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    request: &GenerationRequest,
    rng: &mut R,
) -> Vec<PrescribedExercise<'a>> {
    let muscle_groups = request.target_muscle_groups();
    let energy_level = request.energy_level;

    let Some(target) = request.target_minutes() else {
        debug!(
            "no time for exercises in {} minutes",
            request.duration_minutes
        );
        return vec![];
    };

    if muscle_groups.is_empty() {
        debug!("no muscle groups requested");
        return vec![];
    }

    let mut workout: Vec<PrescribedExercise<'a>> = Vec::new();
    let mut total = 0.0;

    #[allow(clippy::cast_precision_loss)]
    let share = target / (muscle_groups.len() as f64 * f64::from(MINUTES_PER_EXERCISE));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let exercises_per_group = share.ceil() as usize;

    for muscle_group in &muscle_groups {
        let mut candidates = catalog
            .by_muscle_group(*muscle_group)
            .into_iter()
            .filter(|e| energy_level.allows(e.difficulty))
            .collect::<Vec<_>>();
        candidates.shuffle(rng);

        for exercise in candidates.into_iter().take(exercises_per_group) {
            let prescribed = PrescribedExercise::new(exercise, energy_level);
            let minutes = prescribed.minutes(energy_level);
            if total + minutes > target {
                break;
            }
            total += minutes;
            workout.push(prescribed);
        }
    }

    while total < target - FILL_THRESHOLD_MINUTES {
        let mut remaining = catalog
            .iter()
            .filter(|e| {
                muscle_groups.contains(&e.muscle_group)
                    && energy_level.allows(e.difficulty)
                    && workout.iter().all(|p| p.exercise.name != e.name)
            })
            .collect::<Vec<_>>();
        remaining.shuffle(rng);

        let Some(exercise) = remaining.first() else {
            break;
        };

        let prescribed = PrescribedExercise::new(exercise, energy_level);
        let minutes = prescribed.minutes(energy_level);
        if total + minutes > target {
            break;
        }
        total += minutes;
        workout.push(prescribed);
    }

    workout.shuffle(rng);

    debug!(
        "generated {} exercises taking {total:.1} of {target} minutes",
        workout.len()
    );

    workout
}

/// Estimated minutes of a generated workout, excluding warm-up and cool-down.
#[must_use]
pub fn estimate_duration(workout: &[PrescribedExercise], energy_level: EnergyLevel) -> f64 {
    workout.iter().map(|p| p.minutes(energy_level)).sum()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;

    use super::*;
    use crate::{Difficulty, ExerciseData, Property};

    const SEEDS: std::ops::Range<u64> = 0..50;

    fn request(
        muscle_groups: &[MuscleGroup],
        energy_level: EnergyLevel,
        duration_minutes: u32,
    ) -> GenerationRequest {
        GenerationRequest {
            muscle_groups: muscle_groups.to_vec(),
            energy_level,
            duration_minutes,
        }
    }

    fn generate_seeded<'a>(
        catalog: &'a Catalog,
        request: &GenerationRequest,
        seed: u64,
    ) -> Vec<PrescribedExercise<'a>> {
        generate(catalog, request, &mut StdRng::seed_from_u64(seed))
    }

    const fn exercise(
        name: &'static str,
        muscle_group: MuscleGroup,
        difficulty: Difficulty,
        default_sets: u32,
    ) -> ExerciseData {
        ExerciseData {
            name,
            muscle_group,
            secondary_muscle_groups: &[],
            difficulty,
            equipment: "1 KB",
            description: "",
            instructions: &["Move"],
            tips: &[],
            default_sets,
            default_reps: 10,
        }
    }

    #[test]
    fn test_target_muscle_groups() {
        assert_eq!(
            request(
                &[MuscleGroup::Core, MuscleGroup::Back, MuscleGroup::Core],
                EnergyLevel::Medium,
                30
            )
            .target_muscle_groups(),
            vec![MuscleGroup::Core, MuscleGroup::Back]
        );
    }

    #[rstest]
    #[case(0, None)]
    #[case(5, None)]
    #[case(6, Some(1.0))]
    #[case(30, Some(25.0))]
    fn test_target_minutes(#[case] duration_minutes: u32, #[case] expected: Option<f64>) {
        assert_eq!(
            request(&[MuscleGroup::Back], EnergyLevel::Low, duration_minutes).target_minutes(),
            expected
        );
    }

    #[rstest]
    fn test_generate_without_time(
        #[values(0, 1, 5)] duration_minutes: u32,
        #[values(EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High)]
        energy_level: EnergyLevel,
    ) {
        let request = request(
            &[MuscleGroup::Back, MuscleGroup::Glutes],
            energy_level,
            duration_minutes,
        );
        for seed in SEEDS {
            assert!(generate_seeded(Catalog::kettlebell(), &request, seed).is_empty());
        }
    }

    #[test]
    fn test_generate_without_muscle_groups() {
        let request = request(&[], EnergyLevel::High, 45);
        for seed in SEEDS {
            assert!(generate_seeded(Catalog::kettlebell(), &request, seed).is_empty());
        }
    }

    #[test]
    fn test_generate_empty_catalog() {
        let catalog = Catalog::new(vec![]).unwrap();
        let request = request(&[MuscleGroup::Back], EnergyLevel::High, 60);
        assert!(generate_seeded(&catalog, &request, 0).is_empty());
    }

    #[test]
    fn test_generate_no_eligible_exercise() {
        let catalog = Catalog::from_data(&[exercise(
            "Snatch",
            MuscleGroup::Shoulders,
            Difficulty::Advanced,
            3,
        )])
        .unwrap();
        let request = request(&[MuscleGroup::Shoulders], EnergyLevel::Medium, 60);
        assert!(generate_seeded(&catalog, &request, 0).is_empty());
    }

    #[test]
    fn test_generate_exercise_longer_than_target() {
        let catalog = Catalog::from_data(&[exercise(
            "Endless Swing",
            MuscleGroup::Glutes,
            Difficulty::Beginner,
            20,
        )])
        .unwrap();
        let request = request(&[MuscleGroup::Glutes], EnergyLevel::Medium, 30);
        assert!(generate_seeded(&catalog, &request, 0).is_empty());
    }

    #[test]
    fn test_generate_huge_reps() {
        let catalog = Catalog::from_data(&[ExerciseData {
            default_reps: u32::MAX / 2,
            ..exercise("Marathon Swing", MuscleGroup::Core, Difficulty::Beginner, 3)
        }])
        .unwrap();
        let request = request(&[MuscleGroup::Core], EnergyLevel::High, 60);
        let workout = generate_seeded(&catalog, &request, 0);
        assert_eq!(workout.len(), 1);
        assert_eq!(workout[0].sets, 4);
        assert_eq!(workout[0].reps, 2_684_354_559);
    }

    #[test]
    fn test_generate_huge_sets() {
        let catalog = Catalog::from_data(&[exercise(
            "Endless Plank",
            MuscleGroup::Core,
            Difficulty::Beginner,
            u32::MAX,
        )])
        .unwrap();
        for energy_level in EnergyLevel::iter() {
            let request = request(&[MuscleGroup::Core], *energy_level, 60);
            assert!(generate_seeded(&catalog, &request, 0).is_empty());
        }
    }

    #[test]
    fn test_generate_exhausted_pool() {
        let catalog = Catalog::from_data(&[
            exercise("Swing", MuscleGroup::Glutes, Difficulty::Beginner, 3),
            exercise("Row", MuscleGroup::Back, Difficulty::Beginner, 3),
        ])
        .unwrap();
        let request = request(&[MuscleGroup::Glutes], EnergyLevel::Medium, 60);
        for seed in SEEDS {
            let workout = generate_seeded(&catalog, &request, seed);
            assert_eq!(workout.len(), 1);
            assert_eq!(workout[0].exercise.name, "Swing");
        }
    }

    #[test]
    fn test_generate_fill_pass() {
        let catalog = Catalog::from_data(&[
            exercise("A", MuscleGroup::Core, Difficulty::Beginner, 2),
            exercise("B", MuscleGroup::Core, Difficulty::Beginner, 2),
            exercise("C", MuscleGroup::Core, Difficulty::Beginner, 2),
            exercise("D", MuscleGroup::Core, Difficulty::Beginner, 2),
            exercise("E", MuscleGroup::Core, Difficulty::Beginner, 2),
            exercise("F", MuscleGroup::Core, Difficulty::Beginner, 2),
        ])
        .unwrap();
        // 3.5 minutes per exercise, no back exercises available
        let request = request(
            &[MuscleGroup::Core, MuscleGroup::Back],
            EnergyLevel::Medium,
            13,
        );
        for seed in SEEDS {
            let workout = generate_seeded(&catalog, &request, seed);
            assert_eq!(workout.len(), 2);
            assert_approx_eq!(estimate_duration(&workout, EnergyLevel::Medium), 7.0);
        }

        let request = GenerationRequest {
            duration_minutes: 25,
            ..request
        };
        for seed in SEEDS {
            let workout = generate_seeded(&catalog, &request, seed);
            assert_eq!(workout.len(), 5);
            assert_approx_eq!(estimate_duration(&workout, EnergyLevel::Medium), 17.5);
        }
    }

    #[rstest]
    fn test_generate_invariants(
        #[values(EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High)]
        energy_level: EnergyLevel,
        #[values(15, 30, 45, 60)] duration_minutes: u32,
        #[values(
            &[MuscleGroup::Glutes][..],
            &[MuscleGroup::Back, MuscleGroup::Chest][..],
            &[MuscleGroup::Flexibility, MuscleGroup::Mobility, MuscleGroup::Core][..],
            &[
                MuscleGroup::Back,
                MuscleGroup::Biceps,
                MuscleGroup::Chest,
                MuscleGroup::Triceps,
                MuscleGroup::Glutes,
                MuscleGroup::Shoulders,
                MuscleGroup::Core,
                MuscleGroup::Flexibility,
                MuscleGroup::Mobility,
            ][..]
        )]
        muscle_groups: &[MuscleGroup],
    ) {
        let request = request(muscle_groups, energy_level, duration_minutes);
        let target = f64::from(duration_minutes - RESERVED_MINUTES);

        for seed in SEEDS {
            let workout = generate_seeded(Catalog::kettlebell(), &request, seed);

            assert!(!workout.is_empty());
            assert!(estimate_duration(&workout, energy_level) <= target);

            let ids = workout
                .iter()
                .map(|p| p.exercise.id.clone())
                .collect::<HashSet<_>>();
            assert_eq!(ids.len(), workout.len(), "duplicate exercise");

            for prescribed in &workout {
                let exercise = prescribed.exercise;
                assert!(muscle_groups.contains(&exercise.muscle_group));
                assert!(energy_level.allows(exercise.difficulty));
                assert!(prescribed.sets >= 2);
                assert_eq!(prescribed.sets, energy_level.sets(exercise.default_sets));
                assert_eq!(prescribed.reps, energy_level.reps(exercise.default_reps));
            }
        }
    }

    #[test]
    fn test_generate_low_energy_floors() {
        let request = request(MuscleGroup::iter().as_slice(), EnergyLevel::Low, 60);
        for seed in SEEDS {
            for prescribed in generate_seeded(Catalog::kettlebell(), &request, seed) {
                assert!(prescribed.sets >= 2);
                assert!(prescribed.reps >= 6);
                assert_eq!(prescribed.exercise.difficulty, Difficulty::Beginner);
            }
        }
    }

    #[test]
    fn test_generate_glutes_low_energy() {
        let request = request(&[MuscleGroup::Glutes], EnergyLevel::Low, 30);
        for seed in SEEDS {
            let workout = generate_seeded(Catalog::kettlebell(), &request, seed);
            assert!(!workout.is_empty());
            assert!(estimate_duration(&workout, EnergyLevel::Low) <= 25.0);
            for prescribed in &workout {
                assert_eq!(prescribed.exercise.muscle_group, MuscleGroup::Glutes);
                assert_eq!(prescribed.exercise.difficulty, Difficulty::Beginner);
                assert!(prescribed.sets >= 2);
            }
        }
    }

    #[test]
    fn test_generate_back_and_chest_high_energy() {
        let request = request(
            &[MuscleGroup::Back, MuscleGroup::Chest],
            EnergyLevel::High,
            60,
        );
        for seed in SEEDS {
            let workout = generate_seeded(Catalog::kettlebell(), &request, seed);
            let muscle_groups = workout
                .iter()
                .map(|p| p.exercise.muscle_group)
                .collect::<HashSet<_>>();
            assert_eq!(
                muscle_groups,
                HashSet::from([MuscleGroup::Back, MuscleGroup::Chest])
            );
            for prescribed in &workout {
                assert_eq!(prescribed.sets, prescribed.exercise.default_sets + 1);
                assert_eq!(
                    prescribed.reps,
                    (prescribed.exercise.default_reps * 5).div_ceil(4)
                );
            }
        }
    }

    #[test]
    fn test_generate_same_seed_same_workout() {
        let request = request(
            &[MuscleGroup::Core, MuscleGroup::Shoulders],
            EnergyLevel::Medium,
            45,
        );
        assert_eq!(
            generate_seeded(Catalog::kettlebell(), &request, 7),
            generate_seeded(Catalog::kettlebell(), &request, 7)
        );
    }

    #[test]
    fn test_prescription_monotonic_in_energy_level() {
        for exercise in Catalog::kettlebell().iter() {
            let [low, medium, high] = [EnergyLevel::Low, EnergyLevel::Medium, EnergyLevel::High]
                .map(|energy_level| PrescribedExercise::new(exercise, energy_level));
            assert!(low.sets <= medium.sets && medium.sets <= high.sets);
            assert!(medium.reps <= high.reps);
            if exercise.default_reps >= 6 {
                assert!(low.reps <= medium.reps, "{}", exercise.name);
            }
        }
    }

    #[test]
    fn test_low_energy_rep_floor_exceeds_low_rep_defaults() {
        let exercise = Catalog::kettlebell()
            .get(&"turkish-get-up".into())
            .unwrap();
        assert_eq!(exercise.default_reps, 3);
        assert_eq!(PrescribedExercise::new(exercise, EnergyLevel::Low).reps, 6);
        assert_eq!(PrescribedExercise::new(exercise, EnergyLevel::Medium).reps, 3);
    }

    #[test]
    fn test_estimate_duration() {
        let catalog = Catalog::from_data(&[
            exercise("A", MuscleGroup::Core, Difficulty::Beginner, 3),
            exercise("B", MuscleGroup::Core, Difficulty::Beginner, 4),
        ])
        .unwrap();
        let workout = catalog
            .iter()
            .map(|e| PrescribedExercise::new(e, EnergyLevel::High))
            .collect::<Vec<_>>();
        assert_approx_eq!(estimate_duration(&workout, EnergyLevel::High), 11.25);
        assert_approx_eq!(estimate_duration(&[], EnergyLevel::High), 0.0);
    }
}

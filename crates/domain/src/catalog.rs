use std::collections::{BTreeMap, HashSet};

use crate::{Difficulty, Exercise, ExerciseData, ExerciseID, MuscleGroup};

/// Immutable collection of exercise definitions.
///
/// Exercises keep the order in which they were supplied; every lookup returns them in that
/// order.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: BTreeMap<ExerciseID, usize>,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        let mut index = BTreeMap::new();

        for (i, exercise) in exercises.iter().enumerate() {
            if !names.insert(exercise.name) {
                return Err(CatalogError::DuplicateName(exercise.name.to_string()));
            }
            if index.insert(exercise.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(exercise.id.clone()));
            }
            if exercise.instructions.is_empty() {
                return Err(CatalogError::NoInstructions(exercise.name.to_string()));
            }
            if exercise.default_sets == 0 || exercise.default_reps == 0 {
                return Err(CatalogError::InvalidPrescription(exercise.name.to_string()));
            }
        }

        Ok(Self { exercises, index })
    }

    pub fn from_data(data: &[ExerciseData]) -> Result<Self, CatalogError> {
        Self::new(data.iter().map(Exercise::from).collect())
    }

    /// The built-in kettlebell catalog.
    #[must_use]
    pub fn kettlebell() -> &'static Catalog {
        &KETTLEBELL
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.index.get(id).map(|i| &self.exercises[*i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn by_muscle_group(&self, muscle_group: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == muscle_group)
            .collect()
    }

    #[must_use]
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .collect()
    }

    /// Exercises that could replace `exercise`: same primary muscle group, matching `search`.
    #[must_use]
    pub fn alternatives(&self, exercise: &Exercise, search: &str) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| {
                e.muscle_group == exercise.muscle_group
                    && e.name != exercise.name
                    && e.matches(search)
            })
            .collect()
    }

    /// Exercises of other muscle groups that work the primary muscle group of `exercise` as a
    /// secondary one. Only searched for a non-empty `search`.
    #[must_use]
    pub fn related(&self, exercise: &Exercise, search: &str) -> Vec<&Exercise> {
        if search.trim().is_empty() {
            return vec![];
        }
        self.exercises
            .iter()
            .filter(|e| {
                e.muscle_group != exercise.muscle_group
                    && e.works(exercise.muscle_group)
                    && e.matches(search)
            })
            .collect()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("duplicate exercise name \"{0}\"")]
    DuplicateName(String),
    #[error("duplicate exercise id \"{0}\"")]
    DuplicateId(ExerciseID),
    #[error("exercise \"{0}\" has no instructions")]
    NoInstructions(String),
    #[error("exercise \"{0}\" must have at least one set and one rep")]
    InvalidPrescription(String),
}

static KETTLEBELL: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    let exercises = EXERCISE_DATA.iter().map(Exercise::from).collect::<Vec<_>>();
    let index = exercises
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.clone(), i))
        .collect();
    Catalog { exercises, index }
});

const EXERCISE_DATA: [ExerciseData; 107] = [
    // Back
    ExerciseData {
        name: "Single-Arm Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Bent-over row targeting lats and upper back",
        instructions: &[
            "Place one hand on a bench or sturdy surface",
            "Hold kettlebell in opposite hand, arm hanging straight",
            "Pull kettlebell to hip, keeping elbow close to body",
            "Lower with control and repeat",
        ],
        tips: &["Keep back flat", "Don't rotate torso"],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Renegade Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        difficulty: Difficulty::Advanced,
        equipment: "2 KB",
        description: "Plank position alternating rows for back and core",
        instructions: &[
            "Start in plank position with hands on kettlebells",
            "Row one kettlebell to hip while balancing",
            "Lower and repeat on other side",
            "Keep hips square throughout",
        ],
        tips: &["Widen feet for more stability", "Engage core throughout"],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Gorilla Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Hinged stance alternating explosive rows",
        instructions: &[
            "Place two kettlebells between feet",
            "Hinge at hips, grab both handles",
            "Row one kettlebell explosively while other stays grounded",
            "Alternate sides",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "High Pull",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Explosive pull from floor to chest height",
        instructions: &[
            "Start with kettlebell between feet",
            "Hinge and grab handle",
            "Explosively pull to chest height, elbow high",
            "Control the descent",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Kettlebell Deadlift",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Hip hinge with kettlebell between legs",
        instructions: &[
            "Stand with feet hip-width, kettlebell between feet",
            "Hinge at hips, grab handle with both hands",
            "Drive through heels to stand",
            "Squeeze glutes at top",
        ],
        tips: &["Keep chest proud", "Don't round lower back"],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Sumo Deadlift",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Wide stance deadlift targeting inner thighs",
        instructions: &[
            "Wide stance, toes pointed out",
            "Kettlebell between feet",
            "Hinge and grab handle",
            "Stand by driving knees out",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Single-Leg Deadlift",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Balance-focused hip hinge on one leg",
        instructions: &[
            "Hold kettlebell in one hand",
            "Hinge forward on opposite leg",
            "Keep back leg straight, extending behind",
            "Return to standing",
        ],
        tips: &["Use wall for balance if needed", "Keep hips square"],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Bent-Over Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        difficulty: Difficulty::Beginner,
        equipment: "2 KB",
        description: "Both arms rowing simultaneously",
        instructions: &[
            "Hold kettlebell in each hand",
            "Hinge forward at hips, back flat",
            "Row both kettlebells to hips",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Upright Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Pull kettlebell to chin with elbows high",
        instructions: &[
            "Stand holding kettlebell with both hands",
            "Pull straight up to chin level",
            "Elbows lead the movement, going high",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Pendlay Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Explosive row from floor each rep",
        instructions: &[
            "Start with kettlebells on floor",
            "Hinge at hips, grab handles",
            "Explosively row to chest",
            "Return to floor each rep",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    // Biceps
    ExerciseData {
        name: "Standing Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Standard bicep curl with kettlebell",
        instructions: &[
            "Stand with kettlebell held at sides or front",
            "Curl up, keeping elbows pinned",
            "Squeeze at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Hammer Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Neutral grip curl for brachialis",
        instructions: &[
            "Hold kettlebell by horns or handle vertically",
            "Curl up with neutral wrist position",
            "Keep elbows stationary",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Concentration Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Seated curl with elbow braced on thigh",
        instructions: &[
            "Sit with elbow braced on inner thigh",
            "Hold kettlebell with palm facing up",
            "Curl up, focusing on bicep contraction",
            "Lower slowly",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Zottman Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Curl up, rotate, lower with overhand grip",
        instructions: &[
            "Curl kettlebell up with palm facing up",
            "At top, rotate to overhand grip",
            "Lower slowly with overhand grip",
            "Rotate back and repeat",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Cross-Body Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Curl across the body for different angle",
        instructions: &[
            "Hold kettlebell at side",
            "Curl across body toward opposite shoulder",
            "Squeeze at top",
            "Lower and repeat",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Crush Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Squeeze bell with both hands while curling",
        instructions: &[
            "Hold kettlebell by bell with both palms",
            "Squeeze palms together throughout",
            "Curl up to chest",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Drag Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Elbows pulled back during curl",
        instructions: &[
            "Hold kettlebell in front of thighs",
            "Curl while dragging bell up body",
            "Elbows move back behind torso",
            "Squeeze at top",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Preacher Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Arm supported on incline for isolation",
        instructions: &[
            "Kneel behind incline bench or use arm of couch",
            "Rest upper arm on surface",
            "Curl kettlebell up",
            "Lower with full control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    // Chest
    ExerciseData {
        name: "Floor Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Beginner,
        equipment: "2 KB",
        description: "Pressing from floor with back supported",
        instructions: &[
            "Lie on back, kettlebells at chest",
            "Press straight up",
            "Lower until triceps touch floor",
            "Press back up",
        ],
        tips: &["Keep wrists straight", "Squeeze chest at top"],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Single-Arm Floor Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Unilateral floor press for imbalance correction",
        instructions: &[
            "Lie on back, one kettlebell at chest",
            "Press straight up with one arm",
            "Keep core engaged to prevent rotation",
            "Lower and repeat",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Squeeze Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Press with bells touching, squeezing together",
        instructions: &[
            "Lie on back, press bells together at chest",
            "Maintain squeeze throughout movement",
            "Press up while keeping bells touching",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Pullover",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Lying arc motion overhead for chest stretch",
        instructions: &[
            "Lie on back holding kettlebell over chest",
            "Lower in arc motion behind head",
            "Feel stretch in chest and lats",
            "Pull back to start",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Close-Grip Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Single bell pressed with both hands",
        instructions: &[
            "Lie on back, hold kettlebell by horns",
            "Press straight up over chest",
            "Lower to chest",
            "Keep elbows close to body",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Crush Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Press while squeezing bell with both palms",
        instructions: &[
            "Lie on back, hold bell between palms",
            "Squeeze palms together hard",
            "Press up while maintaining squeeze",
            "Feel chest engagement throughout",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Svend Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Standing press squeezing bell at chest",
        instructions: &[
            "Stand holding kettlebell at chest level",
            "Squeeze with both palms",
            "Press forward while maintaining squeeze",
            "Return to chest",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 15,
    },
    ExerciseData {
        name: "Chest Fly",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Floor-based chest fly for stretch",
        instructions: &[
            "Lie on back with kettlebells pressed up",
            "Lower arms out to sides in arc",
            "Feel stretch in chest",
            "Squeeze back to start",
        ],
        tips: &["Keep slight bend in elbows", "Don't go too deep"],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Push-Up on Kettlebells",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Push-ups with hands on bell handles",
        instructions: &[
            "Place hands on kettlebell handles",
            "Perform push-up with increased range of motion",
            "Lower chest between bells",
            "Push back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Alternating Floor Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Alternating single-arm presses on floor",
        instructions: &[
            "Lie on back with both kettlebells pressed up",
            "Lower one arm while other stays up",
            "Press back up",
            "Alternate sides",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    // Triceps
    ExerciseData {
        name: "Overhead Extension",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Both hands extending behind head",
        instructions: &[
            "Stand or sit, hold kettlebell overhead with both hands",
            "Lower behind head by bending elbows",
            "Keep upper arms stationary",
            "Extend back to start",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Single-Arm Extension",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Unilateral overhead extension",
        instructions: &[
            "Hold kettlebell overhead with one arm",
            "Lower behind head, elbow pointing up",
            "Extend back to start",
            "Keep core engaged",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Skull Crusher",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Lying tricep extension to forehead",
        instructions: &[
            "Lie on back, kettlebell pressed over chest",
            "Lower toward forehead by bending elbows",
            "Keep upper arms still",
            "Extend back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Tricep Kickback",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Bent over arm extension",
        instructions: &[
            "Hinge forward, upper arm parallel to floor",
            "Extend arm straight back",
            "Squeeze tricep at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Close-Grip Floor Press",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        difficulty: Difficulty::Beginner,
        equipment: "2 KB",
        description: "Narrow grip pressing emphasizing triceps",
        instructions: &[
            "Lie on back with kettlebells close together",
            "Press up with elbows close to body",
            "Lower until triceps touch floor",
            "Press back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Diamond Push-Up on KB",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Hands close together on single bell",
        instructions: &[
            "Place both hands on top of kettlebell",
            "Perform push-up with hands close",
            "Keep elbows tucked",
            "Push back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Tricep Dip",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Dips using bells as support",
        instructions: &[
            "Place hands on kettlebell handles behind you",
            "Lower body by bending elbows",
            "Keep elbows pointing back",
            "Push back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "JM Press",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Hybrid skull crusher and close-grip press",
        instructions: &[
            "Lie on back, kettlebell over chest",
            "Lower toward chin/upper chest",
            "Elbows flare slightly",
            "Press back to start",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    // Glutes
    ExerciseData {
        name: "Kettlebell Swing",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Hip hinge explosive swing - the king of KB exercises",
        instructions: &[
            "Stand with feet wider than hips",
            "Hinge and hike kettlebell between legs",
            "Explosively drive hips forward",
            "Let arms float to chest height",
            "Control the descent and repeat",
        ],
        tips: &["Power comes from hips, not arms", "Squeeze glutes at top"],
        default_sets: 3,
        default_reps: 15,
    },
    ExerciseData {
        name: "Single-Arm Swing",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "One-handed swing for added challenge",
        instructions: &[
            "Same as regular swing but one arm",
            "Keep shoulders square",
            "Core engaged to prevent rotation",
            "Switch hands at top if desired",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Goblet Squat",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Squat holding bell at chest",
        instructions: &[
            "Hold kettlebell at chest by horns",
            "Squat down, keeping chest tall",
            "Go as deep as mobility allows",
            "Drive through heels to stand",
        ],
        tips: &["Knees track over toes", "Keep weight in midfoot/heels"],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Sumo Squat",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Wide stance squat for inner thighs",
        instructions: &[
            "Wide stance, toes pointed out",
            "Hold kettlebell between legs",
            "Squat deep, knees over toes",
            "Stand by squeezing glutes",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Stiff-leg hip hinge for hamstrings and glutes",
        instructions: &[
            "Hold kettlebell in front of thighs",
            "Hinge at hips, pushing butt back",
            "Lower until hamstring stretch",
            "Squeeze glutes to stand",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Single-Leg RDL",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Unilateral Romanian deadlift",
        instructions: &[
            "Hold kettlebell, stand on one leg",
            "Hinge forward, back leg extends behind",
            "Lower until hamstring stretch",
            "Squeeze glute to stand",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Hip Thrust",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Back on bench, thrust hips up",
        instructions: &[
            "Upper back on bench, feet flat on floor",
            "Place kettlebell on hips",
            "Drive hips up, squeezing glutes",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Floor-based hip thrust",
        instructions: &[
            "Lie on back, feet flat, kettlebell on hips",
            "Drive hips up, squeezing glutes",
            "Hold briefly at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 15,
    },
    ExerciseData {
        name: "Bulgarian Split Squat",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Rear foot elevated single-leg squat",
        instructions: &[
            "Rear foot on bench behind you",
            "Hold kettlebell at chest or sides",
            "Lower into lunge position",
            "Drive through front heel to stand",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Lateral Lunge",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Side-stepping lunge for inner/outer thighs",
        instructions: &[
            "Hold kettlebell at chest",
            "Step wide to one side",
            "Sit back into hip on that side",
            "Push back to start",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Reverse Lunge",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Stepping backward lunge",
        instructions: &[
            "Hold kettlebell at chest or sides",
            "Step back into lunge",
            "Lower until back knee nearly touches",
            "Drive through front heel to stand",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Walking Lunge",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Forward traveling lunges",
        instructions: &[
            "Hold kettlebells at sides",
            "Lunge forward alternating legs",
            "Keep torso upright",
            "Continue walking forward",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Step-Up",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Step onto elevated surface",
        instructions: &[
            "Hold kettlebell at chest or sides",
            "Step up onto box or bench",
            "Drive through heel, stand tall",
            "Step down with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Cossack Squat",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Flexibility],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Deep lateral squat for mobility",
        instructions: &[
            "Wide stance, hold kettlebell at chest",
            "Shift weight to one side, squatting deep",
            "Straight leg toes point up",
            "Shift to other side",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 6,
    },
    ExerciseData {
        name: "Kickstand Deadlift",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Staggered stance deadlift",
        instructions: &[
            "One foot slightly behind for balance",
            "Most weight on front foot",
            "Hinge at hips",
            "Return to standing",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    // Shoulders
    ExerciseData {
        name: "Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Standing shoulder press",
        instructions: &[
            "Clean kettlebell to rack position",
            "Press straight overhead",
            "Lock out arm at top",
            "Lower with control to rack",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Double Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        difficulty: Difficulty::Intermediate,
        equipment: "2 KB",
        description: "Both arms pressing together",
        instructions: &[
            "Clean both kettlebells to rack",
            "Press both overhead simultaneously",
            "Lock out at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Push Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Glutes],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Leg-assisted explosive press",
        instructions: &[
            "Kettlebell in rack position",
            "Dip knees slightly",
            "Explosively drive through legs and press",
            "Lock out overhead",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Arnold Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Rotating press hitting all delt heads",
        instructions: &[
            "Start with kettlebell at chest, palm facing you",
            "Press up while rotating palm forward",
            "Lock out overhead",
            "Reverse motion on descent",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Side raise for medial delts",
        instructions: &[
            "Hold kettlebell at side",
            "Raise out to side to shoulder height",
            "Keep slight bend in elbow",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Front Raise",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Forward raise for front delts",
        instructions: &[
            "Hold kettlebell in front of thighs",
            "Raise straight forward to shoulder height",
            "Keep arm straight",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Bent-Over Rear Delt Fly",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Hinged fly for rear delts",
        instructions: &[
            "Hinge at hips, back flat",
            "Raise kettlebell out to side",
            "Squeeze rear delt at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Halo",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Mobility],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Circle bell around head for shoulder mobility",
        instructions: &[
            "Hold kettlebell upside down by horns",
            "Circle around head in one direction",
            "Keep core engaged",
            "Switch directions",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Bottoms-Up Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Press with bell inverted for grip and stability",
        instructions: &[
            "Hold kettlebell upside down (bottom up)",
            "Press overhead while balancing",
            "Requires intense grip and stability",
            "Lower with control",
        ],
        tips: &["Start light", "Squeeze handle hard"],
        default_sets: 3,
        default_reps: 6,
    },
    ExerciseData {
        name: "Z Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Seated on floor press without back support",
        instructions: &[
            "Sit on floor, legs extended",
            "Kettlebell in rack position",
            "Press overhead without leaning",
            "Requires core strength and hip mobility",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Snatch",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Back, MuscleGroup::Glutes],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Floor to overhead in one powerful motion",
        instructions: &[
            "Start like a swing",
            "Pull kettlebell up close to body",
            "Punch through at top to lock out",
            "Lower in controlled swing",
        ],
        tips: &["Master the swing first", "Keep bell close to body"],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Clean",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Back, MuscleGroup::Biceps],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Floor to rack position",
        instructions: &[
            "Swing kettlebell between legs",
            "Pull up close to body",
            "Rotate wrist and catch in rack",
            "Lower in swing motion",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Clean and Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Back, MuscleGroup::Triceps],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Combined clean into press",
        instructions: &[
            "Clean kettlebell to rack",
            "Press overhead",
            "Lower to rack",
            "Lower to swing and repeat",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Shoulder High Pull",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Explosive pull to shoulder height",
        instructions: &[
            "Start with kettlebell between feet",
            "Hinge and grip handle",
            "Explosively pull to shoulder, elbow high",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Sots Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Flexibility],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Press from bottom of squat position",
        instructions: &[
            "Squat to bottom position with kettlebell at shoulder",
            "Press overhead while staying in squat",
            "Requires great mobility",
            "Lower and stand",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 5,
    },
    ExerciseData {
        name: "Windmill Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Flexibility],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Press combined with windmill movement",
        instructions: &[
            "Press kettlebell overhead",
            "Turn feet 45 degrees away",
            "Hinge and reach toward floor",
            "Keep arm locked out throughout",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 6,
    },
    // Flexibility
    ExerciseData {
        name: "Windmill",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Lateral bend with overhead hold",
        instructions: &[
            "Press kettlebell overhead",
            "Turn feet 45 degrees away from raised arm",
            "Hinge at hip, reaching down to floor",
            "Keep eyes on kettlebell",
        ],
        tips: &["Start without weight", "Go slow"],
        default_sets: 3,
        default_reps: 6,
    },
    ExerciseData {
        name: "Turkish Get-Up",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Glutes],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Floor to standing while pressing overhead",
        instructions: &[
            "Lie on back, kettlebell pressed overhead",
            "Roll to elbow, then hand",
            "Bridge hips and sweep leg through",
            "Stand up, reverse to return",
        ],
        tips: &["Learn each position separately", "Keep arm locked out"],
        default_sets: 3,
        default_reps: 3,
    },
    ExerciseData {
        name: "Goblet Squat Hold",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Deep squat position hold for hip mobility",
        instructions: &[
            "Hold kettlebell at chest",
            "Squat to deepest position",
            "Use elbows to push knees out",
            "Hold for time, breathing deeply",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 30,
    },
    ExerciseData {
        name: "Tactical Lunge",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Lunge with pass-through under leg",
        instructions: &[
            "Lunge forward holding kettlebell",
            "Pass kettlebell under front leg",
            "Grab with other hand",
            "Stand and repeat other side",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Kneeling Hip Flexor Stretch",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Weighted hip flexor stretch",
        instructions: &[
            "Kneel in lunge position",
            "Hold kettlebell as counterbalance",
            "Push hips forward",
            "Hold and breathe",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
    ExerciseData {
        name: "Deep Squat Pry",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Prying knees open in deep squat",
        instructions: &[
            "Hold kettlebell at chest",
            "Squat deep",
            "Use elbows to push knees apart",
            "Shift weight side to side",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 20,
    },
    ExerciseData {
        name: "Bretzel Stretch",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Lying spinal twist stretch",
        instructions: &[
            "Lie on side, bend top knee to 90 degrees",
            "Hold with bottom hand",
            "Rotate upper body to open chest",
            "Use light kettlebell for added stretch",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
    ExerciseData {
        name: "Overhead Squat",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Squat with kettlebell locked overhead",
        instructions: &[
            "Press kettlebell overhead with one or both arms",
            "Squat while keeping arm locked out",
            "Requires shoulder and thoracic mobility",
            "Stand back up",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 6,
    },
    ExerciseData {
        name: "Assisted Cossack Squat",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Using kettlebell as counterweight",
        instructions: &[
            "Hold kettlebell in front as counterbalance",
            "Shift weight to one side",
            "Squat deep on that side",
            "Use KB weight to balance",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 6,
    },
    ExerciseData {
        name: "Hip 90/90 Stretch",
        muscle_group: MuscleGroup::Flexibility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Seated hip rotation stretch",
        instructions: &[
            "Sit with both legs bent at 90 degrees",
            "Front shin parallel, back shin perpendicular",
            "Hold kettlebell for added stretch",
            "Switch sides",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
    // Core
    ExerciseData {
        name: "Russian Twist",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Seated rotation for obliques",
        instructions: &[
            "Sit with knees bent, lean back slightly",
            "Hold kettlebell at chest",
            "Rotate torso side to side",
            "Keep core engaged throughout",
        ],
        tips: &["Lift feet for more challenge", "Control the movement"],
        default_sets: 3,
        default_reps: 20,
    },
    ExerciseData {
        name: "Kettlebell Sit-Up",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Weighted sit-up for core strength",
        instructions: &[
            "Lie on back with kettlebell pressed overhead",
            "Keep arms locked throughout",
            "Sit up while maintaining arm position",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Plank Pull-Through",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Plank with kettlebell drag for anti-rotation",
        instructions: &[
            "Start in plank position with kettlebell beside you",
            "Reach under body with opposite hand",
            "Drag kettlebell to other side",
            "Alternate hands, keep hips stable",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Dead Bug with Kettlebell",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Anti-extension core exercise",
        instructions: &[
            "Lie on back holding kettlebell over chest",
            "Bring knees to 90 degrees",
            "Extend opposite arm and leg",
            "Return and switch sides",
        ],
        tips: &["Keep lower back pressed to floor", "Move slowly"],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Half-Kneeling Wood Chop",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Rotational movement for core power",
        instructions: &[
            "Kneel on one knee",
            "Hold kettlebell at hip on kneeling side",
            "Rotate and lift diagonally across body",
            "Return with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Kettlebell Crunch",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Weighted crunch for upper abs",
        instructions: &[
            "Lie on back, hold kettlebell at chest",
            "Crunch up, pressing kettlebell toward ceiling",
            "Focus on contracting abs",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 15,
    },
    ExerciseData {
        name: "Kettlebell Side Bend",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Lateral flexion for obliques",
        instructions: &[
            "Stand with kettlebell in one hand",
            "Bend sideways toward weighted side",
            "Return to standing using obliques",
            "Complete all reps then switch sides",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 12,
    },
    ExerciseData {
        name: "Hollow Body Hold with KB",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Isometric core hold with weight",
        instructions: &[
            "Lie on back, press kettlebell overhead",
            "Lift shoulders and legs off ground",
            "Create banana shape with body",
            "Hold position, breathing steadily",
        ],
        tips: &["Keep lower back pressed down", "Start without weight if needed"],
        default_sets: 3,
        default_reps: 30,
    },
    ExerciseData {
        name: "Turkish Get-Up (Half)",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "First half of TGU focusing on core",
        instructions: &[
            "Lie on back with kettlebell pressed up",
            "Roll to elbow, then to hand",
            "Bridge hips up",
            "Reverse the movement",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 5,
    },
    ExerciseData {
        name: "Kettlebell V-Up",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Advanced,
        equipment: "1 KB",
        description: "Full body crunch with weight",
        instructions: &[
            "Lie flat holding kettlebell overhead",
            "Simultaneously lift legs and torso",
            "Touch kettlebell to feet at top",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Plank with KB Drag",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Anti-rotation plank exercise",
        instructions: &[
            "Hold plank with kettlebell outside one hand",
            "Drag kettlebell under body to other side",
            "Keep hips square and stable",
            "Alternate sides",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Standing Core Rotation",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Standing twist for rotational strength",
        instructions: &[
            "Stand with feet hip width, hold kettlebell at chest",
            "Rotate torso fully to one side",
            "Return to center and rotate other way",
            "Keep hips facing forward",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 16,
    },
    ExerciseData {
        name: "Kettlebell Leg Raise",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Hanging or lying leg raise with weight",
        instructions: &[
            "Lie on back or hang from bar",
            "Hold light kettlebell between feet",
            "Raise legs to 90 degrees",
            "Lower with control",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Bird Dog with KB",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Quadruped core stability with weight",
        instructions: &[
            "Start on hands and knees",
            "Hold light kettlebell in one hand",
            "Extend arm forward and opposite leg back",
            "Hold briefly, return, alternate",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Mountain Climber with KB",
        muscle_group: MuscleGroup::Core,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Dynamic core exercise with hands on bell",
        instructions: &[
            "Hands on kettlebell in plank position",
            "Drive knees toward chest alternating",
            "Keep hips low and stable",
            "Maintain quick pace",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 20,
    },
    // Mobility
    ExerciseData {
        name: "Around the World",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Circle bell around body",
        instructions: &[
            "Stand with kettlebell in one hand",
            "Pass around body to other hand behind back",
            "Continue circling",
            "Switch directions",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Figure 8",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Pass bell between legs in figure 8 pattern",
        instructions: &[
            "Slight squat stance",
            "Pass kettlebell between legs front to back",
            "Pass to other hand",
            "Continue in figure 8 pattern",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Arm Bar",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Lying shoulder stabilization",
        instructions: &[
            "Lie on back, kettlebell pressed up",
            "Roll to side, keeping arm vertical",
            "Relax shoulder into socket",
            "Hold and breathe",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
    ExerciseData {
        name: "Hip Circle",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Standing hip circles with bell as weight",
        instructions: &[
            "Hold kettlebell at chest",
            "Circle hips in large circles",
            "Keep upper body stable",
            "Switch directions",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 10,
    },
    ExerciseData {
        name: "Mobility Halo",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Slow controlled circles around head",
        instructions: &[
            "Hold kettlebell upside down by horns",
            "Slowly circle around head",
            "Keep core engaged, minimize body movement",
            "Switch directions",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 8,
    },
    ExerciseData {
        name: "Slingshot",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Hand-to-hand pass around body",
        instructions: &[
            "Pass kettlebell around body quickly",
            "Release and catch with other hand",
            "Keep hips stable",
            "Switch directions",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 10,
    },
    ExerciseData {
        name: "Goblet Wall Sit",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Wall sit holding bell for added load",
        instructions: &[
            "Back against wall, slide to seated position",
            "Hold kettlebell at chest",
            "Thighs parallel to ground",
            "Hold for time",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 30,
    },
    ExerciseData {
        name: "Shoulder Dislocate",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Overhead arc for shoulder mobility",
        instructions: &[
            "Hold light kettlebell with wide grip on horns",
            "Arc overhead and behind body",
            "Keep arms straight throughout",
            "Reverse motion",
        ],
        tips: &["Use very light weight", "Go slow"],
        default_sets: 2,
        default_reps: 8,
    },
    ExerciseData {
        name: "Loaded Beast",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Child's pose with bell for shoulder stretch",
        instructions: &[
            "Kneel and sit back on heels",
            "Extend arms forward with kettlebell",
            "Sink chest toward floor",
            "Hold and breathe",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
    ExerciseData {
        name: "Bottoms-Up Carry",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Walking with inverted bell for grip and stability",
        instructions: &[
            "Hold kettlebell upside down",
            "Walk slowly maintaining balance",
            "Engage core and squeeze handle",
            "Switch hands",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 40,
    },
    ExerciseData {
        name: "Rack Walk",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Walking with bell in rack position",
        instructions: &[
            "Clean kettlebell to rack position",
            "Walk keeping posture tall",
            "Core engaged, no leaning",
            "Switch sides",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 40,
    },
    ExerciseData {
        name: "Farmer's Carry",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "2 KB",
        description: "Walking with bells at sides",
        instructions: &[
            "Hold kettlebells at sides",
            "Walk with tall posture",
            "Shoulders back and down",
            "Core engaged",
        ],
        tips: &[],
        default_sets: 3,
        default_reps: 40,
    },
    ExerciseData {
        name: "Waiter's Walk",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        difficulty: Difficulty::Intermediate,
        equipment: "1 KB",
        description: "Walking with bell pressed overhead",
        instructions: &[
            "Press kettlebell overhead",
            "Walk keeping arm locked out",
            "Core tight, ribs down",
            "Switch arms",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 40,
    },
    ExerciseData {
        name: "Suitcase Carry",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[MuscleGroup::Back],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Single-sided farmer's walk",
        instructions: &[
            "Hold single kettlebell at side",
            "Walk without leaning to either side",
            "Core works hard to stabilize",
            "Switch sides",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 40,
    },
    ExerciseData {
        name: "Rack Hold",
        muscle_group: MuscleGroup::Mobility,
        secondary_muscle_groups: &[],
        difficulty: Difficulty::Beginner,
        equipment: "1 KB",
        description: "Static hold in rack position",
        instructions: &[
            "Clean kettlebell to rack",
            "Hold maintaining good posture",
            "Breathe behind the bell",
            "Switch sides",
        ],
        tips: &[],
        default_sets: 2,
        default_reps: 30,
    },
];

//! Weekly training program
//!
//! The canonical program is a set of `const` templates. [`Program::new`] turns them into owned
//! values, so every holder of a `Program` works on its own copy and the canonical definition stays
//! untouched.

use std::collections::BTreeSet;

use chrono::Weekday;
use indexmap::IndexSet;

use crate::{Name, ValidationError, capitalize};

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    days: Vec<(Weekday, DayEntry)>,
    exercise_names: BTreeSet<Name>,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        let days = WEEK
            .iter()
            .map(|(weekday, template)| (*weekday, DayEntry::from(template)))
            .collect::<Vec<_>>();
        let exercise_names = days
            .iter()
            .flat_map(|(_, day)| day.exercises())
            .map(|exercise| exercise.name.clone())
            .collect();
        Self {
            days,
            exercise_names,
        }
    }

    /// Days in program order, starting with Monday.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayEntry)> {
        self.days.iter().map(|(weekday, day)| (*weekday, day))
    }

    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &DayEntry {
        &self.days[weekday.num_days_from_monday() as usize].1
    }

    /// All recordable exercises in program order.
    pub fn exercises(&self) -> impl Iterator<Item = &Entry> {
        self.days.iter().flat_map(|(_, day)| day.exercises())
    }

    /// Names of all recordable exercises. Read-only entries are not included.
    #[must_use]
    pub fn exercise_names(&self) -> &BTreeSet<Name> {
        &self.exercise_names
    }

    #[must_use]
    pub fn is_known_exercise(&self, name: &str) -> bool {
        self.exercise_names.contains(name)
    }

    pub fn validate_exercise_name(&self, name: &str) -> Result<Name, ValidationError> {
        let name = Name::new(name)?;
        if self.is_known_exercise(name.as_ref()) {
            Ok(name)
        } else {
            Err(ValidationError::UnknownExercise(name.to_string()))
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DayEntry {
    Training(TrainingDay),
    Rest(RestDay),
}

impl DayEntry {
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            DayEntry::Training(day) => &day.category,
            DayEntry::Rest(day) => &day.category,
        }
    }

    #[must_use]
    pub fn image(&self) -> &str {
        match self {
            DayEntry::Training(day) => &day.image,
            DayEntry::Rest(day) => &day.image,
        }
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        match self {
            DayEntry::Training(day) => &day.alt,
            DayEntry::Rest(day) => &day.alt,
        }
    }

    #[must_use]
    pub fn is_training(&self) -> bool {
        matches!(self, DayEntry::Training(_))
    }

    /// Tags shown in the workout preview.
    ///
    /// Rest days contribute all of their tags, training days the primary tag of each entry. Tags
    /// are capitalized and kept in order of first occurrence.
    #[must_use]
    pub fn tags(&self) -> IndexSet<String> {
        match self {
            DayEntry::Rest(day) => day.tags.iter().map(|t| capitalize(t)).collect(),
            DayEntry::Training(day) => day
                .entries
                .iter()
                .filter_map(|e| e.details().primary_tag())
                .map(capitalize)
                .collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &ProgramEntry> {
        let entries: &[ProgramEntry] = match self {
            DayEntry::Training(day) => &day.entries,
            DayEntry::Rest(_) => &[],
        };
        entries.iter()
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Entry> {
        self.entries().filter_map(|e| match e {
            ProgramEntry::Exercise(exercise) => Some(exercise),
            ProgramEntry::ReadOnly(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub image: String,
    pub alt: String,
    pub category: String,
    pub entries: Vec<ProgramEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestDay {
    pub image: String,
    pub alt: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProgramEntry {
    Exercise(Entry),
    /// Warm-up and cool-down entries, which do not accept records.
    ReadOnly(Entry),
}

impl ProgramEntry {
    #[must_use]
    pub fn details(&self) -> &Entry {
        match self {
            ProgramEntry::Exercise(entry) | ProgramEntry::ReadOnly(entry) => entry,
        }
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self, ProgramEntry::ReadOnly(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: Name,
    pub image: String,
    pub alt: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl Entry {
    #[must_use]
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

impl From<&EntryTemplate> for ProgramEntry {
    fn from(value: &EntryTemplate) -> Self {
        let entry = Entry {
            name: Name::from_static(value.name),
            image: value.image.to_string(),
            alt: value.alt.to_string(),
            description: value.description.to_string(),
            tags: value.tags.iter().map(ToString::to_string).collect(),
        };
        if value.read_only {
            ProgramEntry::ReadOnly(entry)
        } else {
            ProgramEntry::Exercise(entry)
        }
    }
}

impl From<&DayTemplate> for DayEntry {
    fn from(value: &DayTemplate) -> Self {
        match value {
            DayTemplate::Training {
                image,
                alt,
                category,
                entries,
            } => DayEntry::Training(TrainingDay {
                image: (*image).to_string(),
                alt: (*alt).to_string(),
                category: (*category).to_string(),
                entries: entries.iter().map(ProgramEntry::from).collect(),
            }),
            DayTemplate::Rest => DayEntry::Rest(RestDay {
                image: images::REST_DAY.to_string(),
                alt: "Woman stretching whilst in bed".to_string(),
                category: REST_DAY_CATEGORY.to_string(),
                description: "Recovery, light walking, or stretching".to_string(),
                tags: [tag::RECOVERY, "light activity", "rest"]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            }),
        }
    }
}

pub const REST_DAY_CATEGORY: &str = "Rest Day";

enum DayTemplate {
    Training {
        image: &'static str,
        alt: &'static str,
        category: &'static str,
        entries: &'static [EntryTemplate],
    },
    Rest,
}

struct EntryTemplate {
    name: &'static str,
    image: &'static str,
    alt: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    read_only: bool,
}

const fn warm_up(description: &'static str, tags: &'static [&'static str]) -> EntryTemplate {
    EntryTemplate {
        name: "Warm up",
        image: images::WARM_UP,
        alt: "Woman on a stationary bike",
        description,
        tags,
        read_only: true,
    }
}

const fn exercise(
    name: &'static str,
    image: &'static str,
    alt: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
) -> EntryTemplate {
    EntryTemplate {
        name,
        image,
        alt,
        description,
        tags,
        read_only: false,
    }
}

mod tag {
    pub const PUSH: &str = "push";
    pub const PULL: &str = "pull";
    pub const LEGS: &str = "legs";
    pub const CORE: &str = "core";
    pub const RECOVERY: &str = "recovery";
    pub const CHEST: &str = "chest";
    pub const SHOULDERS: &str = "shoulders";
    pub const TRICEPS: &str = "triceps";
    pub const BACK: &str = "back";
    pub const LATS: &str = "lats";
    pub const CARDIO: &str = "cardio";
    pub const FULL_BODY: &str = "full body";
    pub const DUMBBELL: &str = "dumbbell";
    pub const BARBELL: &str = "barbell";
    pub const BENCH: &str = "bench";
    pub const GLUTES: &str = "glutes";
    pub const QUADS: &str = "quads";
    pub const MACHINE: &str = "machine";
    pub const CALVES: &str = "calves";
    pub const BICEPS: &str = "biceps";
    pub const CURLS: &str = "curls";
    pub const CABLES: &str = "cables";
    pub const STRETCHING: &str = "stretching";
}

mod images {
    pub const WARM_UP: &str = "./assets/media/images/cycling-sq.jpg";
    pub const REST_DAY: &str = "./assets/media/images/rest-day.jpg";
}

const WARM_UP_DESCRIPTION: &str = "5-10 minutes light cardio or dynamic stretches";

#[rustfmt::skip]
const WEEK: [(Weekday, DayTemplate); 7] = [
    (Weekday::Mon, DayTemplate::Training {
        image: "./assets/media/images/overhead-press.jpg",
        alt: "Man doing overhead presses with dumbbells",
        category: "Upper Body - Push",
        entries: &[
            warm_up(WARM_UP_DESCRIPTION, &[]),
            exercise(
                "Barbell Bench Press",
                "./assets/media/images/barbell-bench-press-sq.jpg",
                "Man doing barbell bench presses",
                "4 sets x 8-10 reps",
                &[tag::CHEST, tag::BARBELL, tag::BENCH, tag::PUSH],
            ),
            exercise(
                "Incline Dumbbell Press",
                "./assets/media/images/incline-bench-press-sq.jpg",
                "Man doing an incline dumbbell press",
                "3 sets x 10-12 reps",
                &[tag::CHEST, tag::DUMBBELL, tag::BENCH, tag::PUSH],
            ),
            exercise(
                "Overhead Shoulder Press",
                "./assets/media/images/overhead-press-sq.jpg",
                "Man doing overhead shoulder press",
                "3 sets x 8-10 reps",
                &[tag::SHOULDERS, tag::BARBELL, tag::BENCH, tag::PUSH],
            ),
            exercise(
                "Tricep Dips",
                "./assets/media/images/tricep-dips-sq.jpg",
                "Man doing tricep dips",
                "3 sets to failure",
                &[tag::TRICEPS, tag::PUSH],
            ),
            exercise(
                "Plank",
                "./assets/media/images/plank-sq.jpg",
                "Woman and man doing planks next to each other",
                "3 sets x 30-60 seconds",
                &[tag::CORE],
            ),
        ],
    }),
    (Weekday::Tue, DayTemplate::Training {
        image: "./assets/media/images/deadlifts.jpg",
        alt: "Man doing deadlifts",
        category: "Lower Body",
        entries: &[
            warm_up(WARM_UP_DESCRIPTION, &[]),
            exercise(
                "Barbell Squats",
                "./assets/media/images/barbell-squats-sq.jpg",
                "Man doing barbell squats",
                "4 sets x 8-10 reps",
                &[tag::LEGS, tag::GLUTES, tag::BARBELL, tag::PUSH],
            ),
            exercise(
                "Deadlifts",
                "./assets/media/images/deadlifts-sq.jpg",
                "Man doing deadlifts",
                "3 sets x 10-12 reps",
                &[tag::LEGS, tag::GLUTES, tag::BARBELL, tag::PULL],
            ),
            exercise(
                "Walking Lunges",
                "./assets/media/images/walking-lunges-sq.jpg",
                "Woman doing walking lunges",
                "3 sets x 12-15 steps per leg",
                &[tag::LEGS, tag::QUADS, tag::DUMBBELL, tag::PUSH],
            ),
            exercise(
                "Leg Press",
                "./assets/media/images/legpress-sq.jpg",
                "Man doing legpresses on a machine",
                "3 sets x 10-12 reps",
                &[tag::LEGS, tag::GLUTES, tag::MACHINE, tag::PUSH],
            ),
            exercise(
                "Calf Raises",
                "./assets/media/images/calf-raises-sq.jpg",
                "Calves as they are busy doing calf raises",
                "4 sets x 15-20 reps",
                &[tag::LEGS, tag::CALVES, tag::MACHINE, tag::PUSH],
            ),
        ],
    }),
    (Weekday::Wed, DayTemplate::Rest),
    (Weekday::Thu, DayTemplate::Training {
        image: "./assets/media/images/pullups.jpeg",
        alt: "Man doing pull ups",
        category: "Upper Body - Pull",
        entries: &[
            warm_up(WARM_UP_DESCRIPTION, &[]),
            exercise(
                "Pull Ups",
                "./assets/media/images/pullups-sq.jpeg",
                "Man doing pull ups",
                "3 sets x 10-12 reps",
                &[tag::BACK, tag::LATS, tag::PULL],
            ),
            exercise(
                "Dumbbell Rows",
                "./assets/media/images/dumbbell-rows-sq.jpg",
                "Man doing dumbbell rows",
                "3 sets x 8-10 reps",
                &[tag::BACK, tag::LATS, tag::DUMBBELL, tag::BENCH, tag::PULL],
            ),
            exercise(
                "Dumbbell Bicep Curls",
                "./assets/media/images/bicep-curls-sq.jpg",
                "Man sitting down doing dumbbell bicep curls",
                "3 sets x 12-15 reps",
                &[tag::BICEPS, tag::CURLS, tag::DUMBBELL, tag::PULL],
            ),
            exercise(
                "Face Pulls",
                "./assets/media/images/face-pulls-sq.jpg",
                "Man doing face pulls on the machine",
                "3 sets x 10-12 reps",
                &[tag::BACK, tag::MACHINE, tag::CABLES, tag::PULL],
            ),
        ],
    }),
    (Weekday::Fri, DayTemplate::Training {
        image: "./assets/media/images/cardio.jpg",
        alt: "Man running down the road",
        category: "Cardio and Core",
        entries: &[
            EntryTemplate {
                name: "Light Cardio",
                ..warm_up(
                    "30-40 minutes steady-state cardio (e.g., treadmill incline walk or cycling)",
                    &[tag::CARDIO],
                )
            },
            exercise(
                "Leg Raises",
                "./assets/media/images/leg-raises-sq.jpg",
                "Woman lying down on a mat and doing leg raises",
                "3 sets x 12-15 reps",
                &[tag::CORE],
            ),
            exercise(
                "Russian Twists",
                "./assets/media/images/russian-twists-sq.jpeg",
                "Woman doing russian twist with a medicine ball",
                "3 sets x 20 twists (with or without weight)",
                &[tag::CORE, "medicine ball", tag::PULL],
            ),
            exercise(
                "Side Planks",
                "./assets/media/images/side-plank-sq.jpg",
                "Man doing side planks on a mat",
                "2 sets x 30-45 seconds (each side)",
                &[tag::CORE, "obliques"],
            ),
        ],
    }),
    (Weekday::Sat, DayTemplate::Training {
        image: "./assets/media/images/push-ups.jpg",
        alt: "Woman doing push ups",
        category: "Functional and HIIT",
        entries: &[
            warm_up(WARM_UP_DESCRIPTION, &[]),
            exercise(
                "HIIT",
                "./assets/media/images/kettlebell-swings-sq.jpg",
                "Man doing kettlebell swings",
                "3 rounds of 20 seconds work and 20 seconds rest: Burpees, Kettlebell Swings, Jump Squats, Push-ups, Mountain Climbers",
                &["HIIT", "functional", tag::FULL_BODY, "kettlebells", "jumping"],
            ),
            EntryTemplate {
                read_only: true,
                ..exercise(
                    "Cool Down",
                    "./assets/media/images/cool-down-sq.jpg",
                    "Woman stretching on the mat",
                    "10 minutes light walking and stretching",
                    &[tag::RECOVERY, tag::STRETCHING],
                )
            },
        ],
    }),
    (Weekday::Sun, DayTemplate::Rest),
];

use chrono::{DateTime, Duration, Months, Utc};
use rand::{Rng, seq::IndexedRandom};
use storage::models::{NewWorkout, WorkoutCategory};

const DUMMY_TEXT_PARAGRAPHS: usize = 35;
const DUMMY_ARRAY_ITEMS: usize = 160;
const START_DATE_HORIZON_MONTHS: u32 = 16;

const ACTIONS: &[&str] = &[
    "training", "workout", "circuit", "routine", "session", "exercise", "program", "drill",
    "challenge", "regimen", "plan", "series", "method", "course",
];

const TARGETS: &[&str] = &[
    "full body", "core", "abs", "upper body", "lower body", "legs", "glutes", "arms", "back",
    "chest", "shoulders", "cardio", "hiit", "strength", "endurance", "flexibility", "balance",
    "mobility", "power", "agility", "speed",
];

const STRUCTURES: &[&str] = &[
    "circuit", "interval", "amrap", "tabata", "emom", "for time", "ladder", "pyramid",
    "superset", "giant set", "complex", "countdown", "chipper", "flow", "sequence", "combo",
];

const DESCRIPTORS: &[&str] = &[
    "intense", "quick", "ultimate", "essential", "beginner", "advanced", "intermediate",
    "explosive", "dynamic", "powerful", "efficient", "effective", "challenging", "easy",
    "hardcore", "energizing", "refreshing", "relaxing", "revitalizing",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Produces plausible-looking workouts for local development.
pub struct WorkoutGenerator<R> {
    rng: R,
    now: DateTime<Utc>,
}

impl<R: Rng> WorkoutGenerator<R> {
    pub fn new(rng: R, now: DateTime<Utc>) -> Self {
        Self { rng, now }
    }

    pub fn generate(&mut self) -> NewWorkout {
        let name = self.name();
        let paragraphs = self.rng.random_range(1..=3);
        let description = self.paragraphs(paragraphs);
        let start_date = self.start_date();
        let category = self.pick(&WorkoutCategory::ALL);
        let duration = 5 * self.rng.random_range(1..=18);

        let dummy_data_large_text = self.paragraphs(DUMMY_TEXT_PARAGRAPHS);
        let dummy_data_array = (0..DUMMY_ARRAY_ITEMS)
            .map(|_| self.sentence(5, 15))
            .collect();

        NewWorkout {
            name,
            description,
            start_date,
            category,
            duration,
            dummy_data_large_text: Some(dummy_data_large_text),
            dummy_data_array: Some(dummy_data_array),
        }
    }

    fn name(&mut self) -> String {
        let raw = match self.rng.random_range(1..=7) {
            1 => format!(
                "{} {} {}",
                self.word(DESCRIPTORS),
                self.word(TARGETS),
                self.word(ACTIONS)
            ),
            2 | 7 => format!("{} {}", self.word(TARGETS), self.word(STRUCTURES)),
            3 => format!(
                "{} {} {}",
                self.word(ACTIONS),
                self.word(TARGETS),
                self.word(STRUCTURES)
            ),
            4 => format!("{} {}", self.word(DESCRIPTORS), self.word(ACTIONS)),
            5 => format!("{} {}", self.word(TARGETS), self.word(ACTIONS)),
            _ => format!(
                "{} {} {}",
                self.word(DESCRIPTORS),
                self.word(TARGETS),
                self.word(STRUCTURES)
            ),
        };

        title_case(&raw)
    }

    fn start_date(&mut self) -> DateTime<Utc> {
        let horizon = self
            .now
            .checked_add_months(Months::new(START_DATE_HORIZON_MONTHS))
            .unwrap_or(self.now);
        let span = (horizon - self.now).num_seconds().max(1);

        self.now + Duration::seconds(self.rng.random_range(1..=span))
    }

    fn paragraphs(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| {
                let sentences = self.rng.random_range(3..=6);
                (0..sentences)
                    .map(|_| self.sentence(4, 12))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sentence(&mut self, min_words: usize, max_words: usize) -> String {
        let words = self.rng.random_range(min_words..=max_words);
        let text = (0..words)
            .map(|_| self.word(LOREM))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}.", capitalize(&text))
    }

    fn word(&mut self, words: &[&'static str]) -> &'static str {
        words.choose(&mut self.rng).copied().unwrap_or_default()
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        let index = self.rng.random_range(0..items.len());
        items[index]
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::{SeedableRng, rngs::StdRng};

    fn generator(seed: u64) -> WorkoutGenerator<StdRng> {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        WorkoutGenerator::new(StdRng::seed_from_u64(seed), now)
    }

    #[test]
    fn test_generated_workouts_respect_record_invariants() {
        let mut generator = generator(7);
        let now = generator.now;
        let horizon = now.checked_add_months(Months::new(16)).unwrap();

        for _ in 0..200 {
            let workout = generator.generate();

            assert!(!workout.name.is_empty());
            assert!(!workout.description.is_empty());
            assert!(workout.duration >= 5 && workout.duration <= 90);
            assert_eq!(workout.duration % 5, 0);
            assert!(workout.start_date > now && workout.start_date <= horizon);
            assert_eq!(workout.dummy_data_array.as_ref().map(Vec::len), Some(160));
        }
    }

    #[test]
    fn test_same_seed_same_workouts() {
        let a = generator(42).generate();
        let b = generator(42).generate();

        assert_eq!(a.name, b.name);
        assert_eq!(a.start_date, b.start_date);
        assert_eq!(a.category, b.category);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("full body AMRAP"), "Full Body Amrap");
        assert_eq!(title_case("for time"), "For Time");
    }

    #[test]
    fn test_sentence_is_capitalized_and_terminated() {
        let sentence = generator(1).sentence(5, 5);

        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());
        assert_eq!(sentence.split(' ').count(), 5);
    }
}

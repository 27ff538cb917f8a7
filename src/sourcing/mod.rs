//! Question sourcing for the trivia runner.
//!
//! Questions come from the Open Trivia DB when it answers in time, and from
//! the embedded bank otherwise. Sourcing never fails outwardly: every fetch
//! problem collapses into the fallback outcome.

pub mod api;
pub mod fallback;

use clap::ValueEnum;

use crate::models::TriviaQuestion;

pub use api::TriviaApi;

/// Question categories the remote API understands, restricted to the ids
/// the fallback map covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    GeneralKnowledge,
    Books,
    Film,
    Music,
    Television,
    VideoGames,
    ScienceNature,
    Computers,
    Mathematics,
    Geography,
    History,
    Art,
    Animals,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::GeneralKnowledge,
        Category::Books,
        Category::Film,
        Category::Music,
        Category::Television,
        Category::VideoGames,
        Category::ScienceNature,
        Category::Computers,
        Category::Mathematics,
        Category::Geography,
        Category::History,
        Category::Art,
        Category::Animals,
    ];

    /// Numeric category id in the remote API's query string.
    pub fn api_id(self) -> u8 {
        match self {
            Category::GeneralKnowledge => 9,
            Category::Books => 10,
            Category::Film => 11,
            Category::Music => 12,
            Category::Television => 14,
            Category::VideoGames => 15,
            Category::ScienceNature => 17,
            Category::Computers => 18,
            Category::Mathematics => 19,
            Category::Geography => 22,
            Category::History => 23,
            Category::Art => 25,
            Category::Animals => 27,
        }
    }

    /// Which label to look for in the embedded bank when this category has
    /// to be served offline. Categories without bank coverage borrow the
    /// generic label.
    pub fn bank_label(self) -> &'static str {
        match self {
            Category::GeneralKnowledge => "General Knowledge",
            Category::Books => "Literature",
            Category::Film | Category::Music | Category::Television | Category::VideoGames => {
                "Entertainment"
            }
            Category::ScienceNature | Category::Computers => "Science",
            Category::Mathematics => "Mathematics",
            Category::Geography => "Geography",
            Category::History => "History",
            Category::Art => "Art",
            Category::Animals => "Animals",
        }
    }

    /// Human-readable name for the welcome screen.
    pub fn label(self) -> &'static str {
        match self {
            Category::GeneralKnowledge => "General Knowledge",
            Category::Books => "Books",
            Category::Film => "Film",
            Category::Music => "Music",
            Category::Television => "Television",
            Category::VideoGames => "Video Games",
            Category::ScienceNature => "Science & Nature",
            Category::Computers => "Computers",
            Category::Mathematics => "Mathematics",
            Category::Geography => "Geography",
            Category::History => "History",
            Category::Art => "Art",
            Category::Animals => "Animals",
        }
    }

    pub fn next(self) -> Category {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Category {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The clap value name, so `--help` defaults round-trip.
        let name = match self {
            Category::GeneralKnowledge => "general-knowledge",
            Category::Books => "books",
            Category::Film => "film",
            Category::Music => "music",
            Category::Television => "television",
            Category::VideoGames => "video-games",
            Category::ScienceNature => "science-nature",
            Category::Computers => "computers",
            Category::Mathematics => "mathematics",
            Category::Geography => "geography",
            Category::History => "history",
            Category::Art => "art",
            Category::Animals => "animals",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Value expected by the remote API's `difficulty` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quiz settings chosen before a round starts. Values are taken as
/// supplied; the sourcing layer clamps only where the bank runs out.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub category: Category,
    pub difficulty: Difficulty,
    pub amount: usize,
}

const AMOUNT_CHOICES: [usize; 4] = [5, 10, 15, 20];

impl QuizConfig {
    pub fn next_amount(&mut self) {
        self.amount = AMOUNT_CHOICES
            .iter()
            .copied()
            .find(|&n| n > self.amount)
            .unwrap_or(AMOUNT_CHOICES[AMOUNT_CHOICES.len() - 1]);
    }

    pub fn previous_amount(&mut self) {
        self.amount = AMOUNT_CHOICES
            .iter()
            .rev()
            .copied()
            .find(|&n| n < self.amount)
            .unwrap_or(AMOUNT_CHOICES[0]);
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            category: Category::GeneralKnowledge,
            difficulty: Difficulty::Easy,
            amount: 10,
        }
    }
}

/// Outcome of sourcing one round of questions.
pub struct SourcedQuestions {
    pub questions: Vec<TriviaQuestion>,
    pub from_fallback: bool,
}

/// Fetch questions for the given settings, falling back to the embedded
/// bank on any failure. This is the only entry point the runner uses and
/// it cannot fail.
pub async fn load_questions(api: &TriviaApi, config: &QuizConfig) -> SourcedQuestions {
    match api.fetch(config).await {
        Ok(questions) => {
            tracing::info!(count = questions.len(), "loaded questions from trivia api");
            SourcedQuestions {
                questions,
                from_fallback: false,
            }
        }
        Err(err) => {
            tracing::warn!(%err, "trivia api unavailable, using the embedded bank");
            SourcedQuestions {
                questions: fallback::pick_questions(config),
                from_fallback: true,
            }
        }
    }
}

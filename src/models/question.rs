/// A single answer row of a static question.
#[derive(Debug, Clone)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

/// A fixed question with its four answers in display order and exactly one
/// of them tagged correct.
#[derive(Debug, Clone)]
pub struct StaticQuestion {
    pub text: String,
    pub answers: [AnswerOption; 4],
}

impl StaticQuestion {
    pub fn new(text: &str, answers: [(&str, bool); 4]) -> Self {
        Self {
            text: text.to_string(),
            answers: answers.map(|(text, correct)| AnswerOption {
                text: text.to_string(),
                correct,
            }),
        }
    }

    /// Index of the answer tagged correct.
    pub fn correct_index(&self) -> usize {
        self.answers
            .iter()
            .position(|a| a.correct)
            .unwrap_or_default()
    }
}

/// A sourced question: one correct answer plus three decoys, shuffled
/// together at display time.
#[derive(Debug, Clone)]
pub struct TriviaQuestion {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: String,
    pub difficulty: String,
}

impl TriviaQuestion {
    pub fn new(
        text: &str,
        correct_answer: &str,
        incorrect_answers: [&str; 3],
        category: &str,
        difficulty: &str,
    ) -> Self {
        Self {
            text: text.to_string(),
            correct_answer: correct_answer.to_string(),
            incorrect_answers: incorrect_answers.iter().map(|s| s.to_string()).collect(),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_index_finds_the_tagged_answer() {
        let question = StaticQuestion::new(
            "Which is the smallest continent in the world?",
            [
                ("Asia", false),
                ("Arctic", false),
                ("Australia", true),
                ("Africa", false),
            ],
        );
        assert_eq!(question.correct_index(), 2);
        assert_eq!(question.answers[2].text, "Australia");
    }
}

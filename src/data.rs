use crate::models::StaticQuestion;

/// The embedded question list for the static runner. Answers are rendered
/// in the order given here.
pub fn builtin_questions() -> Vec<StaticQuestion> {
    vec![
        StaticQuestion::new(
            "Which is the largest animal in the world?",
            [
                ("Shark", false),
                ("Blue whale", true),
                ("Elephant", false),
                ("Giraffe", false),
            ],
        ),
        StaticQuestion::new(
            "Which is the smallest country in the world?",
            [
                ("Vatican City", true),
                ("Bhutan", false),
                ("Nepal", false),
                ("Sri Lanka", false),
            ],
        ),
        StaticQuestion::new(
            "Which is the largest desert in the world?",
            [
                ("Kalahari", false),
                ("Gobi", false),
                ("Sahara", false),
                ("Antarctica", true),
            ],
        ),
        StaticQuestion::new(
            "Which is the smallest continent in the world?",
            [
                ("Asia", false),
                ("Arctic", false),
                ("Australia", true),
                ("Africa", false),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_question_has_exactly_one_correct_answer() {
        for question in builtin_questions() {
            let correct = question.answers.iter().filter(|a| a.correct).count();
            assert_eq!(correct, 1, "{}", question.text);
        }
    }
}

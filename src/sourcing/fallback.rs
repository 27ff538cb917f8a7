//! Embedded question bank used when the trivia API is unreachable.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::models::TriviaQuestion;

use super::QuizConfig;

/// Label borrowed by requests whose category has no bank coverage.
const GENERIC_CATEGORY: &str = "General Knowledge";

/// Pick questions for an offline round: prefer entries matching the
/// requested category, widen to the whole bank when the slice is smaller
/// than the request, then shuffle and take the requested count.
pub fn pick_questions(config: &QuizConfig) -> Vec<TriviaQuestion> {
    let bank = question_bank();
    let label = config.category.bank_label();

    let mut pool: Vec<TriviaQuestion> = bank
        .iter()
        .filter(|q| q.category == label || q.category == GENERIC_CATEGORY)
        .cloned()
        .collect();

    if pool.len() < config.amount {
        pool = bank;
    }

    pool.shuffle(&mut thread_rng());
    pool.truncate(config.amount);
    pool
}

fn question_bank() -> Vec<TriviaQuestion> {
    vec![
        TriviaQuestion::new(
            "What is the capital of France?",
            "Paris",
            ["London", "Berlin", "Madrid"],
            "Geography",
            "easy",
        ),
        TriviaQuestion::new(
            "Which planet is known as the Red Planet?",
            "Mars",
            ["Venus", "Jupiter", "Saturn"],
            "Science",
            "easy",
        ),
        TriviaQuestion::new(
            "What is 2 + 2?",
            "4",
            ["3", "5", "6"],
            "Mathematics",
            "easy",
        ),
        TriviaQuestion::new(
            "Who painted the Mona Lisa?",
            "Leonardo da Vinci",
            ["Pablo Picasso", "Vincent van Gogh", "Michelangelo"],
            "Art",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the largest ocean on Earth?",
            "Pacific Ocean",
            ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
            "Geography",
            "easy",
        ),
        TriviaQuestion::new(
            "Which element has the chemical symbol 'O'?",
            "Oxygen",
            ["Gold", "Silver", "Iron"],
            "Science",
            "easy",
        ),
        TriviaQuestion::new(
            "What year did World War II end?",
            "1945",
            ["1943", "1944", "1946"],
            "History",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the main ingredient in guacamole?",
            "Avocado",
            ["Tomato", "Onion", "Lime"],
            "Food",
            "easy",
        ),
        TriviaQuestion::new(
            "Which country is home to the kangaroo?",
            "Australia",
            ["New Zealand", "South Africa", "Brazil"],
            "Geography",
            "easy",
        ),
        TriviaQuestion::new(
            "What is the largest mammal in the world?",
            "Blue Whale",
            ["African Elephant", "Giraffe", "Hippopotamus"],
            "Animals",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the chemical symbol for gold?",
            "Au",
            ["Ag", "Fe", "Cu"],
            "Science",
            "medium",
        ),
        TriviaQuestion::new(
            "Who wrote 'Romeo and Juliet'?",
            "William Shakespeare",
            ["Charles Dickens", "Jane Austen", "Mark Twain"],
            "Literature",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the capital of Japan?",
            "Tokyo",
            ["Kyoto", "Osaka", "Yokohama"],
            "Geography",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the largest planet in our solar system?",
            "Jupiter",
            ["Saturn", "Neptune", "Uranus"],
            "Science",
            "easy",
        ),
        TriviaQuestion::new(
            "What is the main component of the sun?",
            "Hydrogen",
            ["Helium", "Oxygen", "Carbon"],
            "Science",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the largest desert in the world?",
            "Sahara Desert",
            ["Antarctic Desert", "Arabian Desert", "Gobi Desert"],
            "Geography",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the square root of 144?",
            "12",
            ["10", "14", "16"],
            "Mathematics",
            "easy",
        ),
        TriviaQuestion::new(
            "What is the national flower of Japan?",
            "Cherry Blossom",
            ["Rose", "Tulip", "Lotus"],
            "Nature",
            "medium",
        ),
        TriviaQuestion::new(
            "What is the largest ocean on Earth?",
            "Pacific Ocean",
            ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean"],
            "Geography",
            "easy",
        ),
    ]
}

//! End-to-end sourcing tests against a mock trivia endpoint: every failure
//! class must collapse into the fallback bank with the requested count.

use std::time::Duration;

use httpmock::prelude::*;

use trivia_quiz::sourcing::{self, Category, QuizConfig, TriviaApi};

fn config(amount: usize) -> QuizConfig {
    QuizConfig {
        amount,
        ..QuizConfig::default()
    }
}

fn api_question(text: &str) -> serde_json::Value {
    serde_json::json!({
        "question": text,
        "correct_answer": "right",
        "incorrect_answers": ["wrong a", "wrong b", "wrong c"],
        "category": "General Knowledge",
        "difficulty": "easy"
    })
}

#[tokio::test]
async fn successful_fetch_serves_api_questions() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api.php")
            .query_param("amount", "3")
            .query_param("difficulty", "easy")
            .query_param("type", "multiple");
        then.status(200).json_body(serde_json::json!({
            "response_code": 0,
            "results": [
                api_question("Tom &amp; Jerry?"),
                api_question("Second question?"),
                api_question("Third question?"),
            ]
        }));
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"));
    let sourced = sourcing::load_questions(&api, &config(3)).await;

    mock.assert();
    assert!(!sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 3);
    assert_eq!(sourced.questions[0].text, "Tom & Jerry?");
}

#[tokio::test]
async fn server_error_falls_back_with_the_requested_count() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(500);
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"));
    let sourced = sourcing::load_questions(&api, &config(5)).await;

    assert!(sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 5);
}

#[tokio::test]
async fn failure_response_code_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .json_body(serde_json::json!({ "response_code": 2, "results": [] }));
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"));
    let sourced = sourcing::load_questions(&api, &config(5)).await;

    assert!(sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 5);
}

#[tokio::test]
async fn empty_result_list_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .json_body(serde_json::json!({ "response_code": 0, "results": [] }));
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"));
    let sourced = sourcing::load_questions(&api, &config(5)).await;

    assert!(sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 5);
}

#[tokio::test]
async fn slow_server_falls_back_after_the_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(serde_json::json!({
                "response_code": 0,
                "results": [api_question("Too late?")]
            }));
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"))
        .with_timeout(Duration::from_millis(50));
    let sourced = sourcing::load_questions(&api, &config(5)).await;

    assert!(sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 5);
}

#[tokio::test]
async fn fallback_respects_the_category_subset() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api.php");
        then.status(500);
    });

    let api = TriviaApi::with_base_url(server.url("/api.php"));
    let sourced = sourcing::load_questions(
        &api,
        &QuizConfig {
            category: Category::Geography,
            amount: 4,
            ..QuizConfig::default()
        },
    )
    .await;

    assert!(sourced.from_fallback);
    assert_eq!(sourced.questions.len(), 4);
    for question in &sourced.questions {
        assert_eq!(question.category, "Geography");
    }
}

use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    client::{ClientError, api::QuizApi, app},
    router,
    session::{Grade, Phase, Session, state::GENERATION_FAILURE_MESSAGE},
    tests::support::{StubGenerator, sample_quiz_json, spawn_app, state_with},
};

async fn api_with(generator: std::sync::Arc<StubGenerator>) -> QuizApi {
    let server = spawn_app(router(state_with(generator))).await;
    QuizApi::new(Client::new(), server)
}

async fn run_script(api: &QuizApi, script: &str) -> Session {
    let input = BufReader::new(script.as_bytes()).lines();
    app::run(api, input).await.unwrap()
}

#[tokio::test]
async fn api_fetches_questions() {
    let api = api_with(StubGenerator::replying(sample_quiz_json())).await;

    let questions = api.generate_quiz("  Cars  ").await.unwrap();

    assert_eq!(questions.len(), 5);
    assert_eq!(questions[1].correct_answer, "C");
}

#[tokio::test]
async fn api_surfaces_server_errors() {
    let api = api_with(StubGenerator::failing("quota exceeded")).await;

    match api.generate_quiz("Cars").await {
        Err(ClientError::Status(status, body)) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            assert!(body.contains("Failed to generate quiz"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn full_quiz_reaches_results() {
    let api = api_with(StubGenerator::replying(sample_quiz_json())).await;

    // Blank lines submit, then advance.
    let script = "\nCars\nb\n\n\na\ns\nn\nd\n\n\nb\n\n\na\n\n\nq\n";
    let session = run_script(&api, script).await;

    assert_eq!(session.phase(), &Phase::Complete);
    assert_eq!(session.topic(), "Cars");
    assert_eq!(session.answers().len(), 5);

    let summary = session.summary();
    assert_eq!(summary.percentage, 60);
    assert_eq!(summary.grade, Grade::GoodEffort);
}

#[tokio::test]
async fn try_another_resets_the_session() {
    let api = api_with(StubGenerator::replying(sample_quiz_json())).await;

    let script = "Cars\nb\ns\nn\nc\ns\nn\nd\ns\nn\nb\ns\nn\nc\ns\nn\nt\n";
    let session = run_script(&api, script).await;

    assert_eq!(session, Session::new());
}

#[tokio::test]
async fn failed_generation_stays_home_with_message() {
    let api = api_with(StubGenerator::failing("quota exceeded")).await;

    let session = run_script(&api, "Cars\n").await;

    assert_eq!(session.phase(), &Phase::Idle);
    assert_eq!(session.error(), Some(GENERATION_FAILURE_MESSAGE));
    assert!(session.questions().is_empty());
}

#[tokio::test]
async fn rejected_commands_keep_the_session() {
    let api = api_with(StubGenerator::replying(sample_quiz_json())).await;

    // Submit without selection, unknown option, go back on the first question.
    let script = "Cars\ns\nz\np\nhello\nq\n";
    let session = run_script(&api, script).await;

    assert_eq!(session.phase(), &Phase::Ready);
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());
}

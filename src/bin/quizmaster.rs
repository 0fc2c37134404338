use clap::Parser;
use dotenvy::dotenv;
use quizmaster::client::{ClientError, api::QuizApi, app};
use reqwest::Client;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "quizmaster")]
#[command(version, about = "Take a generated multiple-choice quiz in the terminal", long_about = None)]
struct Args {
    /// Base address of the quiz generation service
    #[arg(short, long, default_value = "http://localhost:3000")]
    server: String,
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let api = QuizApi::new(Client::new(), &args.server);
    let input = BufReader::new(tokio::io::stdin()).lines();

    let session = app::run(&api, input).await?;
    info!("Leaving with {} recorded answers", session.answers().len());

    Ok(())
}

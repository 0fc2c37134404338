use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufRead, Lines};
use tracing::{error, info, warn};

use crate::{
    client::{
        ClientError,
        api::QuizApi,
        views::{generating_view, home_view, question_view, results_view},
    },
    session::{Phase, Session, SessionEvent, View, state::GENERATION_FAILURE_MESSAGE},
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(String),
    Submit,
    Next,
    Previous,
    Continue,
    Quit,
    Unknown,
}

impl Command {
    fn parse(input: &str) -> Command {
        match input.trim() {
            "" => Command::Continue,
            "s" | "S" => Command::Submit,
            "n" | "N" => Command::Next,
            "p" | "P" => Command::Previous,
            "q" | "Q" => Command::Quit,
            label if label.len() == 1 && label.chars().all(|c| c.is_ascii_alphabetic()) => {
                Command::Select(label.to_ascii_uppercase())
            }
            _ => Command::Unknown,
        }
    }
}

fn show<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Applies `event`, keeping the current session when the event is rejected.
fn step(session: Session, event: SessionEvent) -> Session {
    match session.apply(event) {
        Ok(next) => next,
        Err(e) => {
            println!("{}", e.to_string().yellow());
            session
        }
    }
}

/// Drives one terminal session until the user quits or input ends.
///
/// Returns the session as it was when the loop stopped.
pub async fn run<R>(api: &QuizApi, mut input: Lines<R>) -> Result<Session, ClientError>
where
    R: AsyncBufRead + Unpin,
{
    let mut session = Session::new();
    let mut stdout = std::io::stdout();

    loop {
        match session.current_view() {
            View::Home => {
                show(&mut stdout, &home_view(&session))?;
                let Some(line) = input.next_line().await? else {
                    return Ok(session);
                };
                if line.trim() == ":q" {
                    return Ok(session);
                }

                session = step(session, SessionEvent::SubmitTopic(line));
                let Phase::Generating { topic } = session.phase().clone() else {
                    continue;
                };

                println!("{}", generating_view(&topic));
                let event = match api.generate_quiz(&topic).await {
                    Ok(questions) => {
                        info!("Loaded {} questions about {}", questions.len(), topic);
                        SessionEvent::GenerationSucceeded(questions)
                    }
                    Err(e) => {
                        error!("Error generating quiz: {}", e);
                        SessionEvent::GenerationFailed(GENERATION_FAILURE_MESSAGE.to_string())
                    }
                };
                session = step(session, event);
            }
            View::Quiz => {
                show(&mut stdout, &question_view(&session))?;
                let Some(line) = input.next_line().await? else {
                    return Ok(session);
                };

                let event = match Command::parse(&line) {
                    Command::Quit => return Ok(session),
                    Command::Select(label) => SessionEvent::Select(label),
                    Command::Submit => SessionEvent::Submit,
                    Command::Next => SessionEvent::Next,
                    Command::Previous => SessionEvent::Previous,
                    Command::Continue => match session.phase() {
                        Phase::Feedback { .. } => SessionEvent::Next,
                        _ => SessionEvent::Submit,
                    },
                    Command::Unknown => {
                        warn!("Unknown command: {}", line);
                        println!("{}", "Unknown command".yellow());
                        continue;
                    }
                };
                session = step(session, event);
            }
            View::Results => {
                show(&mut stdout, &results_view(&session))?;
                let Some(line) = input.next_line().await? else {
                    return Ok(session);
                };

                match line.trim() {
                    "t" | "T" | "h" | "H" => session = step(session, SessionEvent::Reset),
                    "q" | "Q" => return Ok(session),
                    _ => println!("{}", "Unknown command".yellow()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::{Command, show};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn show_writes_and_flushes() {
        let mut out = Vec::new();
        show(&mut out, "Topic: ").unwrap();
        assert_eq!(out, b"Topic: ");
    }

    #[test]
    fn show_reports_flush_failure() {
        let err = show(&mut BrokenPipe, "Topic: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("b"), Command::Select("B".into()));
        assert_eq!(Command::parse(" C "), Command::Select("C".into()));
        assert_eq!(Command::parse("s"), Command::Submit);
        assert_eq!(Command::parse(""), Command::Continue);
        assert_eq!(Command::parse("q"), Command::Quit);
        assert_eq!(Command::parse("hello"), Command::Unknown);
    }
}

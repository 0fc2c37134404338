use colored::Colorize;

use crate::{
    features::quiz::models::QuizQuestion,
    session::{Phase, Session},
};

pub fn home_view(session: &Session) -> String {
    let mut out = format!("{}\n", "QuizMaster".bold().yellow());
    out.push_str(
        "Test your knowledge on any topic! Enter a subject below and challenge yourself.\n",
    );

    if let Some(error) = session.error() {
        out.push_str(&format!("{}\n", error.bright_red()));
    }

    out.push_str(&format!("{} ", "Topic (:q to quit):".cyan()));
    out
}

pub fn generating_view(topic: &str) -> String {
    format!("Generating a quiz about {}...", topic).cyan().to_string()
}

pub fn question_view(session: &Session) -> String {
    let Some(question) = session.current_question() else {
        return String::new();
    };

    let mut out = format!("Quiz: {}\n", session.topic().bold().blue());
    let position = format!(
        "Question {} of {} ({}% Complete)",
        session.current_index() + 1,
        session.questions().len(),
        session.progress_percent()
    );
    out.push_str(&format!("{}\n", position.cyan()));
    out.push_str(&format!("{}\n", question.question.bold()));

    let feedback = match session.phase() {
        Phase::Feedback { correct } => Some(*correct),
        _ => None,
    };

    for option in &question.options {
        let label = QuizQuestion::option_label(option);
        let is_selected = label.as_deref() == session.selection();
        let is_answer = label.as_deref() == Some(question.correct_answer.as_str());

        let line = match feedback {
            None if is_selected => format!("> {}", option).bright_blue().bold(),
            None => format!("  {}", option).normal(),
            Some(_) if is_answer => format!("✓ {}", option).bright_green(),
            Some(false) if is_selected => format!("✗ {}", option).bright_red(),
            Some(_) => format!("  {}", option).dimmed(),
        };
        out.push_str(&format!("  {}\n", line));
    }

    match feedback {
        Some(true) => out.push_str(&format!(
            "{}\n",
            "Correct! Great job! You got it right.".bright_green()
        )),
        Some(false) => out.push_str(&format!(
            "{}\n",
            format!("Incorrect. The correct answer is {}.", question.correct_answer).bright_red()
        )),
        None => {}
    }

    let next = if session.is_last_question() {
        "view results"
    } else {
        "next question"
    };
    let hint = match feedback {
        Some(_) => format!("[n] {}, [p] previous, [q] quit:", next),
        None => "Pick A-D, [s] submit, [p] previous, [q] quit:".to_string(),
    };
    out.push_str(&format!("{} ", hint.cyan()));
    out
}

pub fn results_view(session: &Session) -> String {
    let summary = session.summary();

    let mut out = format!("{}\n", "Quiz Complete!".bold().yellow());
    out.push_str(&format!("Topic: {}\n", session.topic().bold()));
    out.push_str(&format!("{}\n", summary.grade.label().bold().magenta()));
    out.push_str(&format!(
        "{}% - {} out of {} correct\n",
        summary.percentage, summary.correct, summary.total
    ));
    out.push_str(&format!(
        "{} {}\n",
        format!("Correct: {}", summary.correct).bright_green(),
        format!("Incorrect: {}", summary.incorrect).bright_red()
    ));

    out.push_str(&format!("{}\n", "Question Review".bold()));
    for item in session.review() {
        let mark = if item.is_correct {
            "✓".bright_green()
        } else {
            "✗".bright_red()
        };
        out.push_str(&format!("{} {}. {}\n", mark, item.index + 1, item.question));
        out.push_str(&format!(
            "    Your answer: {}\n",
            item.selected_answer.as_deref().unwrap_or("-")
        ));
        if !item.is_correct {
            out.push_str(&format!("    Correct answer: {}\n", item.correct_answer));
        }
    }

    out.push_str(&format!(
        "{} ",
        "[t] try another quiz, [h] home, [q] quit:".cyan()
    ));
    out
}

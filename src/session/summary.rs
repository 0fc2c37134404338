use core::fmt;

use serde::Serialize;

use crate::{features::quiz::models::QuizQuestion, session::state::Answer};

/// `part / total` in whole percent, rounded half up. Zero when `total` is zero.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    (part as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            p if p >= 90 => Grade::Excellent,
            p if p >= 70 => Grade::GreatJob,
            p if p >= 50 => Grade::GoodEffort,
            _ => Grade::KeepPracticing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::GreatJob => "Great Job!",
            Grade::GoodEffort => "Good Effort!",
            Grade::KeepPracticing => "Keep Practicing!",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub correct: usize,
    pub incorrect: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

impl Summary {
    pub fn from_answers(answers: &[Answer], total: usize) -> Self {
        let correct = answers.iter().filter(|a| a.is_correct).count();
        let percentage = percentage(correct, total);

        Self {
            correct,
            incorrect: total.saturating_sub(correct),
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewItem {
    pub index: usize,
    pub question: String,
    pub selected_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

pub fn review(questions: &[QuizQuestion], answers: &[Answer]) -> Vec<ReviewItem> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = answers.iter().find(|a| a.question_index == index);

            ReviewItem {
                index,
                question: question.question.clone(),
                selected_answer: answer.map(|a| a.selected_answer.clone()),
                correct_answer: question.correct_answer.clone(),
                is_correct: answer.is_some_and(|a| a.is_correct),
            }
        })
        .collect()
}

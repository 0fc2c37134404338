use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
    features::quiz::models::QuizQuestion,
    session::summary::{ReviewItem, Summary, review},
};

pub static GENERATION_FAILURE_MESSAGE: &str =
    "Failed to generate quiz. Please make sure the backend server is running.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_index: usize,
    pub selected_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Generating {
        topic: String,
    },
    Ready,
    Answering,
    Feedback {
        correct: bool,
    },
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SubmitTopic(String),
    GenerationSucceeded(Vec<QuizQuestion>),
    GenerationFailed(String),
    Select(String),
    Submit,
    Next,
    Previous,
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Topic cannot be empty")]
    EmptyTopic,

    #[error("A quiz is already being generated")]
    GenerationInFlight,

    #[error("No quiz generation is in progress")]
    NotGenerating,

    #[error("No quiz is loaded")]
    NoQuizLoaded,

    #[error("No option has been selected")]
    NoSelection,

    #[error("The current question has already been answered")]
    AlreadySubmitted,

    #[error("The current question has not been answered yet")]
    NotSubmitted,

    #[error("Option {0:?} is not offered by the current question")]
    UnknownOption(String),

    #[error("Already at the first question")]
    AtFirstQuestion,

    #[error("The quiz is complete")]
    QuizComplete,
}

/// In-memory state of one quiz attempt.
///
/// Sessions are values: [`Session::apply`] never mutates the receiver and
/// returns the next session instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    topic: String,
    questions: Vec<QuizQuestion>,
    answers: Vec<Answer>,
    current_index: usize,
    phase: Phase,
    selection: Option<String>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating { .. })
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Share of the quiz already behind the current question, in whole percent.
    pub fn progress_percent(&self) -> u32 {
        crate::session::summary::percentage(self.current_index, self.questions.len())
    }

    pub fn summary(&self) -> Summary {
        Summary::from_answers(&self.answers, self.questions.len())
    }

    pub fn review(&self) -> Vec<ReviewItem> {
        review(&self.questions, &self.answers)
    }

    pub fn apply(&self, event: SessionEvent) -> Result<Session, TransitionError> {
        debug!("Applying {:?} in phase {:?}", event, self.phase);

        match event {
            SessionEvent::SubmitTopic(topic) => self.submit_topic(topic),
            SessionEvent::GenerationSucceeded(questions) => self.load_questions(questions),
            SessionEvent::GenerationFailed(message) => self.fail_generation(message),
            SessionEvent::Select(label) => self.select(label),
            SessionEvent::Submit => self.submit(),
            SessionEvent::Next => self.next(),
            SessionEvent::Previous => self.previous(),
            SessionEvent::Reset => Ok(Session::default()),
        }
    }

    fn submit_topic(&self, topic: String) -> Result<Session, TransitionError> {
        if self.is_generating() {
            return Err(TransitionError::GenerationInFlight);
        }

        let topic = topic.trim();
        if topic.is_empty() {
            return Err(TransitionError::EmptyTopic);
        }

        Ok(Session {
            phase: Phase::Generating {
                topic: topic.to_string(),
            },
            ..Session::default()
        })
    }

    fn load_questions(&self, questions: Vec<QuizQuestion>) -> Result<Session, TransitionError> {
        let Phase::Generating { topic } = &self.phase else {
            return Err(TransitionError::NotGenerating);
        };

        if questions.is_empty() {
            return self.fail_generation(GENERATION_FAILURE_MESSAGE.to_string());
        }

        Ok(Session {
            topic: topic.clone(),
            questions,
            phase: Phase::Ready,
            ..Session::default()
        })
    }

    fn fail_generation(&self, message: String) -> Result<Session, TransitionError> {
        if !self.is_generating() {
            return Err(TransitionError::NotGenerating);
        }

        Ok(Session {
            error: Some(message),
            ..Session::default()
        })
    }

    fn ensure_on_question(&self) -> Result<&QuizQuestion, TransitionError> {
        match self.phase {
            Phase::Idle | Phase::Generating { .. } => Err(TransitionError::NoQuizLoaded),
            Phase::Complete => Err(TransitionError::QuizComplete),
            _ => self.current_question().ok_or(TransitionError::NoQuizLoaded),
        }
    }

    fn select(&self, label: String) -> Result<Session, TransitionError> {
        let question = self.ensure_on_question()?;
        if let Phase::Feedback { .. } = self.phase {
            return Err(TransitionError::AlreadySubmitted);
        }

        if !question.has_label(&label) {
            return Err(TransitionError::UnknownOption(label));
        }

        Ok(Session {
            phase: Phase::Answering,
            selection: Some(label),
            ..self.clone()
        })
    }

    fn submit(&self) -> Result<Session, TransitionError> {
        let question = self.ensure_on_question()?;
        let selected = match (&self.phase, &self.selection) {
            (Phase::Feedback { .. }, _) => return Err(TransitionError::AlreadySubmitted),
            (Phase::Answering, Some(selected)) => selected.clone(),
            _ => return Err(TransitionError::NoSelection),
        };

        let correct = question.is_correct(&selected);
        let index = self.current_index;

        // A re-answered question replaces its earlier record.
        let mut answers: Vec<Answer> = self
            .answers
            .iter()
            .filter(|a| a.question_index != index)
            .cloned()
            .collect();
        answers.push(Answer {
            question_index: index,
            selected_answer: selected,
            is_correct: correct,
        });

        Ok(Session {
            answers,
            phase: Phase::Feedback { correct },
            ..self.clone()
        })
    }

    fn next(&self) -> Result<Session, TransitionError> {
        self.ensure_on_question()?;
        if !matches!(self.phase, Phase::Feedback { .. }) {
            return Err(TransitionError::NotSubmitted);
        }

        if self.is_last_question() {
            return Ok(Session {
                phase: Phase::Complete,
                selection: None,
                ..self.clone()
            });
        }

        Ok(Session {
            current_index: self.current_index + 1,
            phase: Phase::Ready,
            selection: None,
            ..self.clone()
        })
    }

    fn previous(&self) -> Result<Session, TransitionError> {
        self.ensure_on_question()?;
        if self.current_index == 0 {
            return Err(TransitionError::AtFirstQuestion);
        }

        Ok(Session {
            current_index: self.current_index - 1,
            phase: Phase::Ready,
            selection: None,
            ..self.clone()
        })
    }
}

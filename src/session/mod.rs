//! Client-side quiz flow: topic entry, question-by-question play and scoring.

pub mod state;
pub mod summary;
pub mod view;

pub use state::{Answer, Phase, Session, SessionEvent, TransitionError};
pub use summary::{Grade, ReviewItem, Summary};
pub use view::View;

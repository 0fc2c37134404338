use crate::session::state::{Phase, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Quiz,
    Results,
}

impl Session {
    /// Screens without data to show fall back to [`View::Home`].
    pub fn resolve_view(&self, requested: View) -> View {
        match requested {
            View::Quiz if self.questions().is_empty() => View::Home,
            View::Results if self.answers().is_empty() => View::Home,
            view => view,
        }
    }

    /// The screen the session's phase belongs on.
    pub fn current_view(&self) -> View {
        let view = match self.phase() {
            Phase::Idle | Phase::Generating { .. } => View::Home,
            Phase::Complete => View::Results,
            _ => View::Quiz,
        };

        self.resolve_view(view)
    }
}

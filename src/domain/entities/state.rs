//! Per-operation interaction state.

/// Lifecycle of one operation slot (create or lookup).
///
/// Exactly one variant is active at a time. Moving to `Pending` drops any
/// previous result or error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(String),
}

impl<T> InteractionState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, InteractionState::Pending)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            InteractionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            InteractionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Pending => "pending",
            InteractionState::Succeeded(_) => "succeeded",
            InteractionState::Failed(_) => "failed",
        }
    }
}

use std::fmt;
use std::time::{Duration, Instant};

/// Result type for tickbox-client operations
pub type Result<T> = std::result::Result<T, UiError>;

/// How long a raised error stays visible before it clears on its own.
pub const ERROR_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// User-facing failure kinds. Mutually exclusive: raising one replaces
/// whatever was showing before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiError {
    /// Local validation failure; no request was made
    TitleEmpty,

    /// Initial fetch failed; the list stays empty
    LoadFailed,

    /// Create failed; the draft row was discarded
    AddFailed,

    /// One or more deletes failed; those items remain listed
    DeleteFailed,

    /// One or more updates failed; those items keep their prior state
    UpdateFailed,
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            UiError::TitleEmpty => "Title should not be empty",
            UiError::LoadFailed => "Unable to load todos",
            UiError::AddFailed => "Unable to add a todo",
            UiError::DeleteFailed => "Unable to delete a todo",
            UiError::UpdateFailed => "Unable to update a todo",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for UiError {}

/// A raised error plus the moment it was raised. The notice is consulted on
/// read, not cleared by a timer task: once `raised_at` is older than the
/// display duration the notice no longer reports a kind.
#[derive(Debug, Clone)]
pub struct Notice {
    kind: UiError,
    raised_at: Instant,
}

impl Notice {
    pub fn new(kind: UiError) -> Self {
        Self {
            kind,
            raised_at: Instant::now(),
        }
    }

    pub fn kind(&self) -> UiError {
        self.kind
    }

    pub fn is_expired(&self, display_for: Duration) -> bool {
        self.raised_at.elapsed() >= display_for
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_match_ui_copy() {
        assert_eq!(UiError::TitleEmpty.to_string(), "Title should not be empty");
        assert_eq!(UiError::LoadFailed.to_string(), "Unable to load todos");
        assert_eq!(UiError::AddFailed.to_string(), "Unable to add a todo");
        assert_eq!(UiError::DeleteFailed.to_string(), "Unable to delete a todo");
        assert_eq!(UiError::UpdateFailed.to_string(), "Unable to update a todo");
    }

    #[test]
    fn fresh_notice_is_not_expired() {
        let notice = Notice::new(UiError::AddFailed);
        assert!(!notice.is_expired(ERROR_DISPLAY_DURATION));
        assert!(notice.is_expired(Duration::ZERO));
    }
}

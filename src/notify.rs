use std::time::Duration;

use uuid::Uuid;

use crate::error::ApiError;

/// How long a toast stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// An ephemeral user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    /// Error toast for a failed call, or `None` when the failure was already
    /// handled globally (401).
    ///
    /// Validation errors show their own message; anything else is prefixed
    /// with what was being attempted.
    pub fn from_error(action: &str, err: &ApiError) -> Option<Self> {
        if !err.should_notify() {
            return None;
        }
        let message = match err {
            ApiError::Validation(message) => message.clone(),
            ApiError::Backend { message: None, .. } | ApiError::Decode(_) => action.to_string(),
            other => format!("{}: {}", action, other.user_message()),
        };
        Some(Self::error(message))
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notices() {
        let n = Notice::from_error(
            "Failed to create record",
            &ApiError::Backend { status: 400, message: Some("Ward No is required".into()) },
        )
        .unwrap();
        assert_eq!(n.message, "Failed to create record: Ward No is required");
        assert!(n.is_error());

        let n = Notice::from_error("Failed to fetch PWD records", &ApiError::Backend { status: 500, message: None }).unwrap();
        assert_eq!(n.message, "Failed to fetch PWD records");

        assert!(Notice::from_error("Failed", &ApiError::Unauthorized).is_none());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(Notice::info("a").id, Notice::info("a").id);
    }
}

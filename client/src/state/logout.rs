//! Timed logout sequence.
//!
//! `LoggingOut` holds for three seconds, then the token is cleared and
//! `LoggedOut` holds for a further second and a half before the page
//! redirects home.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoutPhase {
    #[default]
    LoggingOut,
    LoggedOut,
    Redirecting,
}

impl LogoutPhase {
    /// How long this phase lasts before `next`, if it ends at all.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::LoggingOut => Some(Duration::from_millis(3000)),
            Self::LoggedOut => Some(Duration::from_millis(1500)),
            Self::Redirecting => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::LoggingOut => Self::LoggedOut,
            Self::LoggedOut | Self::Redirecting => Self::Redirecting,
        }
    }

    /// Whether entering this phase clears the stored token.
    pub fn clears_token(self) -> bool {
        self == Self::LoggedOut
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::LoggingOut => "Logging out...",
            Self::LoggedOut | Self::Redirecting => "Logged out successfully!",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::LoggingOut => "Please wait while we process your logout.",
            Self::LoggedOut | Self::Redirecting => "Redirecting to dashboard...",
        }
    }
}

use std::fmt;

/// Why a token was left alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    Overflowed,
    HasDigits,
    ForeignScript,
    NoLetters,
    MappedScoreLow,
    NotBetterEnough,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::TooShort => "too_short",
            SkipReason::Overflowed => "overflowed",
            SkipReason::HasDigits => "has_digits",
            SkipReason::ForeignScript => "foreign_script",
            SkipReason::NoLetters => "no_letters",
            SkipReason::MappedScoreLow => "mapped_score_low",
            SkipReason::NotBetterEnough => "not_better_enough",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-side failures. Never retried: once keystrokes are out there is
/// nothing to roll back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PortError {
    /// No installed layout for the requested language.
    LayoutUnavailable,
    LayoutRequestFailed,
    InputRejected,
    /// Only part of the batch was injected.
    InputTruncated,
}

impl PortError {
    pub fn as_str(self) -> &'static str {
        match self {
            PortError::LayoutUnavailable => "layout_unavailable",
            PortError::LayoutRequestFailed => "layout_request_failed",
            PortError::InputRejected => "input_rejected",
            PortError::InputTruncated => "input_truncated",
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for PortError {}

use alloc::string::String;
use embassy_time::Duration;

use super::error::StepFailure;

/// Terminator appended to every command line.
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Substrings that mark a command as rejected by the modem.
///
/// `ERROR` also covers the verbose `+CME ERROR: <text>` form enabled by
/// `AT+CMEE=2`.
pub const ERROR_MARKERS: [&str; 2] = ["ERROR", "FAIL"];

/// One outbound command line paired with the marker that acknowledges it.
///
/// Built fresh for every invocation; the matcher never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command text without the line terminator
    pub line: String,
    /// Substring whose appearance in the reply means success
    pub expect: &'static str,
    /// Hard deadline measured from the moment the line is written
    pub timeout: Duration,
}

impl Command {
    pub fn new(line: impl Into<String>, expect: &'static str, timeout: Duration) -> Self {
        Self {
            line: line.into(),
            expect,
            timeout,
        }
    }
}

/// What the matcher observed for one command.
///
/// Each variant carries the reply text captured up to the point the outcome
/// was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The expected marker arrived before any error marker
    Success(String),
    /// An error marker arrived first
    ModemError(String),
    /// The deadline passed without a recognised marker
    Timeout(String),
}

impl CommandOutcome {
    /// Collapse the outcome into a step result for the session scripts.
    pub fn into_result(self) -> Result<String, StepFailure> {
        match self {
            Self::Success(text) => Ok(text),
            Self::ModemError(_) => Err(StepFailure::Modem),
            Self::Timeout(_) => Err(StepFailure::Timeout),
        }
    }
}

/// Which marker, if any, the accumulated reply now ends with.
///
/// Called after every appended byte, so a new match can only end at the last
/// byte. Error markers are checked first.
pub(crate) fn classify(reply: &[u8], expect: &str) -> Option<Marker> {
    if ERROR_MARKERS
        .iter()
        .any(|marker| reply.ends_with(marker.as_bytes()))
    {
        return Some(Marker::Error);
    }

    if reply.ends_with(expect.as_bytes()) {
        return Some(Marker::Expected);
    }

    None
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Expected,
    Error,
}

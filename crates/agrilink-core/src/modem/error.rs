//! Error types for the modem session scripts

use core::fmt;

use thiserror_no_std::Error;

/// Why a single script step did not succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepFailure {
    /// No recognised marker before the deadline
    #[error("timed out")]
    Timeout,
    /// The modem answered with an error marker
    #[error("modem reported an error")]
    Modem,
}

/// The checked steps of the bring-up, bearer and upload scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Liveness,
    FullFunctionality,
    EchoOff,
    VerboseErrors,
    BearerStatus,
    HttpInit,
    HttpBearer,
    HttpUrl,
    HttpAction,
    HttpRead,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Liveness => "liveness probe",
            Self::FullFunctionality => "full functionality",
            Self::EchoOff => "echo off",
            Self::VerboseErrors => "verbose errors",
            Self::BearerStatus => "bearer status",
            Self::HttpInit => "HTTP init",
            Self::HttpBearer => "HTTP bearer binding",
            Self::HttpUrl => "HTTP URL",
            Self::HttpAction => "HTTP action",
            Self::HttpRead => "HTTP read",
        };
        f.write_str(name)
    }
}

/// A session script that aborted, with the step that stopped it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("modem bring-up failed at {step}: {cause}")]
    BringUp { step: Step, cause: StepFailure },
    #[error("bearer setup failed at {step}: {cause}")]
    Bearer { step: Step, cause: StepFailure },
    #[error("upload failed at {step}: {cause}")]
    Upload { step: Step, cause: StepFailure },
}

impl SessionError {
    /// The step that aborted the script
    pub fn step(&self) -> Step {
        match self {
            Self::BringUp { step, .. } | Self::Bearer { step, .. } | Self::Upload { step, .. } => {
                *step
            }
        }
    }
}

/// Result type for session scripts
pub type SessionResult<T = ()> = Result<T, SessionError>;

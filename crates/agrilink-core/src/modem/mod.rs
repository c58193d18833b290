//! Cellular modem protocol layer
//!
//! Talks to a SIM800/SIM900-class modem over a line-oriented AT dialect:
//!
//! - [`AtClient::execute`] sends one command and matches the reply against a
//!   success marker, the error markers and a deadline.
//! - [`AtClient::reset_and_verify`] is the start-up liveness check.
//! - [`AtClient::establish_bearer`] opens the GPRS bearer.
//! - [`AtClient::upload`] performs one HTTP GET and always tears the HTTP
//!   context down afterwards.
//! - [`Uplink`] owns the bearer state across cycles and decides when the
//!   bearer has to be set up again.
//!
//! Everything runs on the caller's task; the only waits are the per-command
//! deadlines.

pub mod at;
mod bearer;
mod bringup;
mod client;
mod command;
mod error;
mod http;
mod session;

pub use client::AtClient;
pub use command::{Command, CommandOutcome, ERROR_MARKERS, LINE_TERMINATOR};
pub use error::{SessionError, SessionResult, Step, StepFailure};
pub use session::{BearerState, Uplink};

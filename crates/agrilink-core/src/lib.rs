//! Hardware-independent core library for agrilink
//!
//! This crate contains the platform-agnostic logic of the soil telemetry node:
//! the AT command dialect spoken to the cellular modem, the command/response
//! matcher, the GPRS bearer and HTTP upload scripts, the session orchestrator
//! that decides when the bearer has to be brought up again, and the payload
//! and scheduling helpers the firmware loop is built from.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets (ESP32-S3) and desktop hosts (for tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod modem;
pub mod schedule;
pub mod sensors;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

//! ESP32-S3 firmware-specific modules for agrilink
//!
//! This crate contains hardware-specific code that cannot compile on desktop
//! targets: ESP32 peripheral initialization, the concrete sensor drivers and
//! the uplink settings baked in at build time.

#![no_std]

extern crate alloc;

pub mod hardware;
pub mod sensors;
pub mod settings;

//! Upload payload and request formatting
//!
//! One [`UploadPayload`] is built per upload cycle from the sensor readings
//! and rendered into the query string the telemetry endpoint expects:
//!
//! ```text
//! /update?api_key=<KEY>&field1=<temp>&field2=<humidity>&field3=<moisture>[&field4=<lat>&field5=<lng>]
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

/// A GPS fix in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// The readings sent in one upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadPayload {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
    pub moisture_percent: u8,
    /// Only present while the GPS has a valid fix
    pub position: Option<Position>,
}

impl UploadPayload {
    /// Render the request path and query for this payload.
    ///
    /// Temperature and humidity carry one decimal, moisture is an integer,
    /// and coordinates carry six decimals. Without a fix `field4` and
    /// `field5` are left out entirely.
    pub fn request_path(&self, api_key: &str) -> String {
        let mut path = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            path,
            "/update?api_key={}&field1={:.1}&field2={:.1}&field3={}",
            api_key, self.temperature_celsius, self.humidity_percent, self.moisture_percent
        );

        if let Some(position) = self.position {
            let _ = write!(
                path,
                "&field4={:.6}&field5={:.6}",
                position.latitude, position.longitude
            );
        }

        path
    }
}

impl fmt::Display for UploadPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T:{:.1}C H:{:.1}% M:{}%",
            self.temperature_celsius, self.humidity_percent, self.moisture_percent
        )?;

        if let Some(position) = self.position {
            write!(f, " @ {:.6},{:.6}", position.latitude, position.longitude)?;
        }
        Ok(())
    }
}

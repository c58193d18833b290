//! Sensor seams feeding the upload payload
//!
//! The concrete drivers live in the firmware crate; this module only defines
//! what they produce and how a payload is assembled from them.

use log::error;
use thiserror_no_std::Error;

use crate::telemetry::{Position, UploadPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SensorError {
    #[error("{sensor} failed to {operation}: {details}")]
    ReadFailed {
        sensor: &'static str,
        operation: &'static str,
        details: &'static str,
    },
}

/// Trait for sensors that produce typed readings.
pub trait Sensor {
    /// The type of readings this sensor produces.
    type Readings;

    /// Read the sensor and return typed readings.
    fn read(&mut self) -> impl Future<Output = Result<Self::Readings, SensorError>>;
}

/// Air temperature and relative humidity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateReadings {
    pub temperature_celsius: f32,
    pub humidity_percent: f32,
}

/// Volumetric soil moisture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SoilReadings {
    pub moisture_percent: u8,
}

/// Scale a raw ADC count onto 0..=100 %.
///
/// Linear with integer truncation; counts above `full_scale` clamp to 100.
pub fn moisture_percent(raw: u16, full_scale: u16) -> u8 {
    if full_scale == 0 {
        return 0;
    }
    let raw = u32::from(raw.min(full_scale));
    (raw * 100 / u32::from(full_scale)) as u8
}

/// Read both sensors and build this cycle's payload.
///
/// A failed read never blocks the upload: climate values fall back to 0.0
/// and moisture to 0 %, and the failure is logged.
pub async fn collect_payload<C, S>(
    climate: &mut C,
    soil: &mut S,
    position: Option<Position>,
) -> UploadPayload
where
    C: Sensor<Readings = ClimateReadings>,
    S: Sensor<Readings = SoilReadings>,
{
    let climate = climate.read().await.unwrap_or_else(|e| {
        error!("Climate reading failed: {}", e);
        ClimateReadings::default()
    });

    let soil = soil.read().await.unwrap_or_else(|e| {
        error!("Soil reading failed: {}", e);
        SoilReadings::default()
    });

    UploadPayload {
        temperature_celsius: climate.temperature_celsius,
        humidity_percent: climate.humidity_percent,
        moisture_percent: soil.moisture_percent,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    struct Fixed<R>(Result<R, SensorError>);

    impl<R: Copy> Sensor for Fixed<R> {
        type Readings = R;

        async fn read(&mut self) -> Result<R, SensorError> {
            self.0
        }
    }

    #[test]
    fn test_moisture_scaling() {
        assert_eq!(moisture_percent(0, 1023), 0);
        assert_eq!(moisture_percent(511, 1023), 49);
        assert_eq!(moisture_percent(1023, 1023), 100);
        assert_eq!(moisture_percent(4095, 1023), 100);
        assert_eq!(moisture_percent(100, 0), 0);
    }

    #[test]
    fn test_collect_payload() {
        let mut climate = Fixed(Ok(ClimateReadings {
            temperature_celsius: 26.4,
            humidity_percent: 40.0,
        }));
        let mut soil = Fixed(Ok(SoilReadings {
            moisture_percent: 81,
        }));
        let fix = Position {
            latitude: 1.5,
            longitude: 2.5,
        };

        let payload = block_on(collect_payload(&mut climate, &mut soil, Some(fix)));
        assert_eq!(
            payload,
            UploadPayload {
                temperature_celsius: 26.4,
                humidity_percent: 40.0,
                moisture_percent: 81,
                position: Some(fix),
            }
        );
    }

    #[test]
    fn test_failed_reads_degrade_to_zero() {
        let mut climate: Fixed<ClimateReadings> = Fixed(Err(SensorError::ReadFailed {
            sensor: "SHT40",
            operation: "measure temperature/humidity",
            details: "I2C communication error",
        }));
        let mut soil = Fixed(Ok(SoilReadings {
            moisture_percent: 12,
        }));

        let payload = block_on(collect_payload(&mut climate, &mut soil, None));
        assert_eq!(payload.temperature_celsius, 0.0);
        assert_eq!(payload.humidity_percent, 0.0);
        assert_eq!(payload.moisture_percent, 12);
        assert_eq!(payload.position, None);
    }
}

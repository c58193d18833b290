//! Concrete sensor drivers behind the core `Sensor` trait

use agrilink_core::sensors::{
    ClimateReadings, Sensor, SensorError, SoilReadings, moisture_percent,
};
use embedded_hal_async::i2c::I2c;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO1};
use sht4x::Sht4xAsync;

/// Full-scale count of the 12-bit ADC
const ADC_FULL_SCALE: u16 = 4095;

/// Air temperature and humidity for `field1`/`field2` of each upload
pub struct SHT40Sensor<I> {
    sensor: Sht4xAsync<I, embassy_time::Delay>,
}

impl<I: I2c> SHT40Sensor<I> {
    pub fn new(i2c: I) -> Self {
        Self {
            sensor: Sht4xAsync::<I, embassy_time::Delay>::new(i2c),
        }
    }
}

impl<I: I2c> Sensor for SHT40Sensor<I> {
    type Readings = ClimateReadings;

    async fn read(&mut self) -> Result<ClimateReadings, SensorError> {
        let measurement = self
            .sensor
            .measure(sht4x::Precision::High, &mut embassy_time::Delay)
            .await
            .map_err(|e| {
                log::error!("SHT40 measurement failed: {:?}", e);
                SensorError::ReadFailed {
                    sensor: "SHT40",
                    operation: "measure temperature/humidity",
                    details: "I2C communication error or sensor not responding",
                }
            })?;

        Ok(ClimateReadings {
            temperature_celsius: measurement.temperature_celsius().to_num::<f32>(),
            humidity_percent: measurement.humidity_percent().to_num::<f32>(),
        })
    }
}

/// Resistive/capacitive soil probe on an ADC1 channel
pub struct SoilProbe<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    pin: AdcPin<GPIO1<'d>, ADC1<'d>>,
}

impl<'d> SoilProbe<'d> {
    pub fn new(adc1: ADC1<'d>, pin: GPIO1<'d>) -> Self {
        let mut config = AdcConfig::new();
        let pin = config.enable_pin(pin, Attenuation::_11dB);
        Self {
            adc: Adc::new(adc1, config),
            pin,
        }
    }
}

impl Sensor for SoilProbe<'_> {
    type Readings = SoilReadings;

    async fn read(&mut self) -> Result<SoilReadings, SensorError> {
        let raw: u16 = nb::block!(self.adc.read_oneshot(&mut self.pin)).map_err(|_| {
            SensorError::ReadFailed {
                sensor: "soil probe",
                operation: "sample ADC",
                details: "conversion failed",
            }
        })?;

        Ok(SoilReadings {
            moisture_percent: moisture_percent(raw, ADC_FULL_SCALE),
        })
    }
}

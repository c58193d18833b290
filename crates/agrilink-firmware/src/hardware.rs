//! Peripheral setup for the agrilink node
//!
//! Pin assignments:
//! - UART1 (RX GPIO18, TX GPIO17) to the SIM900 modem at 9600 baud
//! - I2C0 (SDA GPIO12, SCL GPIO11) to the SHT40
//! - GPIO1 (ADC1) to the soil moisture probe

use esp_hal::Async;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{GPIO11, GPIO12, GPIO17, GPIO18, I2C0, UART1};
use esp_hal::time::Rate;
use esp_hal::uart::{Config as UartConfig, Uart};

/// The modem ships configured for 9600 baud autobauding
pub const MODEM_BAUD_RATE: u32 = 9600;

/// Create the async UART the AT client talks through
pub fn create_modem_uart(
    uart1: UART1<'static>,
    rx: GPIO18<'static>,
    tx: GPIO17<'static>,
) -> Uart<'static, Async> {
    Uart::new(uart1, UartConfig::default().with_baudrate(MODEM_BAUD_RATE))
        .expect("Failed to configure modem UART")
        .with_rx(rx)
        .with_tx(tx)
        .into_async()
}

/// Initialize the I2C bus hardware
///
/// Creates the I2C peripheral with proper configuration
pub fn create_i2c_bus(
    i2c0: I2C0<'static>,
    sda: GPIO12<'static>,
    scl: GPIO11<'static>,
) -> I2c<'static, Async> {
    I2c::new(i2c0, I2cConfig::default().with_frequency(Rate::from_khz(100)))
        .expect("Failed to configure I2C bus")
        .with_sda(sda)
        .with_scl(scl)
        .into_async()
}

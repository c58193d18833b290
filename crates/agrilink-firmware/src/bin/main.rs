#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use agrilink_core::modem::{AtClient, Uplink};
use agrilink_core::schedule::UploadSchedule;
use agrilink_core::sensors::collect_payload;
use agrilink_firmware::hardware::{create_i2c_bus, create_modem_uart};
use agrilink_firmware::sensors::{SHT40Sensor, SoilProbe};
use agrilink_firmware::settings::uplink_config;
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use log::{error, info};

/// Time the SIM900 needs after power-on before it answers `AT`
const MODEM_BOOT_DELAY: Duration = Duration::from_secs(2);

/// Pause between sensor sweeps
const LOOP_PERIOD: Duration = Duration::from_secs(1);

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rtt_target::rprintln!("PANIC: {}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_target::rtt_init_log!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 73744);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("Embassy initialized!");

    let i2c = create_i2c_bus(peripherals.I2C0, peripherals.GPIO12, peripherals.GPIO11);
    let mut climate = SHT40Sensor::new(i2c);
    let mut soil = SoilProbe::new(peripherals.ADC1, peripherals.GPIO1);

    let uart = create_modem_uart(peripherals.UART1, peripherals.GPIO18, peripherals.GPIO17);
    let mut uplink = Uplink::new(AtClient::new(uart), uplink_config());

    info!("Initializing modem...");
    Timer::after(MODEM_BOOT_DELAY).await;
    match uplink.bring_up().await {
        Ok(()) => info!("Modem ready"),
        // Keep sampling without connectivity; the bearer setup retries every cycle.
        Err(e) => error!("Modem reset failed: {}", e),
    }

    info!("Soil telemetry node ready");

    let mut schedule = UploadSchedule::new(uplink.config().upload_interval, Instant::now());
    info!(
        "Uploading to {} every {} s",
        uplink.config().endpoint,
        schedule.interval().as_secs()
    );

    loop {
        // GPS acquisition is not wired up on this board.
        let payload = collect_payload(&mut climate, &mut soil, None).await;
        info!("{}", payload);

        if schedule.is_due(Instant::now()) {
            match uplink.upload_cycle(&payload).await {
                Ok(()) => info!("Data uploaded successfully"),
                Err(e) => error!("Failed to upload data: {}", e),
            }
            schedule.record(Instant::now());
        }

        Timer::after(LOOP_PERIOD).await;
    }
}

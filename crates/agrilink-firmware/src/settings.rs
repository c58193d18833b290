//! Uplink settings baked in by `build.rs` from `.env`

use agrilink_core::config::UplinkConfig;
use embassy_time::Duration;
use log::warn;

/// Build the uplink configuration, falling back to the core defaults for
/// anything not set at build time.
pub fn uplink_config() -> UplinkConfig<'static> {
    let mut config = UplinkConfig::default();

    if let Some(apn) = option_env!("AGRILINK_APN") {
        config = config.with_apn(apn);
    }
    if let Some(endpoint) = option_env!("AGRILINK_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }
    match option_env!("AGRILINK_API_KEY") {
        Some(api_key) => config = config.with_api_key(api_key),
        None => warn!("AGRILINK_API_KEY was not set at build time; uploads will be rejected"),
    }
    if let Some(secs) = option_env!("AGRILINK_UPLOAD_INTERVAL_SECS") {
        match secs.parse::<u64>() {
            Ok(secs) => config = config.with_upload_interval(Duration::from_secs(secs)),
            Err(_) => warn!("Ignoring invalid upload interval {:?}", secs),
        }
    }

    config
}

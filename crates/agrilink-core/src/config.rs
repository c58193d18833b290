use embassy_time::Duration;

/// Default access point name used when none is configured.
pub const DEFAULT_APN: &str = "internet";

/// Default telemetry host; the upload path is appended to it verbatim.
pub const DEFAULT_ENDPOINT: &str = "api.thingspeak.com";

/// Default spacing between upload attempts.
pub const DEFAULT_UPLOAD_INTERVAL: Duration = Duration::from_secs(10);

/// Settings consumed by the uplink.
///
/// The firmware builds this from build-time environment values; everything is
/// borrowed so the strings can live in flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UplinkConfig<'a> {
    /// Access point name for the GPRS bearer profile
    pub apn: &'a str,
    /// Host (and optional prefix path) the request path is appended to
    pub endpoint: &'a str,
    /// Write key embedded in every upload
    pub api_key: &'a str,
    /// Minimum time between two upload attempts
    pub upload_interval: Duration,
}

impl Default for UplinkConfig<'_> {
    fn default() -> Self {
        Self {
            apn: DEFAULT_APN,
            endpoint: DEFAULT_ENDPOINT,
            api_key: "",
            upload_interval: DEFAULT_UPLOAD_INTERVAL,
        }
    }
}

impl<'a> UplinkConfig<'a> {
    pub fn with_apn(mut self, apn: &'a str) -> Self {
        self.apn = apn;
        self
    }

    pub fn with_endpoint(mut self, endpoint: &'a str) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_api_key(mut self, api_key: &'a str) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_upload_interval(mut self, interval: Duration) -> Self {
        self.upload_interval = interval;
        self
    }
}

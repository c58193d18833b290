//! Upload cycle orchestration and bearer lifecycle

use embedded_io_async::{Read, Write};
use log::{info, warn};

use super::client::AtClient;
use super::error::SessionResult;
use crate::config::UplinkConfig;
use crate::telemetry::UploadPayload;

/// Whether the GPRS bearer is believed to be usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BearerState {
    /// Bearer setup must run before the next upload
    #[default]
    NotEstablished,
    /// The last bearer setup succeeded and no upload has failed since
    Established,
}

/// Owns the modem client and the bearer state across upload cycles.
///
/// State starts at [`BearerState::NotEstablished`] and is never persisted, so
/// every restart goes through bearer setup again.
pub struct Uplink<'a, P> {
    client: AtClient<P>,
    config: UplinkConfig<'a>,
    bearer: BearerState,
}

impl<'a, P> Uplink<'a, P> {
    pub fn new(client: AtClient<P>, config: UplinkConfig<'a>) -> Self {
        Self {
            client,
            config,
            bearer: BearerState::NotEstablished,
        }
    }

    pub fn bearer_state(&self) -> BearerState {
        self.bearer
    }

    pub fn config(&self) -> &UplinkConfig<'a> {
        &self.config
    }

    pub fn client(&self) -> &AtClient<P> {
        &self.client
    }

    pub fn into_client(self) -> AtClient<P> {
        self.client
    }
}

impl<P> Uplink<'_, P>
where
    P: Read + Write,
{
    /// Verify the modem answers and is at full functionality.
    pub async fn bring_up(&mut self) -> SessionResult {
        self.client.reset_and_verify().await
    }

    /// Run one upload, bringing the bearer up first when needed.
    ///
    /// A bearer failure returns before any HTTP command is sent. An upload
    /// failure forces the bearer state back to
    /// [`BearerState::NotEstablished`] since the bearer may have dropped
    /// silently; the next cycle then sets it up again.
    pub async fn upload_cycle(&mut self, payload: &UploadPayload) -> SessionResult {
        if self.bearer != BearerState::Established {
            if let Err(e) = self.client.establish_bearer(self.config.apn).await {
                warn!("GPRS initialization failed: {}", e);
                return Err(e);
            }
            self.bearer = BearerState::Established;
        }

        let result = self
            .client
            .upload(payload, self.config.endpoint, self.config.api_key)
            .await;

        if result.is_err() {
            info!("Dropping bearer state, setup reruns next cycle");
            self.bearer = BearerState::NotEstablished;
        }
        result
    }
}

use alloc::format;

use embedded_io_async::{Read, Write};
use log::{info, warn};

use super::at;
use super::client::AtClient;
use super::command::Command;
use super::error::{SessionError, SessionResult, Step};
use crate::telemetry::UploadPayload;

impl<P> AtClient<P>
where
    P: Read + Write,
{
    /// Send `payload` as one HTTP GET through the modem's HTTP client.
    ///
    /// Succeeds only when init, bearer binding, URL, the action (answered
    /// with status 200) and the body read all succeed. The first failing step
    /// skips the rest. `AT+HTTPTERM` is sent exactly once on every path, so
    /// the HTTP context is never left open.
    pub async fn upload(
        &mut self,
        payload: &UploadPayload,
        endpoint: &str,
        api_key: &str,
    ) -> SessionResult {
        let url = format!("{}{}", endpoint, payload.request_path(api_key));

        let result = self.http_get(&url).await;

        if let Err(cause) = self.execute(&at::http_term()).await.into_result() {
            warn!("HTTP terminate failed: {}", cause);
        }

        match &result {
            Ok(()) => info!("Uploaded {}", payload),
            Err(e) => warn!("Upload of {} failed: {}", payload, e),
        }
        result
    }

    async fn http_get(&mut self, url: &str) -> SessionResult {
        self.http_step(at::http_init(), Step::HttpInit).await?;
        self.http_step(at::http_bearer(), Step::HttpBearer).await?;
        self.http_step(at::http_url(url), Step::HttpUrl).await?;
        self.http_step(at::http_action_get(), Step::HttpAction).await?;
        // The body is discarded; reading it drains the modem buffer.
        self.http_step(at::http_read(), Step::HttpRead).await
    }

    async fn http_step(&mut self, command: Command, step: Step) -> SessionResult {
        self.execute(&command)
            .await
            .into_result()
            .map(drop)
            .map_err(|cause| SessionError::Upload { step, cause })
    }
}

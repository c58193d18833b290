use embedded_io_async::{Read, Write};
use log::{info, warn};

use super::at;
use super::client::AtClient;
use super::command::Command;
use super::error::{SessionError, SessionResult, Step};

impl<P> AtClient<P>
where
    P: Read + Write,
{
    /// Configure and open the GPRS bearer on profile 1.
    ///
    /// Echo and verbose-error setup must succeed. The profile configuration
    /// and the open request are idempotent and commonly rejected when already
    /// in place, so their failures are only logged. The status query is the
    /// authoritative check: when it fails, a close is attempted (outcome
    /// ignored) and the script fails.
    pub async fn establish_bearer(&mut self, apn: &str) -> SessionResult {
        self.bearer_step(at::echo_off(), Step::EchoOff).await?;
        self.bearer_step(at::verbose_errors(), Step::VerboseErrors).await?;

        self.tolerated(at::bearer_connection_type()).await;
        self.tolerated(at::bearer_apn(apn)).await;
        self.tolerated(at::bearer_open()).await;

        if let Err(cause) = self.execute(&at::bearer_query()).await.into_result() {
            warn!("Bearer is not open ({}), closing it", cause);
            let _ = self.execute(&at::bearer_close()).await;
            return Err(SessionError::Bearer {
                step: Step::BearerStatus,
                cause,
            });
        }

        info!("GPRS bearer open on APN {}", apn);
        Ok(())
    }

    async fn bearer_step(&mut self, command: Command, step: Step) -> SessionResult {
        self.execute(&command)
            .await
            .into_result()
            .map(drop)
            .map_err(|cause| SessionError::Bearer { step, cause })
    }

    async fn tolerated(&mut self, command: Command) {
        if let Err(cause) = self.execute(&command).await.into_result() {
            warn!("Ignoring failed `{}`: {}", command.line, cause);
        }
    }
}

use embedded_io_async::{Read, Write};
use log::info;

use super::at;
use super::client::AtClient;
use super::error::{SessionError, SessionResult, Step};

impl<P> AtClient<P>
where
    P: Read + Write,
{
    /// Probe the modem and restore full functionality.
    ///
    /// Run once at start. Both commands must succeed, in order; the second is
    /// not sent if the probe fails.
    pub async fn reset_and_verify(&mut self) -> SessionResult {
        self.execute(&at::liveness())
            .await
            .into_result()
            .map_err(|cause| SessionError::BringUp {
                step: Step::Liveness,
                cause,
            })?;

        self.execute(&at::full_functionality())
            .await
            .into_result()
            .map_err(|cause| SessionError::BringUp {
                step: Step::FullFunctionality,
                cause,
            })?;

        info!("Modem is alive with full functionality");
        Ok(())
    }
}

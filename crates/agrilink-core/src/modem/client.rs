//! Command/response matcher over a byte-oriented modem port

use alloc::string::String;
use alloc::vec::Vec;

use embassy_time::{Duration, Instant, with_deadline};
use embedded_io_async::{Read, Write};
use log::{error, info, warn};

use super::command::{Command, CommandOutcome, LINE_TERMINATOR, Marker, classify};

/// Bytes requested from the port per read
const READ_CHUNK: usize = 64;

/// Silence on the port that ends the pre-command drain
const DRAIN_QUIET: Duration = Duration::from_millis(20);

/// Longest the pre-command drain may run against a chattering modem
const DRAIN_LIMIT: Duration = Duration::from_millis(500);

/// Drives one AT command at a time over a half-duplex serial port.
///
/// The port is anything implementing the async `embedded-io` traits: the
/// ESP32 UART on target, a scripted modem in tests. Only one command is ever
/// in flight; `execute` takes `&mut self`, so callers sharing a client must
/// already serialize access to it.
pub struct AtClient<P> {
    port: P,
}

impl<P> AtClient<P> {
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P> AtClient<P>
where
    P: Read + Write,
{
    /// Send `command` and wait for its marker.
    ///
    /// Incoming bytes are accumulated until the reply ends with an error
    /// marker (checked first), the expected marker, or the deadline passes.
    /// A transport failure ends the wait early and reads as a timeout.
    ///
    /// Anything already buffered on the port (the tail of an earlier reply,
    /// unsolicited result codes) is discarded before the line is written, so
    /// it can never satisfy this command's marker.
    pub async fn execute(&mut self, command: &Command) -> CommandOutcome {
        self.discard_stale(&command.line).await;

        info!("> {}", command.line);

        if let Err(e) = self.write_line(&command.line).await {
            error!("Failed to send `{}`: {:?}", command.line, e);
            return CommandOutcome::Timeout(String::new());
        }

        let deadline = Instant::now() + command.timeout;
        let mut reply: Vec<u8> = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let read = match with_deadline(deadline, self.port.read(&mut chunk)).await {
                Ok(Ok(0)) => {
                    warn!("Modem port closed while waiting on `{}`", command.line);
                    break;
                }
                Ok(Ok(read)) => read,
                Ok(Err(e)) => {
                    error!("Modem read failed while waiting on `{}`: {:?}", command.line, e);
                    break;
                }
                Err(_) => break,
            };

            // Byte by byte, so the capture stops exactly at the deciding marker.
            for &byte in &chunk[..read] {
                reply.push(byte);
                match classify(&reply, command.expect) {
                    Some(Marker::Error) => {
                        let text = into_text(reply);
                        warn!("< ERROR `{}`: {:?}", command.line, text);
                        return CommandOutcome::ModemError(text);
                    }
                    Some(Marker::Expected) => {
                        let text = into_text(reply);
                        info!("< `{}`: {:?}", command.line, text);
                        return CommandOutcome::Success(text);
                    }
                    None => {}
                }
            }
        }

        let text = into_text(reply);
        warn!("< TIMEOUT `{}`: {:?}", command.line, text);
        CommandOutcome::Timeout(text)
    }

    async fn discard_stale(&mut self, line: &str) {
        let give_up = Instant::now() + DRAIN_LIMIT;
        let mut stale: Vec<u8> = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];

        while Instant::now() < give_up {
            let quiet = (Instant::now() + DRAIN_QUIET).min(give_up);
            match with_deadline(quiet, self.port.read(&mut chunk)).await {
                Ok(Ok(read)) if read > 0 => stale.extend_from_slice(&chunk[..read]),
                _ => break,
            }
        }

        if !stale.is_empty() {
            warn!(
                "Discarded {} stale bytes before `{}`: {:?}",
                stale.len(),
                line,
                into_text(stale)
            );
        }
    }

    async fn write_line(&mut self, line: &str) -> Result<(), P::Error> {
        self.port.write_all(line.as_bytes()).await?;
        self.port.write_all(LINE_TERMINATOR).await?;
        self.port.flush().await
    }
}

fn into_text(reply: Vec<u8>) -> String {
    String::from_utf8(reply)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

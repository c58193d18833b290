//! Scripted modem used by the unit tests

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;

use embassy_time::{Duration, MockDriver};
use embedded_io_async::{ErrorType, Read, Write};

/// How far the mock clock jumps once the modem has nothing left to say.
/// Longer than any command deadline.
const SILENCE_ADVANCE: Duration = Duration::from_secs(120);

struct Rule {
    prefix: String,
    reply: Option<String>,
    uses_left: Option<usize>,
}

/// A fake modem port answering command lines from prefix-matched rules.
///
/// Rules are tried in insertion order; a single-use rule drops out once it
/// has fired. Commands no rule matches are answered with `OK`. Like a UART
/// receive buffer, bytes nobody read stay queued in front of the next reply.
/// When the queue is empty the mock clock is pushed past any deadline and
/// reads stay pending, so timeouts are deterministic.
pub(crate) struct ScriptedModem {
    rules: Vec<Rule>,
    line: Vec<u8>,
    written: Vec<u8>,
    commands: Vec<String>,
    pending: VecDeque<u8>,
    chunk_size: usize,
}

impl ScriptedModem {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            line: Vec::new(),
            written: Vec::new(),
            commands: Vec::new(),
            pending: VecDeque::new(),
            chunk_size: 64,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn respond(self, prefix: &str, reply: &str) -> Self {
        self.rule(prefix, Some(reply), None)
    }

    pub fn silent(self, prefix: &str) -> Self {
        self.rule(prefix, None, None)
    }

    pub fn silent_once(self, prefix: &str) -> Self {
        self.rule(prefix, None, Some(1))
    }

    /// Queue bytes the modem emits on its own before any command
    pub fn unsolicited(mut self, text: &str) -> Self {
        self.pending.extend(text.bytes());
        self
    }

    fn rule(mut self, prefix: &str, reply: Option<&str>, uses_left: Option<usize>) -> Self {
        self.rules.push(Rule {
            prefix: prefix.into(),
            reply: reply.map(Into::into),
            uses_left,
        });
        self
    }

    /// Every byte written to the port
    pub fn written(&self) -> &[u8] {
        &self.written
    }

    /// Every complete command line, without terminators
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// How many sent commands start with `prefix`
    pub fn count(&self, prefix: &str) -> usize {
        self.commands
            .iter()
            .filter(|command| command.starts_with(prefix))
            .count()
    }

    fn answer(&mut self, command: &str) {
        let rule = self.rules.iter_mut().find(|rule| {
            command.starts_with(rule.prefix.as_str()) && rule.uses_left != Some(0)
        });

        let reply = match rule {
            Some(rule) => {
                if let Some(uses_left) = rule.uses_left.as_mut() {
                    *uses_left -= 1;
                }
                rule.reply.clone()
            }
            None => Some(String::from("\r\nOK\r\n")),
        };

        if let Some(reply) = reply {
            self.pending.extend(reply.bytes());
        }
    }
}

impl ErrorType for ScriptedModem {
    type Error = Infallible;
}

impl Write for ScriptedModem {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            self.written.push(byte);
            self.line.push(byte);
            if self.line.ends_with(b"\r\n") {
                self.line.truncate(self.line.len() - 2);
                let command = String::from_utf8_lossy(&self.line).into_owned();
                self.line.clear();
                self.answer(&command);
                self.commands.push(command);
            }
        }
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Read for ScriptedModem {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.pending.is_empty() {
            MockDriver::get().advance(SILENCE_ADVANCE);
            return core::future::pending().await;
        }

        let count = buf.len().min(self.chunk_size).min(self.pending.len());
        for (slot, byte) in buf.iter_mut().zip(self.pending.drain(..count)) {
            *slot = byte;
        }
        Ok(count)
    }
}

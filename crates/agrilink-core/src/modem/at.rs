//! The fixed AT dialect used by the session scripts
//!
//! Every constructor returns a fresh [`Command`] with its acknowledgement
//! marker and deadline. Only the handful of commands needed for bearer setup
//! and a single HTTP GET are covered; this is not a general AT interpreter.

use alloc::format;
use embassy_time::Duration;

use super::command::Command;

/// Generic acknowledgement for most commands
pub const OK: &str = "OK";
/// Status line reported while bearer profile 1 is open
pub const BEARER_OPEN: &str = "+SAPBR: 1,1";
/// Action-complete indication for a GET answered with HTTP 200
pub const HTTP_GET_200: &str = "+HTTPACTION: 0,200";

/// Bearer profile the HTTP client is bound to
pub const BEARER_PROFILE: u8 = 1;

pub const SHORT_TIMEOUT: Duration = Duration::from_secs(2);
pub const CFUN_TIMEOUT: Duration = Duration::from_secs(10);
pub const BEARER_OPEN_TIMEOUT: Duration = Duration::from_secs(30);
pub const HTTP_ACTION_TIMEOUT: Duration = Duration::from_secs(30);
pub const HTTP_READ_TIMEOUT: Duration = Duration::from_secs(8);

pub fn liveness() -> Command {
    Command::new("AT", OK, SHORT_TIMEOUT)
}

pub fn full_functionality() -> Command {
    Command::new("AT+CFUN=1", OK, CFUN_TIMEOUT)
}

pub fn echo_off() -> Command {
    Command::new("ATE0", OK, SHORT_TIMEOUT)
}

pub fn verbose_errors() -> Command {
    Command::new("AT+CMEE=2", OK, SHORT_TIMEOUT)
}

pub fn bearer_connection_type() -> Command {
    Command::new(
        format!("AT+SAPBR=3,{BEARER_PROFILE},\"CONTYPE\",\"GPRS\""),
        OK,
        SHORT_TIMEOUT,
    )
}

pub fn bearer_apn(apn: &str) -> Command {
    Command::new(
        format!("AT+SAPBR=3,{BEARER_PROFILE},\"APN\",\"{apn}\""),
        OK,
        SHORT_TIMEOUT,
    )
}

pub fn bearer_open() -> Command {
    Command::new(format!("AT+SAPBR=1,{BEARER_PROFILE}"), OK, BEARER_OPEN_TIMEOUT)
}

pub fn bearer_query() -> Command {
    Command::new(
        format!("AT+SAPBR=2,{BEARER_PROFILE}"),
        BEARER_OPEN,
        SHORT_TIMEOUT,
    )
}

pub fn bearer_close() -> Command {
    Command::new(format!("AT+SAPBR=0,{BEARER_PROFILE}"), OK, SHORT_TIMEOUT)
}

pub fn http_init() -> Command {
    Command::new("AT+HTTPINIT", OK, SHORT_TIMEOUT)
}

pub fn http_bearer() -> Command {
    Command::new(
        format!("AT+HTTPPARA=\"CID\",{BEARER_PROFILE}"),
        OK,
        SHORT_TIMEOUT,
    )
}

pub fn http_url(url: &str) -> Command {
    Command::new(format!("AT+HTTPPARA=\"URL\",\"{url}\""), OK, SHORT_TIMEOUT)
}

/// Method 0 is GET
pub fn http_action_get() -> Command {
    Command::new("AT+HTTPACTION=0", HTTP_GET_200, HTTP_ACTION_TIMEOUT)
}

pub fn http_read() -> Command {
    Command::new("AT+HTTPREAD", OK, HTTP_READ_TIMEOUT)
}

pub fn http_term() -> Command {
    Command::new("AT+HTTPTERM", OK, SHORT_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_commands_use_profile_one() {
        assert_eq!(bearer_connection_type().line, "AT+SAPBR=3,1,\"CONTYPE\",\"GPRS\"");
        assert_eq!(bearer_apn("airtelgprs.com").line, "AT+SAPBR=3,1,\"APN\",\"airtelgprs.com\"");
        assert_eq!(bearer_open().line, "AT+SAPBR=1,1");
        assert_eq!(bearer_query().line, "AT+SAPBR=2,1");
        assert_eq!(bearer_close().line, "AT+SAPBR=0,1");
        assert_eq!(http_bearer().line, "AT+HTTPPARA=\"CID\",1");
    }

    #[test]
    fn test_markers_and_timeouts() {
        assert_eq!(liveness().timeout, Duration::from_secs(2));
        assert_eq!(full_functionality().timeout, Duration::from_secs(10));
        assert_eq!(bearer_open().timeout, Duration::from_secs(30));

        let query = bearer_query();
        assert_eq!(query.expect, "+SAPBR: 1,1");
        assert_eq!(query.timeout, Duration::from_secs(2));

        let action = http_action_get();
        assert_eq!(action.expect, "+HTTPACTION: 0,200");
        assert_eq!(action.timeout, Duration::from_secs(30));

        assert_eq!(http_read().timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_url_is_quoted() {
        assert_eq!(
            http_url("api.thingspeak.com/update?api_key=K").line,
            "AT+HTTPPARA=\"URL\",\"api.thingspeak.com/update?api_key=K\""
        );
    }
}

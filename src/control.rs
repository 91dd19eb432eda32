//! Slave control-channel client.
//!
//! This module talks to the ESP-hosted slave over its control character
//! device. The flow only consumes two operations — a station MAC lookup and
//! an access-point join — so only those are modelled; everything else the
//! slave's control surface offers is out of scope here.
//!
//! # Requirements
//!
//! - The ESP-hosted transport driver must be loaded so the control device
//!   (by default `/dev/esps0`) exists
//! - The user must have read/write permission on the device
//!
//! # Example
//!
//! ```no_run
//! use station_connect::control::{ApConfig, SerialControl, SlaveControl, WifiMode};
//!
//! let mut control = SerialControl::open("/dev/esps0").expect("Open failed");
//!
//! let mac = control.get_mac(WifiMode::Station).expect("MAC lookup failed");
//! println!("station MAC address {}", mac);
//!
//! let config = ApConfig {
//!     ssid: "xyz".into(),
//!     password: "xyz123456".into(),
//!     bssid: "0".into(),
//! };
//! control.set_ap_config(&config).expect("Join failed");
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

use crate::error::StationConnectError;

/// Sentinel bssid value meaning "no specific access point selected".
///
/// Passed through to the slave unchanged; the slave interprets it as
/// "associate with any AP broadcasting the SSID".
pub const BSSID_UNSPECIFIED: &str = "0";

/// Rejection sentinel the slave sends when a request cannot be served.
const FAILURE: &str = "failure";

/// Acknowledgement the slave sends for requests with no payload.
const SUCCESS: &str = "success";

// Request verbs understood by the slave's control surface.
const GET_STA_MAC_ADDR: &str = "get_sta_mac_addr";
const GET_SOFTAP_MAC_ADDR: &str = "get_softap_mac_addr";
const STA_CONNECT: &str = "sta_connect";

/// Wi-Fi operating modes of the slave device.
///
/// The discriminants match the slave firmware's mode numbering. Only
/// [`WifiMode::Station`] is exercised by the connect flow; the MAC lookup is
/// mode-addressed, so the full set is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WifiMode {
    /// Wi-Fi disabled.
    Null = 0,

    /// Station (client) mode: the slave associates with an access point.
    Station = 1,

    /// SoftAP mode: the slave broadcasts its own access point.
    SoftAp = 2,

    /// Simultaneous station and SoftAP operation.
    StationSoftAp = 3,
}

impl WifiMode {
    /// Human-readable mode name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            WifiMode::Null => "null",
            WifiMode::Station => "station",
            WifiMode::SoftAp => "softap",
            WifiMode::StationSoftAp => "station+softap",
        }
    }

    /// The MAC-lookup request verb for this mode, if the mode has a
    /// dedicated hardware address.
    fn mac_request(self) -> Option<&'static str> {
        match self {
            WifiMode::Station => Some(GET_STA_MAC_ADDR),
            WifiMode::SoftAp => Some(GET_SOFTAP_MAC_ADDR),
            WifiMode::Null | WifiMode::StationSoftAp => None,
        }
    }
}

/// Credentials for the access point the slave should join.
///
/// No semantic validation happens on the host; malformed values are passed
/// through unchanged and rejected by the slave if it cares.
#[derive(Debug, Clone)]
pub struct ApConfig {
    /// SSID of the target access point.
    pub ssid: String,

    /// WPA/WPA2 passphrase for the access point.
    pub password: String,

    /// MAC address of a specific access point, for when multiple APs share
    /// an SSID. [`BSSID_UNSPECIFIED`] when the caller does not care.
    pub bssid: String,
}

/// The two slave operations the connect flow consumes.
///
/// Implemented by [`SerialControl`] in production and by mocks in tests. The
/// transport behind the trait is opaque to callers: a request either yields
/// its payload or an error, with no intermediate states.
pub trait SlaveControl {
    /// Looks up the slave's hardware address for the given Wi-Fi mode.
    ///
    /// Returns the address in colon-hex form, or an error if the slave
    /// rejects the request or the channel fails.
    fn get_mac(&mut self, mode: WifiMode) -> Result<String, StationConnectError>;

    /// Asks the slave to associate its station interface with the access
    /// point described by `config`.
    ///
    /// Returns `Ok(())` only when the slave confirms the association.
    fn set_ap_config(&mut self, config: &ApConfig) -> Result<(), StationConnectError>;
}

/// Blocking line-oriented client over the hosted control character device.
///
/// Each request is a single line (`<verb> [args...]`), each response a
/// single line: the payload on success, or the `failure` sentinel on
/// rejection. Calls block until the slave answers; there is no timeout.
pub struct SerialControl {
    reader: BufReader<File>,
    writer: File,
}

impl SerialControl {
    /// Opens the control device read/write.
    ///
    /// # Arguments
    /// * `device` - Path to the control character device (e.g., "/dev/esps0")
    ///
    /// # Returns
    /// - `Ok(SerialControl)` ready for requests
    /// - `Err(StationConnectError::ControlOpen)` if the device cannot be opened
    pub fn open(device: &str) -> Result<Self, StationConnectError> {
        let writer = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device)
            .map_err(|source| StationConnectError::ControlOpen {
                device: device.to_string(),
                source,
            })?;
        let reader = BufReader::new(writer.try_clone()?);

        Ok(SerialControl { reader, writer })
    }

    /// Sends one request line and reads one response line.
    ///
    /// `request` is the verb alone, used for diagnostics and error values so
    /// credentials in `line` never end up in logs.
    fn request(&mut self, request: &str, line: &str) -> Result<String, StationConnectError> {
        log::debug!("control request: {}", request);

        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;

        let mut raw = String::new();
        let n = self.reader.read_line(&mut raw)?;
        if n == 0 {
            return Err(StationConnectError::EmptyResponse(request.to_string()));
        }

        parse_response(request, &raw)
    }
}

impl SlaveControl for SerialControl {
    fn get_mac(&mut self, mode: WifiMode) -> Result<String, StationConnectError> {
        let verb = mode
            .mac_request()
            .ok_or(StationConnectError::UnaddressableMode(mode.name()))?;

        self.request(verb, verb)
    }

    fn set_ap_config(&mut self, config: &ApConfig) -> Result<(), StationConnectError> {
        let line = format!(
            "{} {} {} {}",
            STA_CONNECT, config.ssid, config.password, config.bssid
        );

        let response = self.request(STA_CONNECT, &line)?;
        if response != SUCCESS {
            return Err(StationConnectError::UnexpectedResponse {
                request: STA_CONNECT.to_string(),
                response,
            });
        }

        Ok(())
    }
}

/// Interprets one raw response line.
///
/// The `failure` sentinel maps to [`StationConnectError::RequestRejected`];
/// a blank line is treated the same as a closed channel; anything else is
/// the payload, trailing newline stripped.
fn parse_response(request: &str, raw: &str) -> Result<String, StationConnectError> {
    let response = raw.trim_end();

    if response.is_empty() {
        return Err(StationConnectError::EmptyResponse(request.to_string()));
    }
    if response == FAILURE {
        return Err(StationConnectError::RequestRejected(request.to_string()));
    }

    Ok(response.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_response_is_returned_trimmed() {
        let mac = parse_response(GET_STA_MAC_ADDR, "AA:BB:CC:DD:EE:FF\n").unwrap();
        assert_eq!(mac, "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn failure_sentinel_maps_to_rejection() {
        let err = parse_response(GET_STA_MAC_ADDR, "failure\n").unwrap_err();
        assert!(matches!(err, StationConnectError::RequestRejected(_)));
    }

    #[test]
    fn blank_response_is_an_empty_response_error() {
        let err = parse_response(STA_CONNECT, "\n").unwrap_err();
        assert!(matches!(err, StationConnectError::EmptyResponse(_)));
    }

    #[test]
    fn mac_request_is_mode_addressed() {
        assert_eq!(WifiMode::Station.mac_request(), Some(GET_STA_MAC_ADDR));
        assert_eq!(WifiMode::SoftAp.mac_request(), Some(GET_SOFTAP_MAC_ADDR));
        assert_eq!(WifiMode::Null.mac_request(), None);
        assert_eq!(WifiMode::StationSoftAp.mac_request(), None);
    }

    #[test]
    fn mode_numbering_matches_slave_firmware() {
        assert_eq!(WifiMode::Null as u8, 0);
        assert_eq!(WifiMode::Station as u8, 1);
        assert_eq!(WifiMode::SoftAp as u8, 2);
        assert_eq!(WifiMode::StationSoftAp as u8, 3);
    }
}

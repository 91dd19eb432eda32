//! Station-connect host utility for ESP-hosted slaves.
//!
//! This library drives a one-shot flow: ask the slave device for its station
//! MAC address over the hosted control channel, ask it to join an access
//! point with the given credentials, and on success adopt the connectivity
//! on the host by reconfiguring the virtual station interface and cycling
//! its DHCP lease.
//!
//! # Modules
//!
//! - [`config`] - Host-side settings (interface name, control device path)
//! - [`control`] - Slave control-channel client (MAC lookup, AP join)
//! - [`station`] - The join-and-bridge flow
//! - [`bridge`] - Host interface bridging commands
//! - [`error`] - Custom error types for the library
//!
//! # Example Usage
//!
//! ```no_run
//! use station_connect::{ApConfig, SerialControl, SystemRunner, join_and_bridge};
//!
//! let mut control = SerialControl::open("/dev/esps0").expect("No control channel");
//!
//! let config = ApConfig {
//!     ssid: "xyz".into(),
//!     password: "xyz123456".into(),
//!     bssid: "0".into(),
//! };
//!
//! let outcome = join_and_bridge(&mut control, &SystemRunner, "ethsta0", &config);
//! println!("{:?}", outcome);
//! ```

/// Host interface bridging: the fixed ifconfig/dhclient sequence.
pub mod bridge;

/// Settings file handling (TOML under the platform config directory).
pub mod config;

/// Slave control-channel client and the trait seam in front of it.
pub mod control;

/// Error module defining custom error types for the library.
/// Uses `thiserror` for ergonomic error handling.
pub mod error;

/// The two-gate join-and-bridge flow.
pub mod station;

// Re-export the pieces a caller needs to run the flow end to end.
pub use bridge::{bridge_station, CommandRunner, SystemRunner};
pub use config::Settings;
pub use control::{ApConfig, SerialControl, SlaveControl, WifiMode, BSSID_UNSPECIFIED};
pub use error::StationConnectError;
pub use station::{join_and_bridge, Outcome};

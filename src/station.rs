//! Join-and-bridge flow.
//!
//! The whole tool is one linear run with two gates: retrieve the slave's
//! station MAC address, then ask the slave to join the access point. Only
//! when both succeed are the host bridging commands issued. Either gate
//! failing ends the run; OS command results past the gates never do.

use crate::bridge::{self, CommandRunner};
use crate::control::{ApConfig, SlaveControl, WifiMode};

/// Terminal states of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both slave calls succeeded and the bridging commands were issued.
    Bridged,

    /// The station MAC lookup failed; no join was attempted.
    AddressFailed,

    /// The slave refused the AP join; no bridging commands were issued.
    JoinFailed,
}

/// Runs the connect flow end to end.
///
/// Progress and failures are reported on stdout as the run advances; the
/// returned [`Outcome`] says where it ended. Bridging, once reached, always
/// completes and always reports success — command exit codes are not
/// inspected.
pub fn join_and_bridge(
    control: &mut dyn SlaveControl,
    runner: &dyn CommandRunner,
    interface: &str,
    config: &ApConfig,
) -> Outcome {
    let station_mac = match control.get_mac(WifiMode::Station) {
        Ok(mac) => {
            println!("station MAC address {}", mac);
            mac
        }
        Err(err) => {
            log::warn!("station MAC lookup failed: {}", err);
            return Outcome::AddressFailed;
        }
    };

    match control.set_ap_config(config) {
        Ok(()) => println!("Connected to given AP"),
        Err(err) => {
            log::debug!("AP join failed: {}", err);
            println!("Failed to set AP config");
            return Outcome::JoinFailed;
        }
    }

    bridge::bridge_station(runner, interface, &station_mac);
    println!("Success in setting AP config");

    Outcome::Bridged
}

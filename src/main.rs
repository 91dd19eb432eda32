use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use station_connect::{
    config::Settings,
    control::{ApConfig, SerialControl, BSSID_UNSPECIFIED},
    station::{self, Outcome},
    SystemRunner,
};

#[derive(Parser)]
#[command(name = "station-connect")]
#[command(about = "Join an ESP-hosted slave to an access point and bridge the host station interface")]
#[command(version)]
struct Cli {
    /// SSID of the access point
    ssid: String,

    /// Password of the access point
    password: String,

    /// MAC address of the AP, in case multiple APs share the same SSID
    #[arg(long, default_value = BSSID_UNSPECIFIED)]
    bssid: String,
}

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let settings = Settings::load().unwrap_or_default();

    // A control channel that cannot be opened is the same terminal state as
    // a failed MAC lookup: nothing further happens, and like every other
    // failure it is reported as text only, not through the exit code.
    let mut control = match SerialControl::open(&settings.control_device) {
        Ok(control) => control,
        Err(err) => {
            log::warn!("Cannot open control channel: {}", err);
            return Ok(());
        }
    };

    let config = ApConfig {
        ssid: cli.ssid,
        password: cli.password,
        bssid: cli.bssid,
    };

    let outcome = station::join_and_bridge(
        &mut control,
        &SystemRunner,
        &settings.interface,
        &config,
    );

    if outcome != Outcome::Bridged {
        log::debug!("run ended at {:?}", outcome);
    }

    Ok(())
}

//! Host interface bridging module.
//!
//! Once the slave has joined an access point, the host still has to adopt
//! the connectivity: the virtual station interface gets the slave's station
//! MAC address and a fresh DHCP lease. This module issues that fixed command
//! sequence.
//!
//! # Command Sequence
//!
//! ```bash
//! sudo ifconfig ethsta0 down
//! sudo ifconfig ethsta0 hw ether <station-mac>
//! sudo ifconfig ethsta0 up
//! sudo dhclient ethsta0 -r
//! sudo dhclient ethsta0 -v
//! ```
//!
//! A 1-second pause between "up" and the lease release lets the interface
//! settle. Each command's literal text is printed before it runs. Exit
//! statuses never alter the sequence: a failing command is logged and the
//! remaining commands still run.

use std::process::Command;
use std::thread;
use std::time::Duration;

use crate::error::StationConnectError;

/// Pause between bringing the interface up and touching DHCP.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Executes one external command.
///
/// Seam between the fixed bridging sequence and the OS, so tests can record
/// the issued commands instead of running them.
pub trait CommandRunner {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// `Err` means the command could not be spawned at all; a spawned
    /// command that exits nonzero is NOT an error at this level.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), StationConnectError>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
///
/// Captures output rather than inheriting the terminal; a nonzero exit is
/// surfaced as a warning with the command's stderr attached.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), StationConnectError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| StationConnectError::CommandSpawn(program.to_string(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::warn!(
                "'{} {}' exited with {}: {}",
                program,
                args.join(" "),
                output.status,
                stderr.trim()
            );
        }

        Ok(())
    }
}

/// Bridges the slave's station connectivity onto the host interface.
///
/// Issues the five fixed commands in order against `interface`, embedding
/// `station_mac` in the address assignment. Never fails: command problems
/// are logged and the sequence continues, matching the permissive behavior
/// of the original host tooling.
///
/// # Arguments
/// * `runner` - Command execution seam
/// * `interface` - Name of the virtual station interface (e.g., "ethsta0")
/// * `station_mac` - Hardware address retrieved from the slave
pub fn bridge_station(runner: &dyn CommandRunner, interface: &str, station_mac: &str) {
    run_step(runner, "sudo", &["ifconfig", interface, "down"]);
    run_step(runner, "sudo", &["ifconfig", interface, "hw", "ether", station_mac]);
    run_step(runner, "sudo", &["ifconfig", interface, "up"]);

    thread::sleep(SETTLE_DELAY);

    run_step(runner, "sudo", &["dhclient", interface, "-r"]);
    run_step(runner, "sudo", &["dhclient", interface, "-v"]);
}

/// Prints the literal command line, then runs it, discarding failures.
fn run_step(runner: &dyn CommandRunner, program: &str, args: &[&str]) {
    println!("{} {}", program, args.join(" "));

    if let Err(err) = runner.run(program, args) {
        log::warn!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records issued command lines instead of running them.
    pub(crate) struct RecordingRunner {
        pub commands: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            RecordingRunner {
                commands: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<(), StationConnectError> {
            self.commands
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));

            if self.fail {
                return Err(StationConnectError::CommandSpawn(
                    program.to_string(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                ));
            }
            Ok(())
        }
    }

    #[test]
    fn issues_the_five_commands_in_order() {
        let runner = RecordingRunner::new();
        bridge_station(&runner, "ethsta0", "AA:BB:CC:DD:EE:FF");

        let commands = runner.commands.borrow();
        assert_eq!(
            *commands,
            vec![
                "sudo ifconfig ethsta0 down",
                "sudo ifconfig ethsta0 hw ether AA:BB:CC:DD:EE:FF",
                "sudo ifconfig ethsta0 up",
                "sudo dhclient ethsta0 -r",
                "sudo dhclient ethsta0 -v",
            ]
        );
    }

    #[test]
    fn spawn_failures_do_not_halt_the_sequence() {
        let mut runner = RecordingRunner::new();
        runner.fail = true;
        bridge_station(&runner, "ethsta0", "AA:BB:CC:DD:EE:FF");

        assert_eq!(runner.commands.borrow().len(), 5);
    }

    #[test]
    fn interface_name_is_not_hardwired() {
        let runner = RecordingRunner::new();
        bridge_station(&runner, "ethsta1", "02:00:00:00:00:01");

        let commands = runner.commands.borrow();
        assert!(commands.iter().all(|c| c.contains("ethsta1")));
    }
}

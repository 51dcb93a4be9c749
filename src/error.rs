//! Failures of the radio bring-up and scan sequence.
//!
//! Every variant is fatal. The scanner never retries a driver call; the
//! caller hands the error to [`fatal`], which reports it and halts.

use core::fmt;

use embassy_executor::SpawnError;
use esp_println::println;
use esp_radio::InitializationError;
use esp_radio::wifi::WifiError;

/// A failed step of the bring-up or scan sequence.
#[derive(Debug)]
#[non_exhaustive]
pub enum ScanError {
    /// The radio controller could not be initialized.
    RadioInit(InitializationError),

    /// The Wi-Fi controller and its interfaces could not be created.
    Controller(WifiError),

    /// Switching the driver to station mode failed.
    SetMode(WifiError),

    /// Starting the driver failed.
    Start(WifiError),

    /// A scan request or the result retrieval failed.
    Scan(WifiError),

    /// The scan task could not be spawned.
    Spawn(SpawnError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::RadioInit(err) => write!(f, "Failed to initialize radio controller: {err}"),
            ScanError::Controller(err) => write!(f, "Failed to create WiFi controller: {err}"),
            ScanError::SetMode(err) => write!(f, "Failed to set Wi-Fi mode: {err}"),
            ScanError::Start(err) => write!(f, "Failed to start Wi-Fi controller: {err}"),
            ScanError::Scan(err) => write!(f, "WiFi scan failed: {err}"),
            ScanError::Spawn(err) => write!(f, "Failed to spawn WiFi scan task: {err}"),
        }
    }
}

impl core::error::Error for ScanError {}

/// Report `err` on the console and halt.
///
/// The panic handler (`panic-rtt-target`) parks the core, so the device
/// stays down until it is reset.
pub fn fatal(err: ScanError) -> ! {
    println!("{}", err);
    panic!("fatal scan error");
}

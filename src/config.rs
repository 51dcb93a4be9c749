//! Compile-time settings.
//!
//! The scanner takes no runtime configuration; everything tunable lives here.

use embassy_time::Duration;

/// Tag printed in front of every console line.
pub const LOG_TAG: &str = "WIFI_SCAN";

/// Pause between the end of one report and the next scan.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(3);

/// Minimum active-scan dwell time per channel, in milliseconds.
pub const ACTIVE_DWELL_MIN_MS: u64 = 100;

/// Maximum active-scan dwell time per channel, in milliseconds.
pub const ACTIVE_DWELL_MAX_MS: u64 = 200;

/// Settle time between driver bring-up steps.
pub const RADIO_SETTLE: Duration = Duration::from_millis(500);

/// RAM reclaimed from bootloader sections.
pub const RECLAIMED_HEAP_SIZE: usize = 98768;

/// Main heap for driver buffers and scan results.
pub const MAIN_HEAP_SIZE: usize = 64 * 1024;

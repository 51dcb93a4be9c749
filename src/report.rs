//! Scan table rendering.
//!
//! A report is a block of lines: a count header, a column header framed by
//! separators, one row per access point and a closing separator. Lines go
//! to a [`LineSink`], which is the console on the device and a buffer in
//! tests.

use core::fmt;

use embassy_time::Instant;
use esp_println::println;

use crate::record::AccessPointRecord;

/// Horizontal rule framing the table.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------------------";

/// Destination for report lines.
pub trait LineSink {
    /// Emit one line. `line` carries no trailing newline.
    fn line(&mut self, line: fmt::Arguments<'_>);
}

impl<T: LineSink + ?Sized> LineSink for &mut T {
    fn line(&mut self, line: fmt::Arguments<'_>) {
        (**self).line(line);
    }
}

/// Console output in ESP-IDF log style: `I (<uptime ms>) <TAG>: <line>`.
pub struct Console {
    tag: &'static str,
}

impl Console {
    /// Create a console that prefixes every line with `tag`.
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl LineSink for Console {
    fn line(&mut self, line: fmt::Arguments<'_>) {
        println!("I ({}) {}: {}", Instant::now().as_millis(), self.tag, line);
    }
}

/// The table for one scan cycle.
pub struct ScanReport<'a> {
    records: &'a [AccessPointRecord],
}

impl<'a> ScanReport<'a> {
    /// Wrap the records of one cycle, in the order the driver returned them.
    pub fn new(records: &'a [AccessPointRecord]) -> Self {
        Self { records }
    }

    /// Number of networks in the report.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan found nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the whole block to `sink`.
    pub fn render<S: LineSink + ?Sized>(&self, sink: &mut S) {
        let count = self.records.len();
        let plural = if count == 1 { "" } else { "s" };

        sink.line(format_args!("Found {count} network{plural}"));
        sink.line(format_args!("{SEPARATOR}"));
        sink.line(format_args!(
            " # | {:<32} | {:>8} | {:>4} | {:<8} | {}",
            "SSID", "RSSI", "CH", "AUTH", "BSSID"
        ));
        sink.line(format_args!("{SEPARATOR}"));

        for (i, ap) in self.records.iter().enumerate() {
            sink.line(format_args!(
                "{:2} | {:<32} | {:4} dBm | {:4} | {:<8} | {}",
                i,
                ap.display_ssid(),
                ap.rssi,
                ap.channel,
                ap.auth,
                ap.bssid
            ));
        }

        // blank line between scans
        sink.line(format_args!("{SEPARATOR}\n"));
    }
}

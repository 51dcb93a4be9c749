//! ESP32 local area network scanner
//!
//! Puts the radio in station mode, runs an active scan over every channel
//! at a fixed interval and prints the discovered access points as a table.
//!
//! ## Example
//!
//! ```no_run
//! use lan_scanner::{allocator, scanner};
//! use embassy_executor::Spawner;
//!
//! #[esp_rtos::main]
//! async fn main(spawner: Spawner) -> ! {
//!     allocator::init_heap();
//!
//!     // Bring up the radio and spawn the scan task
//!     // ... (see bin/main.rs for complete example)
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

/// Memory allocation configuration
pub mod allocator;

/// Compile-time settings
pub mod config;

/// Fatal error taxonomy
pub mod error;

/// Access point records and their display helpers
pub mod record;

/// Scan table rendering and console output
pub mod report;

/// Radio bring-up and the scan loop
pub mod scanner;

//! Heap setup for the radio stack.
//!
//! `esp-radio` allocates its buffers and the scan result list from the
//! global heap, so both regions have to be registered before the radio is
//! initialized.

use crate::config::{MAIN_HEAP_SIZE, RECLAIMED_HEAP_SIZE};

/// Register the heap regions used by the radio and the scan buffers.
///
/// Two regions are added:
/// - RAM reclaimed from the second stage bootloader
/// - a main heap for driver buffers and per-cycle record lists
///
/// Must be called once, before [`crate::scanner::init_station`].
pub fn init_heap() {
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: RECLAIMED_HEAP_SIZE);
    esp_alloc::heap_allocator!(size: MAIN_HEAP_SIZE);
}

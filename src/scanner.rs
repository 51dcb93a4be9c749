//! Radio bring-up and the scan-and-report loop.
//!
//! One cycle is: active scan over every channel, fetch the records, print
//! the table, sleep [`SCAN_INTERVAL`]. The cycle never branches on what the
//! scan found and never ends on its own.

use alloc::vec::Vec;
use core::convert::Infallible;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{ScanConfig, ScanTypeConfig, WifiController, WifiMode};
use static_cell::StaticCell;

use crate::config::{ACTIVE_DWELL_MAX_MS, ACTIVE_DWELL_MIN_MS, LOG_TAG, RADIO_SETTLE, SCAN_INTERVAL};
use crate::error::{ScanError, fatal};
use crate::record::AccessPointRecord;
use crate::report::{Console, LineSink, ScanReport};

// Embassy tasks only take `'static` borrows, so the driver handles are
// parked here once at bring-up.
static RADIO_INIT: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();
static WIFI_CONTROLLER: StaticCell<WifiController<'static>> = StaticCell::new();

/// How each scan is performed and how long to wait between scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanSettings {
    /// Minimum dwell time per channel.
    pub dwell_min: core::time::Duration,
    /// Maximum dwell time per channel.
    pub dwell_max: core::time::Duration,
    /// Include networks that do not broadcast their SSID.
    pub show_hidden: bool,
    /// Pause after each report.
    pub interval: Duration,
}

impl ScanSettings {
    /// Active scan of all channels, hidden networks included, 100-200 ms
    /// per channel, every 3 s.
    pub const fn new() -> Self {
        Self {
            dwell_min: core::time::Duration::from_millis(ACTIVE_DWELL_MIN_MS),
            dwell_max: core::time::Duration::from_millis(ACTIVE_DWELL_MAX_MS),
            show_hidden: true,
            interval: SCAN_INTERVAL,
        }
    }

    /// Replace the pause between cycles.
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Driver configuration for one scan. No SSID, BSSID or channel filter,
    /// so every channel is visited.
    pub fn scan_config(&self) -> ScanConfig<'static> {
        ScanConfig::default()
            .with_show_hidden(self.show_hidden)
            .with_scan_type(ScanTypeConfig::Active {
                min: self.dwell_min,
                max: self.dwell_max,
            })
    }
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that can run a blocking scan and hand back its results.
#[allow(async_fn_in_trait)]
pub trait ScanSource {
    /// Scan once and return every record found, in driver order.
    ///
    /// The returned buffer belongs to the caller's cycle.
    async fn scan(&mut self, settings: &ScanSettings) -> Result<Vec<AccessPointRecord>, ScanError>;
}

impl<S: ScanSource + ?Sized> ScanSource for &mut S {
    async fn scan(&mut self, settings: &ScanSettings) -> Result<Vec<AccessPointRecord>, ScanError> {
        (**self).scan(settings).await
    }
}

impl ScanSource for WifiController<'_> {
    async fn scan(&mut self, settings: &ScanSettings) -> Result<Vec<AccessPointRecord>, ScanError> {
        let found = self
            .scan_with_config_async(settings.scan_config())
            .await
            .map_err(ScanError::Scan)?;

        defmt::debug!("scan returned {} access points", found.len());

        Ok(found.iter().map(AccessPointRecord::from).collect())
    }
}

/// Scan once and print the result table.
///
/// Returns the number of networks found. The record buffer is dropped
/// before this returns, whether or not anything was found.
pub async fn run_cycle<S, L>(
    source: &mut S,
    settings: &ScanSettings,
    sink: &mut L,
) -> Result<usize, ScanError>
where
    S: ScanSource + ?Sized,
    L: LineSink + ?Sized,
{
    let records = source.scan(settings).await?;
    let report = ScanReport::new(&records);
    report.render(sink);
    Ok(report.len())
}

/// The endless scan, report, wait cycle.
pub struct ScanLoop<S, L> {
    source: S,
    sink: L,
    settings: ScanSettings,
}

impl<S: ScanSource, L: LineSink> ScanLoop<S, L> {
    /// Build a loop over `source`, printing to `sink`.
    pub fn new(source: S, sink: L, settings: ScanSettings) -> Self {
        Self {
            source,
            sink,
            settings,
        }
    }

    /// One cycle followed by the configured pause.
    pub async fn tick(&mut self) -> Result<usize, ScanError> {
        let count = run_cycle(&mut self.source, &self.settings, &mut self.sink).await?;
        Timer::after(self.settings.interval).await;
        Ok(count)
    }

    /// Cycle until a driver call fails.
    pub async fn run(&mut self) -> Result<Infallible, ScanError> {
        loop {
            self.tick().await?;
        }
    }
}

/// Embassy task that scans for WiFi networks forever.
///
/// A failed scan is fatal.
#[embassy_executor::task]
pub async fn scan_task(controller: &'static mut WifiController<'static>) {
    let mut scan_loop = ScanLoop::new(controller, Console::new(LOG_TAG), ScanSettings::new());
    match scan_loop.run().await {
        Ok(never) => match never {},
        Err(err) => fatal(err),
    }
}

/// Bring the radio up in station mode.
///
/// Sequence: radio controller, WiFi controller, station mode, start. The
/// controller is parked in a static cell so it can be handed to a task.
///
/// # Errors
///
/// Returns the first failing step as a [`ScanError`].
///
/// # Panics
///
/// Panics if called more than once.
pub async fn init_station(
    device: WIFI<'static>,
) -> Result<&'static mut WifiController<'static>, ScanError> {
    let radio_init = esp_radio::init().map_err(ScanError::RadioInit)?;
    let radio_init = RADIO_INIT.init(radio_init);
    println!("Radio initialized!");

    let (wifi_controller, _interfaces) =
        esp_radio::wifi::new(radio_init, device, Default::default())
            .map_err(ScanError::Controller)?;
    let wifi_controller = WIFI_CONTROLLER.init(wifi_controller);
    println!("WiFi controller created!");

    wifi_controller
        .set_mode(WifiMode::Sta)
        .map_err(ScanError::SetMode)?;

    Timer::after(RADIO_SETTLE).await;

    wifi_controller.start_async().await.map_err(ScanError::Start)?;
    println!("WiFi controller started!");

    Timer::after(RADIO_SETTLE).await;

    Ok(wifi_controller)
}

/// Bring the radio up and spawn [`scan_task`].
///
/// # Errors
///
/// Fails if bring-up fails or the task pool is exhausted.
pub async fn start(spawner: Spawner, device: WIFI<'static>) -> Result<(), ScanError> {
    let controller = init_station(device).await?;
    let token = scan_task(controller).map_err(ScanError::Spawn)?;
    spawner.spawn(token);
    defmt::info!("scan task spawned");
    Ok(())
}

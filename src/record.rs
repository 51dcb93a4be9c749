//! Access point records as the scanner sees them.
//!
//! The driver hands back [`AccessPointInfo`]; the scanner narrows it to the
//! five fields it prints and to a closed set of authentication modes.

use alloc::string::String;
use core::fmt;

use esp_radio::wifi::{AccessPointInfo, AuthMethod};

/// Printed in place of an empty (hidden) SSID.
pub const HIDDEN_SSID: &str = "NONE";

/// Longest SSID an 802.11 beacon can carry, in bytes.
pub const SSID_MAX_LEN: usize = 32;

/// Return `ssid`, or [`HIDDEN_SSID`] when it is empty or starts with NUL.
pub fn ssid_or_none(ssid: &str) -> &str {
    match ssid.as_bytes().first() {
        None | Some(0) => HIDDEN_SSID,
        Some(_) => ssid,
    }
}

/// Copy `ssid`, cut to at most [`SSID_MAX_LEN`] bytes on a char boundary.
pub fn clamp_ssid(ssid: &str) -> String {
    let mut end = ssid.len().min(SSID_MAX_LEN);
    while !ssid.is_char_boundary(end) {
        end -= 1;
    }
    String::from(&ssid[..end])
}

/// Authentication mode advertised by an access point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum AuthMode {
    /// No authentication.
    Open,
    /// WEP.
    Wep,
    /// WPA personal.
    WpaPsk,
    /// WPA2 personal.
    Wpa2Psk,
    /// WPA or WPA2 personal.
    WpaWpa2Psk,
    /// WPA2 enterprise.
    Wpa2Enterprise,
    /// WPA3 personal.
    Wpa3Psk,
    /// WPA2 or WPA3 personal.
    Wpa2Wpa3Psk,
    /// Anything else the driver reports.
    Unknown,
}

impl AuthMode {
    /// Map a raw ESP-IDF `wifi_auth_mode_t` value.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => AuthMode::Open,
            1 => AuthMode::Wep,
            2 => AuthMode::WpaPsk,
            3 => AuthMode::Wpa2Psk,
            4 => AuthMode::WpaWpa2Psk,
            5 => AuthMode::Wpa2Enterprise,
            6 => AuthMode::Wpa3Psk,
            7 => AuthMode::Wpa2Wpa3Psk,
            _ => AuthMode::Unknown,
        }
    }

    /// Short label used in the scan table.
    pub fn label(self) -> &'static str {
        match self {
            AuthMode::Open => "OPEN",
            AuthMode::Wep => "WEP",
            AuthMode::WpaPsk => "WPA",
            AuthMode::Wpa2Psk => "WPA2",
            AuthMode::WpaWpa2Psk => "WPA/WPA2",
            AuthMode::Wpa2Enterprise => "WPA2-E",
            AuthMode::Wpa3Psk => "WPA3",
            AuthMode::Wpa2Wpa3Psk => "WPA2/3",
            AuthMode::Unknown => "UNK",
        }
    }
}

impl From<Option<AuthMethod>> for AuthMode {
    fn from(method: Option<AuthMethod>) -> Self {
        match method {
            Some(AuthMethod::None) => AuthMode::Open,
            Some(AuthMethod::Wep) => AuthMode::Wep,
            Some(AuthMethod::Wpa) => AuthMode::WpaPsk,
            Some(AuthMethod::Wpa2Personal) => AuthMode::Wpa2Psk,
            Some(AuthMethod::WpaWpa2Personal) => AuthMode::WpaWpa2Psk,
            Some(AuthMethod::Wpa2Enterprise) => AuthMode::Wpa2Enterprise,
            Some(AuthMethod::Wpa3Personal) => AuthMode::Wpa3Psk,
            Some(AuthMethod::Wpa2Wpa3Personal) => AuthMode::Wpa2Wpa3Psk,
            _ => AuthMode::Unknown,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Hardware address of an access point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct Bssid(pub [u8; 6]);

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

/// One network found by a scan.
///
/// Lives only for the cycle that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPointRecord {
    /// Network name, empty for hidden networks.
    pub ssid: String,
    /// Received signal strength in dBm.
    pub rssi: i8,
    /// Primary channel.
    pub channel: u8,
    /// Advertised authentication mode.
    pub auth: AuthMode,
    /// Hardware address.
    pub bssid: Bssid,
}

impl AccessPointRecord {
    /// SSID as it should be printed.
    pub fn display_ssid(&self) -> &str {
        ssid_or_none(&self.ssid)
    }
}

impl From<&AccessPointInfo> for AccessPointRecord {
    fn from(ap: &AccessPointInfo) -> Self {
        AccessPointRecord {
            ssid: clamp_ssid(ap.ssid.as_str()),
            rssi: ap.signal_strength,
            channel: ap.channel,
            auth: ap.auth_method.into(),
            bssid: Bssid(ap.bssid),
        }
    }
}

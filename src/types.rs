//! Core types for the Signal K general purpose plugin

use crate::error::Error;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

/// Plugin options supplied by the host
///
/// Missing fields fall back to their defaults. The host schema types both
/// options as JSON numbers; [`PluginSettings::from_options`] rounds
/// fractional values to the nearest whole number.
///
/// # Example
/// ```
/// use heading_mean::PluginSettings;
///
/// let settings: PluginSettings = serde_json::from_str(r#"{"size": 20}"#).unwrap();
/// assert_eq!(settings.size, 20);
/// assert_eq!(settings.period, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Number of heading observations kept for the circular mean
    pub size: usize,
    /// Subscription period in milliseconds
    pub period: u64,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            size: 10,
            period: 1000,
        }
    }
}

impl PluginSettings {
    /// Read settings from the host's options object; `null` means defaults
    ///
    /// # Example
    /// ```
    /// use heading_mean::PluginSettings;
    /// use serde_json::json;
    ///
    /// let settings = PluginSettings::from_options(&json!({"period": 500.5})).unwrap();
    /// assert_eq!(settings.period, 501);
    /// assert_eq!(settings.size, 10);
    /// ```
    pub fn from_options(options: &serde_json::Value) -> Result<Self, Error> {
        if options.is_null() {
            return Ok(Self::default());
        }

        let options = RawOptions::deserialize(options)?;
        let defaults = Self::default();

        Ok(Self {
            size: match whole_number("size", options.size)? {
                Some(size) => usize::try_from(size).map_err(|_| {
                    Error::InvalidSettings(format!("size {} is too large", size))
                })?,
                None => defaults.size,
            },
            period: whole_number("period", options.period)?.unwrap_or(defaults.period),
        })
    }

    /// Reject values the plugin cannot run with
    pub fn validate(&self) -> Result<(), Error> {
        if self.size == 0 {
            return Err(Error::InvalidSettings("size must be at least 1".into()));
        }
        if self.period == 0 {
            return Err(Error::InvalidSettings("period must be at least 1 ms".into()));
        }
        Ok(())
    }
}

/// Options as typed by the host schema, before rounding
#[derive(Deserialize)]
struct RawOptions {
    size: Option<f64>,
    period: Option<f64>,
}

/// Largest accepted option value
const MAX_OPTION_VALUE: f64 = u32::MAX as f64;

/// Round a JSON number to a non-negative integer
fn whole_number(name: &str, value: Option<f64>) -> Result<Option<u64>, Error> {
    let Some(value) = value else {
        return Ok(None);
    };

    let rounded = value.round();
    if !(0.0..=MAX_OPTION_VALUE).contains(&rounded) {
        return Err(Error::InvalidSettings(format!(
            "{} must be a whole number between 0 and {}, got {}",
            name, MAX_OPTION_VALUE, value
        )));
    }

    Ok(Some(rounded as u64))
}

/// Signal K paths the plugin subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKPath {
    /// Latitude/longitude object in decimal degrees
    #[serde(rename = "navigation.position")]
    Position,
    /// Speed over ground, m/s
    #[serde(rename = "navigation.speedOverGround")]
    SpeedOverGround,
    /// Course over ground (true), radians
    #[serde(rename = "navigation.courseOverGroundTrue")]
    CourseOverGroundTrue,
    /// Speed through water, m/s
    #[serde(rename = "navigation.speedThroughWater")]
    SpeedThroughWater,
    /// Apparent wind speed, m/s
    #[serde(rename = "environment.wind.speedApparent")]
    WindSpeedApparent,
    /// Apparent wind angle, radians
    #[serde(rename = "environment.wind.angleApparent")]
    WindAngleApparent,
    /// Heading (true), radians
    #[serde(rename = "navigation.headingTrue")]
    HeadingTrue,
    /// Roll (heel), radians
    #[serde(rename = "navigation.attitude.roll")]
    AttitudeRoll,
}

impl SignalKPath {
    /// Every subscribed path, in subscription order
    pub const ALL: [SignalKPath; 8] = [
        SignalKPath::Position,
        SignalKPath::SpeedOverGround,
        SignalKPath::CourseOverGroundTrue,
        SignalKPath::SpeedThroughWater,
        SignalKPath::WindSpeedApparent,
        SignalKPath::WindAngleApparent,
        SignalKPath::HeadingTrue,
        SignalKPath::AttitudeRoll,
    ];

    /// Dotted Signal K path string
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKPath::Position => "navigation.position",
            SignalKPath::SpeedOverGround => "navigation.speedOverGround",
            SignalKPath::CourseOverGroundTrue => "navigation.courseOverGroundTrue",
            SignalKPath::SpeedThroughWater => "navigation.speedThroughWater",
            SignalKPath::WindSpeedApparent => "environment.wind.speedApparent",
            SignalKPath::WindAngleApparent => "environment.wind.angleApparent",
            SignalKPath::HeadingTrue => "navigation.headingTrue",
            SignalKPath::AttitudeRoll => "navigation.attitude.roll",
        }
    }
}

impl fmt::Display for SignalKPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignalKPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalKPath::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| Error::UnknownPath(s.to_string()))
    }
}

/// Vessel position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Signal K delta message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default)]
    pub updates: Vec<Update>,
}

/// One update inside a delta, sharing a timestamp
///
/// Updates without values (for example meta-only updates) decode with an
/// empty `values` list, whether the key is missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub values: Vec<PathValue>,
}

/// Path/value pair carried by an update
///
/// A missing `value` decodes as `null` and a missing `path` as an empty
/// string, so one incomplete entry is skipped on its own instead of failing
/// the whole delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathValue {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PathValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PathValue>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Subscription request handed to the host on start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub context: String,
    pub subscribe: Vec<SubscribeEntry>,
}

/// Single path subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeEntry {
    pub path: SignalKPath,
    /// Delivery period in milliseconds
    pub period: u64,
}

impl Subscription {
    /// Subscribe to every path for the own vessel at a fixed period
    pub fn for_self(period: u64) -> Self {
        Self {
            context: "self".to_string(),
            subscribe: SignalKPath::ALL
                .into_iter()
                .map(|path| SubscribeEntry { path, period })
                .collect(),
        }
    }
}

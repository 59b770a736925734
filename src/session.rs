//! Per-start session state: latest observed values and heading history

use crate::error::{Error, Result};
use crate::math::radians_to_degrees;
use crate::types::{Delta, PluginSettings, Position, SignalKPath};
use crate::window::HeadingWindow;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Latest values received for the subscribed paths
///
/// A session lives from `start` to `stop`. Every field is `None` until the
/// host delivers a value for the matching path.
#[derive(Debug, Clone)]
pub struct Session {
    settings: PluginSettings,
    timestamp: Option<String>,
    position: Option<Position>,
    speed_over_ground: Option<f64>,
    course_over_ground: Option<f64>,
    speed_through_water: Option<f64>,
    wind_speed_apparent: Option<f64>,
    wind_angle_apparent: Option<f64>,
    heading_true: Option<f64>,
    heel: Option<f64>,
    headings: HeadingWindow,
}

impl Session {
    pub fn new(settings: PluginSettings) -> Self {
        Self {
            settings,
            timestamp: None,
            position: None,
            speed_over_ground: None,
            course_over_ground: None,
            speed_through_water: None,
            wind_speed_apparent: None,
            wind_angle_apparent: None,
            heading_true: None,
            heel: None,
            headings: HeadingWindow::new(settings.size),
        }
    }

    /// Apply every value in a delta
    ///
    /// Unknown paths are skipped. Values with the wrong shape are logged and
    /// skipped without affecting the rest of the delta.
    ///
    /// # Returns
    /// Number of values stored
    pub fn apply_delta(&mut self, delta: &Delta) -> usize {
        let mut applied = 0;

        for update in &delta.updates {
            if update.timestamp.is_some() {
                self.timestamp.clone_from(&update.timestamp);
            }
            let timestamp = update.timestamp.as_deref().unwrap_or("-");

            for path_value in &update.values {
                let Ok(path) = path_value.path.parse::<SignalKPath>() else {
                    continue;
                };

                match self.apply_value(path, &path_value.value) {
                    Ok(()) => {
                        debug!("timestamp: {}, {}: {}", timestamp, path, path_value.value);
                        applied += 1;
                    }
                    Err(e) => warn!("Skipping value at {}: {}", timestamp, e),
                }
            }
        }

        applied
    }

    /// Store a single value for a known path
    pub fn apply_value(&mut self, path: SignalKPath, value: &Value) -> Result<()> {
        match path {
            SignalKPath::Position => self.position = Some(position_value(path, value)?),
            SignalKPath::SpeedOverGround => self.speed_over_ground = Some(number_value(path, value)?),
            SignalKPath::CourseOverGroundTrue => {
                self.course_over_ground = Some(number_value(path, value)?)
            }
            SignalKPath::SpeedThroughWater => {
                self.speed_through_water = Some(number_value(path, value)?)
            }
            SignalKPath::WindSpeedApparent => {
                self.wind_speed_apparent = Some(number_value(path, value)?)
            }
            SignalKPath::WindAngleApparent => {
                self.wind_angle_apparent = Some(number_value(path, value)?)
            }
            SignalKPath::HeadingTrue => {
                let heading = number_value(path, value)?;
                self.heading_true = Some(heading);
                self.headings.push(heading);
            }
            SignalKPath::AttitudeRoll => self.heel = Some(number_value(path, value)?),
        }

        Ok(())
    }

    /// Circular mean of the recent true headings in radians, NaN if undefined
    pub fn mean_heading(&self) -> f64 {
        self.headings.mean()
    }

    /// Circular mean of the recent true headings in degrees, NaN if undefined
    pub fn mean_heading_degrees(&self) -> f64 {
        radians_to_degrees(self.mean_heading())
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn headings(&self) -> &HeadingWindow {
        &self.headings
    }

    /// Timestamp of the most recent update that carried one
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn speed_over_ground(&self) -> Option<f64> {
        self.speed_over_ground
    }

    pub fn course_over_ground(&self) -> Option<f64> {
        self.course_over_ground
    }

    pub fn speed_through_water(&self) -> Option<f64> {
        self.speed_through_water
    }

    pub fn wind_speed_apparent(&self) -> Option<f64> {
        self.wind_speed_apparent
    }

    pub fn wind_angle_apparent(&self) -> Option<f64> {
        self.wind_angle_apparent
    }

    pub fn heading_true(&self) -> Option<f64> {
        self.heading_true
    }

    pub fn heel(&self) -> Option<f64> {
        self.heel
    }
}

fn number_value(path: SignalKPath, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| Error::UnexpectedValue {
        path: path.to_string(),
        expected: "number",
    })
}

fn position_value(path: SignalKPath, value: &Value) -> Result<Position> {
    Position::deserialize(value).map_err(|_| Error::UnexpectedValue {
        path: path.to_string(),
        expected: "object with latitude and longitude",
    })
}

//! Heading mean - circular statistics and session state for a Signal K plugin
//!
//! This crate provides the core of the Signal K "general purpose" plugin: a
//! circular (vector) mean of angles in radians, together with the state the
//! plugin keeps between host callbacks.
//!
//! Averaging angles arithmetically breaks at the 0/2π wraparound: the mean of
//! 359° and 1° comes out as 180°. The circular mean averages unit vectors
//! instead and converts the result back to an angle.
//!
//! # Features
//!
//! - Circular mean with an explicit NaN result for empty or cancelling input
//! - Degree/radian conversion and `[0, 2π)` normalization
//! - Rolling window of recent headings sized from the plugin options
//! - Per-session cache of the subscribed navigation and wind values
//! - Plugin lifecycle (`start`, `handle_delta`, `stop`) driven by the host
//!
//! # Quick Start
//!
//! ```rust
//! use heading_mean::{circular_mean, degrees_to_radians, radians_to_degrees};
//!
//! let headings = [359.0, 1.0, 3.0].map(degrees_to_radians);
//! let mean = radians_to_degrees(circular_mean(&headings));
//!
//! assert!((mean - 1.0).abs() < 1e-6);
//! ```
//!
//! The mean is NaN when it is undefined, so check before use:
//!
//! ```rust
//! use heading_mean::circular_mean;
//! use std::f64::consts::PI;
//!
//! assert!(circular_mean(&[]).is_nan());
//! assert!(circular_mean(&[0.0, PI]).is_nan());
//! ```

mod error;
mod math;
pub mod mean;
pub mod plugin;
pub mod session;
mod types;
pub mod window;

// Re-export all public types and functions
pub use error::{Error, Result};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, degrees_to_radians, normalize_angle, radians_to_degrees};
pub use mean::{DEGENERATE_RESULTANT_LENGTH, circular_mean, mean_resultant_length};
pub use plugin::{PLUGIN_DESCRIPTION, PLUGIN_ID, PLUGIN_NAME, Plugin};
pub use session::Session;
pub use types::*;
pub use window::HeadingWindow;

//! Host-facing plugin lifecycle

use crate::error::Result;
use crate::session::Session;
use crate::types::{Delta, PluginSettings, Subscription};
use log::debug;
use serde_json::{Value, json};

pub const PLUGIN_ID: &str = "sk-general-purpose";
pub const PLUGIN_NAME: &str = "GP Plugin";
pub const PLUGIN_DESCRIPTION: &str = "Plugin used for general purpose testing";

/// Signal K general purpose plugin
///
/// The host owns delivery: it calls [`Plugin::start`] with the user's
/// options, registers the returned subscription, forwards every delta to
/// [`Plugin::handle_delta`] and finally calls [`Plugin::stop`].
///
/// # Example
/// ```
/// use heading_mean::Plugin;
/// use serde_json::json;
///
/// let mut plugin = Plugin::new();
/// let subscription = plugin.start(&json!({"size": 5, "period": 500})).unwrap();
/// assert_eq!(subscription.subscribe.len(), 8);
///
/// plugin
///     .handle_delta_json(r#"{"updates":[{"values":[{"path":"navigation.headingTrue","value":0.5}]}]}"#)
///     .unwrap();
/// assert!((plugin.session().unwrap().mean_heading() - 0.5).abs() < 1e-12);
///
/// plugin.stop();
/// assert!(!plugin.is_running());
/// ```
#[derive(Debug, Default)]
pub struct Plugin {
    session: Option<Session>,
}

impl Plugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON schema of the options object shown by the host
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "title": "General purpose plugin",
            "description": "General purpose testing plugin",
            "properties": {
                "size": {
                    "type": "number",
                    "title": "mean computation array size",
                    "default": 10
                },
                "period": {
                    "type": "number",
                    "title": "Period (ms)",
                    "default": 1000
                }
            }
        })
    }

    /// Start a fresh session from host options
    ///
    /// Any previous session is discarded.
    ///
    /// # Returns
    /// Subscription the host should register on behalf of the plugin
    pub fn start(&mut self, options: &Value) -> Result<Subscription> {
        let settings = PluginSettings::from_options(options)?;
        settings.validate()?;

        debug!("Plugin started with {:?}", settings);
        self.session = Some(Session::new(settings));

        Ok(Subscription::for_self(settings.period))
    }

    /// Forward a delta to the running session
    ///
    /// # Returns
    /// Number of values stored, 0 when the plugin is stopped
    pub fn handle_delta(&mut self, delta: &Delta) -> usize {
        match self.session.as_mut() {
            Some(session) => session.apply_delta(delta),
            None => 0,
        }
    }

    /// Decode a delta from JSON text and forward it
    pub fn handle_delta_json(&mut self, text: &str) -> Result<usize> {
        let delta: Delta = serde_json::from_str(text)?;
        Ok(self.handle_delta(&delta))
    }

    /// Drop the session and everything it cached
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            debug!("Plugin stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

//! Application session: one calculator plus the preferences it was started
//! with.
//!
//! Opening a session loads the config (falling back to defaults) and seeds
//! the calculator's history from it. Saving copies the history back and
//! writes the file. Neither step is allowed to take the application down.

use crate::config::{Config, ConfigStore, PathProvider, Theme};
use crate::core::Calculator;

/// A running calculator with its persisted preferences
#[derive(Debug)]
pub struct Session<P: PathProvider> {
    calculator: Calculator,
    config: Config,
    store: ConfigStore<P>,
}

impl<P: PathProvider> Session<P> {
    /// Opens a session, loading preferences from `store`.
    ///
    /// Load failures are logged and replaced by [`Config::default`].
    pub fn open(store: ConfigStore<P>) -> Self {
        let config = match store.load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load config; using defaults");
                Config::default()
            }
        };
        Self::with_config(store, config)
    }

    /// Starts a session from an already loaded config
    pub fn with_config(store: ConfigStore<P>, config: Config) -> Self {
        let mut calculator = Calculator::new();
        calculator.set_history(config.history.clone());
        tracing::info!(
            entries = config.history.len(),
            theme = config.theme.name(),
            "session opened"
        );
        Self {
            calculator,
            config,
            store,
        }
    }

    /// Returns the calculator
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the calculator for input
    pub fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    /// Returns the preferences as last synced with the calculator
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the config store
    pub fn store(&self) -> &ConfigStore<P> {
        &self.store
    }

    /// Returns the current theme
    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Switches between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        self.config.theme = self.config.theme.toggle();
        self.config.theme
    }

    /// Sets the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
    }

    /// Records a preferred window size, written on the next save
    pub fn set_window_size(&mut self, width: i64, height: i64) {
        self.config.window_width = width;
        self.config.window_height = height;
    }

    /// Copies the history into the config and writes it.
    ///
    /// Returns false if the write failed; the failure is logged, not raised.
    pub fn save(&mut self) -> bool {
        self.config.history = self.calculator.history().entries().to_vec();
        match self.store.save(&self.config) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save config");
                false
            }
        }
    }

    /// Saves and ends the session
    pub fn close(mut self) -> bool {
        let saved = self.save();
        tracing::info!(saved, "session closed");
        saved
    }
}

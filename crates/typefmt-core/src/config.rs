//! Engine options.
//!
//! [`FormatOptions::default`] is what [`format`](crate::format) uses. Tools
//! that want the environment to steer the engine read [`env_options`], which
//! parses these variables once per process:
//! - `TYPEFMT_TRIGGER`: trigger character (default `%`).
//! - `TYPEFMT_DEFAULT_PRECISION`: precision used by `%f` when none is given (default 6).
//! - `TYPEFMT_MAX_WIDTH`: upper bound for any width or precision (default 1 MiB).
//!
//! Unparseable values fall back to the default instead of failing.

use std::sync::OnceLock;

use crate::error::ConfigError;

pub const DEFAULT_TRIGGER: char = '%';
pub const DEFAULT_PRECISION: usize = 6;
pub const DEFAULT_MAX_WIDTH: usize = 1 << 20;

/// Options shared by every stage of one format call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    trigger: char,
    pub default_precision: usize,
    pub max_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER,
            default_precision: DEFAULT_PRECISION,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub const fn trigger(&self) -> char {
        self.trigger
    }

    /// The trigger as a byte; always ASCII.
    #[must_use]
    pub const fn trigger_byte(&self) -> u8 {
        self.trigger as u8
    }

    /// Replace the trigger character.
    ///
    /// The trigger must be ASCII punctuation that cannot also start a flag,
    /// width or precision.
    pub fn with_trigger(mut self, trigger: char) -> Result<Self, ConfigError> {
        if !is_valid_trigger(trigger) {
            return Err(ConfigError::InvalidTrigger(trigger));
        }
        self.trigger = trigger;
        Ok(self)
    }

    #[must_use]
    pub const fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Result<Self, ConfigError> {
        if max_width == 0 {
            return Err(ConfigError::ZeroMaxWidth);
        }
        self.max_width = max_width;
        Ok(self)
    }

    /// Build options from `TYPEFMT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(trigger) = lookup("TYPEFMT_TRIGGER")
            .and_then(|v| single_char(&v))
            .and_then(|c| options.with_trigger(c).ok())
        {
            options = trigger;
        }
        if let Some(precision) =
            lookup("TYPEFMT_DEFAULT_PRECISION").and_then(|v| parse_usize_loose(&v))
        {
            options.default_precision = precision;
        }
        if let Some(limited) = lookup("TYPEFMT_MAX_WIDTH")
            .and_then(|v| parse_usize_loose(&v))
            .and_then(|w| options.with_max_width(w).ok())
        {
            options = limited;
        }
        options
    }
}

static ENV_OPTIONS: OnceLock<FormatOptions> = OnceLock::new();

/// Options from the environment (read on first call, cached thereafter).
#[must_use]
pub fn env_options() -> FormatOptions {
    *ENV_OPTIONS.get_or_init(FormatOptions::from_env)
}

fn is_valid_trigger(c: char) -> bool {
    c.is_ascii_punctuation() && !matches!(c, '-' | '+' | '#' | '.')
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.trim().chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_usize_loose(value: &str) -> Option<usize> {
    value.trim().replace('_', "").parse().ok()
}

//! Run configuration for vscope.
//!
//! A [`ScopeConfig`] is built once by the CLI layer, validated, and then passed
//! by reference into accumulation and rendering. Nothing mutates it afterwards.

use std::num::NonZeroU64;

use crate::histogram::MAX_GRID_SIZE;

/// Pair window used by live mode when no explicit byte limit is given.
pub const DEFAULT_LIVE_LIMIT: u64 = 1024;

/// Cell coloring scheme for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    None,
    /// Blue→green→red truecolor ramp.
    Heat,
    /// Gray background with a contrasting black or white glyph.
    Grayscale,
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    /// Binary PGM (P5) image.
    Image,
}

/// Validated, immutable configuration for a vscope run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
    pub size: u16,
    pub byte_limit: Option<NonZeroU64>,
    pub threshold: Option<u32>,
    pub color: ColorMode,
    pub output: OutputMode,
    pub live: bool,
}

impl ScopeConfig {
    pub fn builder(size: u16) -> ConfigBuilder {
        ConfigBuilder::new(size)
    }
}

/// Errors detected while validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot use both color themes at once")]
    ConflictingColors,

    #[error("Cannot output image data in live mode")]
    LiveImage,

    #[error("Invalid grid size {0}: must be between 1 and {max}", max = MAX_GRID_SIZE)]
    InvalidSize(u16),
}

/// Collects raw settings and checks them in one place.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    size: u16,
    byte_limit: Option<NonZeroU64>,
    threshold: Option<u32>,
    heat: bool,
    grayscale: bool,
    image: bool,
    live: bool,
}

impl ConfigBuilder {
    pub fn new(size: u16) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn byte_limit(mut self, limit: Option<NonZeroU64>) -> Self {
        self.byte_limit = limit;
        self
    }

    pub fn threshold(mut self, threshold: Option<u32>) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn heat(mut self, enabled: bool) -> Self {
        self.heat = enabled;
        self
    }

    pub fn grayscale(mut self, enabled: bool) -> Self {
        self.grayscale = enabled;
        self
    }

    pub fn image(mut self, enabled: bool) -> Self {
        self.image = enabled;
        self
    }

    pub fn live(mut self, enabled: bool) -> Self {
        self.live = enabled;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> Result<ScopeConfig, ConfigError> {
        if self.heat && self.grayscale {
            return Err(ConfigError::ConflictingColors);
        }
        if self.image && self.live {
            return Err(ConfigError::LiveImage);
        }
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidSize(self.size));
        }

        let color = if self.heat {
            ColorMode::Heat
        } else if self.grayscale {
            ColorMode::Grayscale
        } else {
            ColorMode::None
        };

        let output = if self.image {
            OutputMode::Image
        } else {
            OutputMode::Text
        };

        // Without a window, live mode would read to end-of-input before drawing once.
        let byte_limit = match self.byte_limit {
            None if self.live => NonZeroU64::new(DEFAULT_LIVE_LIMIT),
            limit => limit,
        };

        Ok(ScopeConfig {
            size: self.size,
            byte_limit,
            threshold: self.threshold,
            color,
            output,
            live: self.live,
        })
    }
}

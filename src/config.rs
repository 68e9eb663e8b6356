use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Error;
use crate::slide::Slide;

/// Caller-facing construction record. Everything is optional at the
/// parsing layer; [`SliderOptions::validated`] enforces what is actually
/// required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SliderOptions {
    /// Selector of the mount element the slider attaches to.
    pub root: Option<String>,
    /// Ordered slide sequence; at least one entry is required.
    pub slides: Option<Vec<Slide>>,
    /// Time between automatic slide switches.
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
    /// Per-slide display width in pixels (not adaptive).
    pub width: u32,
    /// Panel height in pixels.
    pub height: u32,
    /// Whether reaching the last slide wraps back to the first; when
    /// false the slider freezes on the last slide.
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl SliderOptions {
    const fn default_delay() -> Duration {
        Duration::from_millis(2500)
    }

    const fn default_width() -> u32 {
        750
    }

    const fn default_height() -> u32 {
        400
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Validate the record and freeze it into an immutable configuration.
    ///
    /// This is the slider's only failure surface before lifecycle
    /// operations touch the rendering surface.
    pub fn validated(self) -> Result<SliderConfig, Error> {
        let root = self.root.ok_or(Error::MissingParameter { name: "root" })?;
        let slides = self
            .slides
            .ok_or(Error::MissingParameter { name: "slides" })?;
        if slides.is_empty() {
            return Err(Error::InvalidConfiguration {
                reason: format!("{} `slides`", slides.len()),
            });
        }
        if self.delay.is_zero() {
            return Err(Error::InvalidConfiguration {
                reason: "a zero `delay`".to_owned(),
            });
        }
        if self.width == 0 {
            return Err(Error::InvalidConfiguration {
                reason: "a zero `width`".to_owned(),
            });
        }
        if self.height == 0 {
            return Err(Error::InvalidConfiguration {
                reason: "a zero `height`".to_owned(),
            });
        }
        Ok(SliderConfig {
            root,
            slides,
            delay: self.delay,
            width: self.width,
            height: self.height,
            looping: self.looping,
        })
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            root: None,
            slides: None,
            delay: Self::default_delay(),
            width: Self::default_width(),
            height: Self::default_height(),
            looping: true,
        }
    }
}

/// Validated, immutable slider configuration. `slides` is never empty and
/// the geometry fields are nonzero.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub root: String,
    pub slides: Vec<Slide>,
    pub delay: Duration,
    pub width: u32,
    pub height: u32,
    pub looping: bool,
}

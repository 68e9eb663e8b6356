use serde::Deserialize;

/// One unit of slider content.
///
/// Field presence picks the variant when deserializing: `markup` wins over
/// `text` + `background`, and a mapping satisfying neither shape is
/// rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Slide {
    /// Raw markup fragment injected into the panel unescaped. The caller
    /// is responsible for sanitizing it.
    Markup { markup: String },
    /// Display text over a background.
    TextBackground {
        text: String,
        /// Any valid CSS background value, or an http(s) URL to an image.
        background: String,
    },
}

impl Slide {
    /// Markup-based slide.
    pub fn markup(markup: impl Into<String>) -> Self {
        Self::Markup {
            markup: markup.into(),
        }
    }

    /// Text slide over a flat color, gradient, or image-URL background.
    pub fn text(text: impl Into<String>, background: impl Into<String>) -> Self {
        Self::TextBackground {
            text: text.into(),
            background: background.into(),
        }
    }
}

fn is_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// CSS background-image term for a configured background value. URLs are
/// wrapped in `url(...)`; anything else passes through verbatim so named
/// colors, hex codes and gradients all work.
pub(crate) fn background_image(value: &str) -> String {
    if is_url(value) {
        format!("url({value})")
    } else {
        value.to_owned()
    }
}

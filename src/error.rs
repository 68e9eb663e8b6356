use thiserror::Error;

/// Library error type for slider operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required construction parameter was not supplied.
    #[error("slider cannot be initialized without `{name}` parameter")]
    MissingParameter { name: &'static str },

    /// The supplied parameters cannot produce a working slider.
    #[error("slider cannot be initialized with {reason}")]
    InvalidConfiguration { reason: String },

    /// The view is built exactly once per instance; a second `render` is
    /// rejected.
    #[error("slider view has already been rendered")]
    AlreadyRendered,

    /// Underlying IO error while loading configuration.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Rendering error from the downstream surface.
    #[error("render error: {0}")]
    Render(#[from] anyhow::Error),
}

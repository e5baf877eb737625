use std::borrow::Cow;

/// Error types specific to host resolution.
#[bts_derive::bts_error]
pub enum HostingError {
    /// The policy or the artifact is set up in a way resolution cannot work with.
    #[error("Invalid host configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Both network zones would host the artifact.
    #[error("Ambiguous host resolution{}: {message}", format_context(.context))]
    AmbiguousResolution { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No requested network zone can host the artifact.
    #[error("Unsupported hosting{}: {message}", format_context(.context))]
    UnsupportedInZone { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl HostingError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }

    pub(crate) fn ambiguous(message: impl Into<Cow<'static, str>>) -> Self {
        Self::AmbiguousResolution { message: message.into(), context: None }
    }

    pub(crate) fn unsupported(message: impl Into<Cow<'static, str>>) -> Self {
        Self::UnsupportedInZone { message: message.into(), context: None }
    }

    /// The bare message, without variant prefix or context.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidConfiguration { message, .. }
            | Self::AmbiguousResolution { message, .. }
            | Self::UnsupportedInZone { message, .. } => message,
        }
    }
}

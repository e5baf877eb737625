use std::borrow::Cow;

/// Error types specific to application bindings.
#[bts_derive::bts_error]
pub enum BindingError {
    /// Host resolution failed; the context names the artifact.
    #[error("Host resolution failed{}: {source}", format_context(.context))]
    Hosting { source: bts_hosting::HostingError, context: Option<Cow<'static, str>> },

    /// An adapter, zone or environment could not be parsed.
    #[error("Invalid value{}: {source}", format_context(.context))]
    Domain { source: bts_domain::DomainError, context: Option<Cow<'static, str>> },

    #[error("Failed to load bindings{}: {source}", format_context(.context))]
    Config { source: bts_kernel::config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Failed to serialize host report{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The binding is structurally wrong (duplicate names, conflicting host assignment).
    #[error("Invalid binding{}: {message}", format_context(.context))]
    InvalidBinding { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid schedule{}: {message}", format_context(.context))]
    InvalidSchedule { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BindingError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidBinding { message: message.into(), context: None }
    }

    pub(crate) fn schedule(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidSchedule { message: message.into(), context: None }
    }
}

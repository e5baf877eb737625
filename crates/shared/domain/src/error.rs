use std::borrow::Cow;

#[bts_derive::bts_error]
pub enum DomainError {
    /// Raw zone bits outside the defined flag set.
    #[error("Invalid network zones{}: {message}", format_context(.context))]
    InvalidZones { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Parse error{}: {message}", format_context(.context))]
    Parse { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

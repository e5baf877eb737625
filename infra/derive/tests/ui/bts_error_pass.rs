use bts_derive::bts_error;
use std::borrow::Cow;

#[bts_error]
pub enum ZoneError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unsupported zone{}: {message}", format_context(.context))]
    Unsupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(bits: &str) -> Result<u8, ZoneError> {
    Ok(bits.parse::<u8>().context("Reading zone bits")?)
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Reading zone bits)"));

    let err: Result<(), ZoneError> =
        Err(ZoneError::Unsupported { message: "Ftp".into(), context: None });
    let err = err.context("inbound").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported zone (inbound): Ftp");

    let internal: ZoneError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}

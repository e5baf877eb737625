use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Deployment target of a BizTalk application.
///
/// Displays as its short code (`DEV`, `BLD`, ...). Parses from either the code or the
/// full name, ignoring case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(ascii_case_insensitive, parse_err_fn = unknown_environment, parse_err_ty = DomainError)]
pub enum TargetEnvironment {
    #[strum(to_string = "DEV", serialize = "Development")]
    Development,
    #[strum(to_string = "BLD", serialize = "Build")]
    Build,
    #[strum(to_string = "INT", serialize = "Integration")]
    Integration,
    #[strum(to_string = "ACC", serialize = "Acceptance")]
    Acceptance,
    #[strum(to_string = "PRE", serialize = "Preproduction")]
    Preproduction,
    #[strum(to_string = "PRD", serialize = "Production")]
    Production,
}

impl TargetEnvironment {
    /// Local and build-server deployments run everything in the default BizTalk hosts.
    #[must_use]
    pub const fn is_development_or_build(self) -> bool {
        matches!(self, Self::Development | Self::Build)
    }
}

fn unknown_environment(s: &str) -> DomainError {
    DomainError::Parse { message: format!("unknown target environment '{s}'").into(), context: None }
}

impl Serialize for TargetEnvironment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> Deserialize<'de> for TargetEnvironment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(raw.trim()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_are_display_form() {
        let codes = TargetEnvironment::iter().map(|e| e.to_string()).collect::<Vec<_>>();
        assert_eq!(codes, ["DEV", "BLD", "INT", "ACC", "PRE", "PRD"]);
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("acc".parse::<TargetEnvironment>().ok(), Some(TargetEnvironment::Acceptance));
        assert_eq!("PRD".parse::<TargetEnvironment>().ok(), Some(TargetEnvironment::Production));
        assert_eq!("build".parse::<TargetEnvironment>().ok(), Some(TargetEnvironment::Build));
        assert!(matches!(
            "staging".parse::<TargetEnvironment>(),
            Err(DomainError::Parse { .. })
        ));
    }

    #[test]
    fn only_dev_and_build_bypass_zones() {
        let bypassing = TargetEnvironment::iter()
            .filter(|e| e.is_development_or_build())
            .collect::<Vec<_>>();
        assert_eq!(bypassing, [TargetEnvironment::Development, TargetEnvironment::Build]);
    }
}

use crate::error::DomainError;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

bitflags! {
    /// Network zones an adapter may run in.
    ///
    /// `empty()` stands for "no zone" (the adapter is not supported anywhere).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NetworkZones: u8 {
        const INTRANET = 1 << 0;
        const B2B = 1 << 1;

        const ALL = Self::INTRANET.bits() | Self::B2B.bits();
    }
}

impl NetworkZones {
    pub const NONE: Self = Self::empty();

    /// `required` is non-empty and fully contained in `self`.
    ///
    /// ```rust
    /// # use bts_domain::NetworkZones;
    /// assert!(NetworkZones::ALL.matches(NetworkZones::B2B));
    /// assert!(!NetworkZones::ALL.matches(NetworkZones::NONE));
    /// ```
    #[must_use]
    pub const fn matches(self, required: Self) -> bool {
        !required.is_empty() && self.contains(required)
    }

    /// Exactly one zone is set.
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.bits().is_power_of_two()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.bits() {
            0 => "None",
            1 => "Intranet",
            2 => "B2B",
            _ => "All",
        }
    }
}

impl TryFrom<u8> for NetworkZones {
    type Error = DomainError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or_else(|| DomainError::InvalidZones {
            message: format!("value {bits} is outside the defined NetworkZones flags").into(),
            context: None,
        })
    }
}

impl Display for NetworkZones {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkZones {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::NONE),
            "intranet" => Ok(Self::INTRANET),
            "b2b" => Ok(Self::B2B),
            "all" | "*" => Ok(Self::ALL),
            _ => Err(DomainError::Parse {
                message: format!("unknown network zone '{s}'").into(),
                context: None,
            }),
        }
    }
}

impl Serialize for NetworkZones {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for NetworkZones {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

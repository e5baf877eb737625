use crate::adapter::Adapter;
use std::fmt::{self, Display, Formatter};

/// A binding artifact whose host is resolved at deployment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact<'a> {
    Orchestration(&'a str),
    ReceiveLocation { name: &'a str, adapter: &'a Adapter },
    SendPort { name: &'a str, adapter: &'a Adapter },
}

impl<'a> Artifact<'a> {
    #[must_use]
    pub const fn name(&self) -> &'a str {
        match self {
            Self::Orchestration(name)
            | Self::ReceiveLocation { name, .. }
            | Self::SendPort { name, .. } => *name,
        }
    }

    #[must_use]
    pub const fn adapter(&self) -> Option<&'a Adapter> {
        match self {
            Self::Orchestration(_) => None,
            Self::ReceiveLocation { adapter, .. } | Self::SendPort { adapter, .. } => Some(*adapter),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Orchestration(_) => "orchestration",
            Self::ReceiveLocation { .. } => "receive location",
            Self::SendPort { .. } => "send port",
        }
    }
}

impl Display for Artifact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind(), self.name())
    }
}

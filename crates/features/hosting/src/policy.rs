//! # Host Resolution Policies
//!
//! A policy turns a binding artifact and a target environment into the name of the BizTalk
//! host that runs it.
//!
//! * [`AnyZonePolicy`]: the default. Tries both network zones and accepts the one that can
//!   host the artifact. Two candidate zones are ambiguous and must be settled by binding the
//!   artifact to a zone explicitly.
//! * [`ZoneBoundPolicy`]: hosts the artifact in one single network zone or rejects it.
//! * [`HostPolicy::Explicit`]: a fixed host name, used verbatim.
//!
//! Development and build deployments bypass zones entirely and use the default BizTalk hosts.
//!
//! ```rust
//! use bts_domain::{Adapter, AdapterKind, Artifact, TargetEnvironment};
//! use bts_hosting::{AnyZonePolicy, ResolveHost};
//!
//! let adapter = Adapter::inbound(AdapterKind::File);
//! let location = Artifact::ReceiveLocation { name: "Credit Notes", adapter: &adapter };
//!
//! let host = AnyZonePolicy::new().resolve_host(location, TargetEnvironment::Production)?;
//! assert_eq!(host, "RxHost_File");
//! # Ok::<(), bts_hosting::HostingError>(())
//! ```

use crate::classifier::is_supported_for;
use crate::error::HostingError;
use crate::naming::{
    ORCHESTRATION_HOST, development_host, qualified_adapter_name, receive_host, send_host,
};
use bts_domain::{Artifact, Direction, NetworkZones, TargetEnvironment};
use tracing::debug;

/// Resolves the host of a binding artifact for a target environment.
pub trait ResolveHost {
    /// # Errors
    /// * [`HostingError::InvalidConfiguration`] when the artifact is inconsistent (e.g. a
    ///   receive location carrying an outbound adapter).
    /// * [`HostingError::UnsupportedInZone`] when no candidate zone can host the artifact.
    /// * [`HostingError::AmbiguousResolution`] when several zones can.
    fn resolve_host(
        &self,
        artifact: Artifact<'_>,
        environment: TargetEnvironment,
    ) -> Result<String, HostingError>;
}

/// Hosts artifacts in one single network zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneBoundPolicy {
    zone: NetworkZones,
}

impl ZoneBoundPolicy {
    pub const B2B: Self = Self { zone: NetworkZones::B2B };
    pub const INTRANET: Self = Self { zone: NetworkZones::INTRANET };

    /// # Errors
    /// [`HostingError::InvalidConfiguration`] unless `zone` is exactly one network zone.
    pub fn new(zone: NetworkZones) -> Result<Self, HostingError> {
        if !zone.is_single() {
            return Err(HostingError::invalid(format!(
                "A zone-bound host resolution policy can only be bound to one single NetworkZone and not to '{zone}'."
            )));
        }
        Ok(Self { zone })
    }

    /// Builds the policy from raw zone bits.
    ///
    /// # Errors
    /// [`HostingError::InvalidConfiguration`] for bits outside the defined zones, or not
    /// designating exactly one zone.
    pub fn from_bits(bits: u8) -> Result<Self, HostingError> {
        let zone = NetworkZones::try_from(bits)
            .map_err(|e| HostingError::invalid(format!("Zone-bound policy: {e}")))?;
        Self::new(zone)
    }

    #[must_use]
    pub const fn zone(&self) -> NetworkZones {
        self.zone
    }

    /// Host name of `artifact` in this zone, or `None` when the zone cannot host it.
    ///
    /// # Errors
    /// Only hard errors: direction mismatch and adapters the classifier rejects.
    pub fn try_resolve(
        &self,
        artifact: Artifact<'_>,
        environment: TargetEnvironment,
    ) -> Result<Option<String>, HostingError> {
        check_direction(artifact)?;
        if environment.is_development_or_build() {
            return Ok(Some(default_host(artifact).to_owned()));
        }

        let host = match artifact {
            Artifact::Orchestration(_) => {
                self.zone.matches(NetworkZones::INTRANET).then(|| ORCHESTRATION_HOST.to_owned())
            },
            Artifact::ReceiveLocation { adapter, .. } => {
                is_supported_for(adapter, self.zone)?.then(|| receive_host(adapter, self.zone))
            },
            Artifact::SendPort { adapter, .. } => {
                is_supported_for(adapter, self.zone)?.then(|| send_host(adapter, self.zone))
            },
        };
        Ok(host)
    }
}

impl ResolveHost for ZoneBoundPolicy {
    fn resolve_host(
        &self,
        artifact: Artifact<'_>,
        environment: TargetEnvironment,
    ) -> Result<String, HostingError> {
        let host = self.try_resolve(artifact, environment)?.ok_or_else(|| {
            let subject = match artifact {
                Artifact::Orchestration(_) => "orchestrations".to_owned(),
                Artifact::ReceiveLocation { adapter, .. } => {
                    format!("inbound adapter '{}'", qualified_adapter_name(adapter))
                },
                Artifact::SendPort { adapter, .. } => {
                    format!("outbound adapter '{}'", qualified_adapter_name(adapter))
                },
            };
            HostingError::unsupported(format!("Hosting {subject} is not supported in {}.", self.zone))
        })?;

        debug!(%artifact, %environment, zone = %self.zone, %host, "resolved zone-bound host");
        Ok(host)
    }
}

/// Resolves hosts among all network zones, through a B2B-bound and an Intranet-bound policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyZonePolicy {
    b2b: ZoneBoundPolicy,
    intranet: ZoneBoundPolicy,
}

impl AnyZonePolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self { b2b: ZoneBoundPolicy::B2B, intranet: ZoneBoundPolicy::INTRANET }
    }

    #[must_use]
    pub const fn b2b(&self) -> &ZoneBoundPolicy {
        &self.b2b
    }

    #[must_use]
    pub const fn intranet(&self) -> &ZoneBoundPolicy {
        &self.intranet
    }
}

impl Default for AnyZonePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolveHost for AnyZonePolicy {
    fn resolve_host(
        &self,
        artifact: Artifact<'_>,
        environment: TargetEnvironment,
    ) -> Result<String, HostingError> {
        check_direction(artifact)?;
        if environment.is_development_or_build() {
            let host = default_host(artifact);
            debug!(%artifact, %environment, host, "resolved development host");
            return Ok(host.to_owned());
        }

        let intranet = self.intranet.try_resolve(artifact, environment)?;
        let b2b = self.b2b.try_resolve(artifact, environment)?;

        let host = match (intranet, b2b) {
            (Some(_), Some(_)) => {
                return Err(HostingError::ambiguous(format!(
                    "HostResolutionPolicy cannot unambiguously resolve host for {} among the NetworkZones. \
                     Either HostResolutionPolicy.B2B or HostResolutionPolicy.Intranet must be explicitly \
                     assigned to {} property.",
                    artifact_type(artifact),
                    host_property(artifact),
                )));
            },
            (Some(host), None) | (None, Some(host)) => host,
            (None, None) => {
                return Err(HostingError::unsupported(format!(
                    "Hosting {} is not supported for any 'NetworkZones' in '{environment}'.",
                    artifact_type(artifact)
                )));
            },
        };

        debug!(%artifact, %environment, %host, "resolved host among all zones");
        Ok(host)
    }
}

/// How the host of one artifact is determined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HostPolicy {
    /// Among all network zones.
    #[default]
    AnyZone,
    ZoneBound(ZoneBoundPolicy),
    /// A fixed host, in every environment.
    Explicit(String),
}

impl HostPolicy {
    /// # Errors
    /// [`HostingError::InvalidConfiguration`] unless `zone` is exactly one network zone.
    pub fn zone_bound(zone: NetworkZones) -> Result<Self, HostingError> {
        ZoneBoundPolicy::new(zone).map(Self::ZoneBound)
    }

    /// # Errors
    /// [`HostingError::InvalidConfiguration`] for a blank host name.
    pub fn explicit(host: impl Into<String>) -> Result<Self, HostingError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(HostingError::invalid("An explicit host name cannot be empty."));
        }
        Ok(Self::Explicit(host))
    }
}

impl ResolveHost for HostPolicy {
    fn resolve_host(
        &self,
        artifact: Artifact<'_>,
        environment: TargetEnvironment,
    ) -> Result<String, HostingError> {
        match self {
            Self::AnyZone => AnyZonePolicy::new().resolve_host(artifact, environment),
            Self::ZoneBound(policy) => policy.resolve_host(artifact, environment),
            Self::Explicit(host) => {
                check_direction(artifact)?;
                if host.trim().is_empty() {
                    return Err(HostingError::invalid("An explicit host name cannot be empty."));
                }
                debug!(%artifact, %environment, %host, "explicit host");
                Ok(host.clone())
            },
        }
    }
}

fn check_direction(artifact: Artifact<'_>) -> Result<(), HostingError> {
    let (expected, adapter) = match artifact {
        Artifact::Orchestration(_) => return Ok(()),
        Artifact::ReceiveLocation { adapter, .. } => (Direction::Inbound, adapter),
        Artifact::SendPort { adapter, .. } => (Direction::Outbound, adapter),
    };
    if adapter.direction() == expected {
        return Ok(());
    }
    Err(HostingError::invalid(format!(
        "The {artifact} requires an {expected} adapter but carries an {} '{}' adapter.",
        adapter.direction(),
        qualified_adapter_name(adapter)
    )))
}

fn default_host(artifact: Artifact<'_>) -> &'static str {
    let isolated = matches!(
        artifact,
        Artifact::ReceiveLocation { adapter, .. } if adapter.requires_isolated_receive_handler()
    );
    development_host(isolated)
}

fn artifact_type(artifact: Artifact<'_>) -> String {
    match artifact {
        Artifact::Orchestration(_) => "orchestrations".to_owned(),
        Artifact::ReceiveLocation { adapter, .. } => {
            format!("inbound {} adapter", qualified_adapter_name(adapter))
        },
        Artifact::SendPort { adapter, .. } => {
            format!("outbound {} adapter", qualified_adapter_name(adapter))
        },
    }
}

fn host_property(artifact: Artifact<'_>) -> String {
    match artifact {
        Artifact::Orchestration(name) => format!("{name}'s host"),
        Artifact::ReceiveLocation { name, .. } | Artifact::SendPort { name, .. } => {
            format!("{name}'s transport host")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bts_domain::{Adapter, AdapterKind};

    #[test]
    fn zone_bound_policies_need_a_single_zone() {
        assert!(ZoneBoundPolicy::new(NetworkZones::B2B).is_ok());
        for zone in [NetworkZones::NONE, NetworkZones::ALL] {
            let err = ZoneBoundPolicy::new(zone).expect_err("not a single zone");
            assert!(matches!(err, HostingError::InvalidConfiguration { .. }));
        }
    }

    #[test]
    fn undefined_zone_bits_are_invalid() {
        assert_eq!(ZoneBoundPolicy::from_bits(1).ok(), Some(ZoneBoundPolicy::INTRANET));
        assert!(matches!(
            ZoneBoundPolicy::from_bits(8),
            Err(HostingError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            ZoneBoundPolicy::from_bits(3),
            Err(HostingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn direction_mismatch_is_rejected_in_every_environment() {
        let adapter = Adapter::outbound(AdapterKind::File);
        let location = Artifact::ReceiveLocation { name: "Invoices", adapter: &adapter };

        let err = AnyZonePolicy::new()
            .resolve_host(location, TargetEnvironment::Development)
            .expect_err("outbound adapter on a receive location");
        assert!(matches!(err, HostingError::InvalidConfiguration { .. }));
        assert_eq!(
            err.message(),
            "The receive location 'Invoices' requires an inbound adapter but carries an outbound 'File' adapter."
        );
    }

    #[test]
    fn explicit_hosts_are_verbatim() {
        let adapter = Adapter::inbound(AdapterKind::Ftp);
        let location = Artifact::ReceiveLocation { name: "Legacy", adapter: &adapter };
        let policy = HostPolicy::explicit("RxHost_Legacy").expect("non-empty");

        for env in [TargetEnvironment::Development, TargetEnvironment::Production] {
            assert_eq!(policy.resolve_host(location, env).ok().as_deref(), Some("RxHost_Legacy"));
        }
        assert!(HostPolicy::explicit("  ").is_err());
    }
}

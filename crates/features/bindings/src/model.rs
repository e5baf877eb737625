use crate::error::{BindingError, BindingErrorExt};
use crate::schedule::{Schedule, TimeWindow};
use bts_domain::{Adapter, AdapterKind, Direction, NetworkZones};
use bts_hosting::HostPolicy;
use bts_kernel::config::load_config_with_prefix;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment overrides of a bindings file are read from `BTS__BINDINGS__*`.
pub const BINDINGS_ENV_PREFIX: &str = "BTS__BINDINGS";

/// A BizTalk application and everything it binds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationBinding {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub receive_ports: Vec<ReceivePort>,
    #[serde(default)]
    pub send_ports: Vec<SendPort>,
    #[serde(default)]
    pub orchestrations: Vec<Orchestration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceivePort {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub receive_locations: Vec<ReceiveLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiveLocation {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Receive pipeline type name.
    #[serde(default)]
    pub pipeline: Option<String>,
    #[serde(default = "enabled")]
    pub enabled: bool,
    pub transport: Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendPort {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Send pipeline type name.
    #[serde(default)]
    pub pipeline: Option<String>,
    pub transport: SendTransport,
    /// Used once the primary transport has exhausted its retries.
    #[serde(default)]
    pub backup_transport: Option<SendTransport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Orchestration {
    pub name: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub zone: Option<NetworkZones>,
}

impl Orchestration {
    /// # Errors
    /// Same as [`Transport::policy`].
    pub fn policy(&self) -> Result<HostPolicy, BindingError> {
        host_policy(self.host.as_deref(), self.zone)
    }
}

/// Adapter, host assignment and schedule of a receive location.
///
/// The host is either explicit (`host`), bound to one network zone (`zone`) or, when
/// neither is given, resolved among all zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transport {
    pub adapter: AdapterSpec,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub zone: Option<NetworkZones>,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Transport {
    /// # Errors
    /// * [`BindingError::InvalidBinding`] when both `host` and `zone` are given.
    /// * [`BindingError::Hosting`] for a blank host or a zone that is not a single zone.
    pub fn policy(&self) -> Result<HostPolicy, BindingError> {
        host_policy(self.host.as_deref(), self.zone)
    }
}

/// Adapter, host assignment, retries and daily service window of a send port transport.
///
/// Host assignment follows the same rules as [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendTransport {
    pub adapter: AdapterSpec,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub zone: Option<NetworkZones>,
    #[serde(default)]
    pub retry_policy: Option<RetryPolicy>,
    #[serde(default)]
    pub service_window: Option<TimeWindow>,
}

impl SendTransport {
    /// # Errors
    /// Same as [`Transport::policy`].
    pub fn policy(&self) -> Result<HostPolicy, BindingError> {
        host_policy(self.host.as_deref(), self.zone)
    }
}

/// Transmission retries of a send port transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetryPolicy {
    /// Retries before the transport gives up; zero disables retries.
    pub count: u32,
    /// Minutes between two attempts.
    pub interval: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { count: 3, interval: 5 }
    }
}

impl RetryPolicy {
    /// # Errors
    /// [`BindingError::InvalidBinding`] for a zero retry interval.
    pub fn validate(&self) -> Result<(), BindingError> {
        if self.interval == 0 {
            return Err(BindingError::invalid("retry interval must be at least 1 minute"));
        }
        Ok(())
    }
}

/// Adapter as written in a bindings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSpec {
    /// Transport protocol: `File`, `SBMessaging`, `WCF-SQL`, `WCF-Custom`, ...
    pub protocol: String,
    /// Binding of a `WCF-Custom` or `WCF-CustomIsolated` adapter.
    #[serde(default)]
    pub binding: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Overrides the protocol's default.
    #[serde(default)]
    pub isolated_receive_handler: Option<bool>,
    /// Overrides the protocol's default.
    #[serde(default)]
    pub x86_only: Option<bool>,
}

impl AdapterSpec {
    /// Adapter descriptor for `direction`.
    ///
    /// # Errors
    /// [`BindingError::Domain`] for a missing or misplaced WCF binding.
    pub fn to_adapter(&self, direction: Direction) -> Result<Adapter, BindingError> {
        let kind = AdapterKind::from_protocol(&self.protocol, self.binding.as_deref())
            .context(format!("adapter '{}'", self.protocol))?;

        let mut adapter = Adapter::new(kind, direction);
        if let Some(isolated) = self.isolated_receive_handler {
            adapter = adapter.with_isolated_receive_handler(isolated);
        }
        if let Some(x86_only) = self.x86_only {
            adapter = adapter.with_x86_only(x86_only);
        }
        Ok(adapter)
    }
}

impl ApplicationBinding {
    /// Loads bindings from a TOML, YAML or JSON file (by extension).
    ///
    /// # Errors
    /// [`BindingError::Config`] when the file is missing or does not describe bindings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BindingError> {
        let path = path.as_ref();
        let binding: Self = load_config_with_prefix(Some(path), BINDINGS_ENV_PREFIX)
            .context(format!("bindings file {}", path.display()))?;
        info!(application = %binding.name, "bindings loaded");
        Ok(binding)
    }

    /// Receive locations with the name of their receive port, in declaration order.
    pub fn receive_locations(&self) -> impl Iterator<Item = (&ReceivePort, &ReceiveLocation)> {
        self.receive_ports
            .iter()
            .flat_map(|port| port.receive_locations.iter().map(move |location| (port, location)))
    }

    /// Checks names, host assignments, adapters, schedules and retry policies.
    ///
    /// # Errors
    /// The first problem found, with the offending artifact as context.
    pub fn validate(&self) -> Result<(), BindingError> {
        check_name(&self.name, "application")?;

        let mut ports = FxHashSet::default();
        for port in &self.receive_ports {
            check_unique(&mut ports, &port.name, "receive port")?;
        }

        let mut locations = FxHashSet::default();
        for (port, location) in self.receive_locations() {
            check_unique(&mut locations, &location.name, "receive location")?;
            check_transport(&location.transport, Direction::Inbound).context(format!(
                "receive location '{}' of receive port '{}'",
                location.name, port.name
            ))?;
        }

        let mut send_ports = FxHashSet::default();
        for port in &self.send_ports {
            check_unique(&mut send_ports, &port.name, "send port")?;
            check_send_transport(&port.transport)
                .context(format!("send port '{}'", port.name))?;
            if let Some(backup) = &port.backup_transport {
                check_send_transport(backup)
                    .context(format!("backup transport of send port '{}'", port.name))?;
            }
        }

        let mut orchestrations = FxHashSet::default();
        for orchestration in &self.orchestrations {
            check_unique(&mut orchestrations, &orchestration.name, "orchestration")?;
            orchestration.policy().context(format!("orchestration '{}'", orchestration.name))?;
        }

        debug!(application = %self.name, "bindings validated");
        Ok(())
    }
}

const fn enabled() -> bool {
    true
}

fn host_policy(host: Option<&str>, zone: Option<NetworkZones>) -> Result<HostPolicy, BindingError> {
    match (host, zone) {
        (Some(host), Some(zone)) => Err(BindingError::invalid(format!(
            "host '{host}' and zone '{zone}' are mutually exclusive"
        ))),
        (Some(host), None) => HostPolicy::explicit(host).map_err(BindingError::from),
        (None, Some(zone)) => HostPolicy::zone_bound(zone).map_err(BindingError::from),
        (None, None) => Ok(HostPolicy::AnyZone),
    }
}

fn check_transport(transport: &Transport, direction: Direction) -> Result<(), BindingError> {
    transport.policy()?;
    transport.adapter.to_adapter(direction)?;
    if let Some(schedule) = &transport.schedule {
        schedule.validate()?;
    }
    Ok(())
}

fn check_send_transport(transport: &SendTransport) -> Result<(), BindingError> {
    transport.policy()?;
    transport.adapter.to_adapter(Direction::Outbound)?;
    if let Some(retry_policy) = &transport.retry_policy {
        retry_policy.validate()?;
    }
    if let Some(window) = &transport.service_window {
        window.validate()?;
    }
    Ok(())
}

fn check_name(name: &str, what: &str) -> Result<(), BindingError> {
    if name.trim().is_empty() {
        return Err(BindingError::invalid(format!("{what} name cannot be empty")));
    }
    Ok(())
}

fn check_unique<'a>(
    seen: &mut FxHashSet<&'a str>,
    name: &'a str,
    what: &str,
) -> Result<(), BindingError> {
    check_name(name, what)?;
    if !seen.insert(name) {
        return Err(BindingError::invalid(format!("duplicate {what} name '{name}'")));
    }
    Ok(())
}

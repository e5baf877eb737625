//! Host report: the host of every artifact of an application for one target environment.

use crate::error::{BindingError, BindingErrorExt};
use crate::model::ApplicationBinding;
use bts_domain::{Artifact, Direction, TargetEnvironment};
use bts_hosting::ResolveHost;
use bts_hosting::naming::qualified_adapter_name;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

const SEND_PORT: &str = "send port";
const BACKUP_SEND_PORT: &str = "send port (backup)";

/// Hosts resolved for an application, in declaration order: receive locations, send
/// ports (each followed by its backup transport), then orchestrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub application: String,
    pub environment: TargetEnvironment,
    pub entries: Vec<HostEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    /// `receive location`, `send port`, `send port (backup)` or `orchestration`.
    pub kind: &'static str,
    pub name: String,
    /// Receive port of a receive location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
    pub host: String,
}

impl HostReport {
    /// # Errors
    /// [`BindingError::Serialize`] if the report cannot be written as JSON.
    pub fn to_json(&self) -> Result<String, BindingError> {
        serde_json::to_string_pretty(self).context("host report")
    }

    #[must_use]
    pub fn host_of(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.name == name).map(|entry| entry.host.as_str())
    }
}

impl fmt::Display for HostReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.application, self.environment)?;

        let width =
            self.entries.iter().map(|entry| entry.name.chars().count()).max().unwrap_or_default();
        for entry in &self.entries {
            writeln!(f, "  {:<18} {:<width$}  {}", entry.kind, entry.name, entry.host)?;
        }
        Ok(())
    }
}

impl ApplicationBinding {
    /// Validates the binding and resolves the host of each of its artifacts.
    ///
    /// # Errors
    /// The validation error, or the first resolution error with the failing artifact as
    /// context.
    pub fn resolve_hosts(
        &self,
        environment: TargetEnvironment,
    ) -> Result<HostReport, BindingError> {
        self.validate()?;

        let mut entries = Vec::new();

        for (port, location) in self.receive_locations() {
            let transport = &location.transport;
            let adapter = transport.adapter.to_adapter(Direction::Inbound)?;
            let artifact = Artifact::ReceiveLocation { name: &location.name, adapter: &adapter };
            let host = transport
                .policy()?
                .resolve_host(artifact, environment)
                .context(format!(
                    "receive location '{}' of receive port '{}'",
                    location.name, port.name
                ))
                .inspect_err(|e| warn!(application = %self.name, %environment, "{e}"))?;

            entries.push(HostEntry {
                kind: artifact.kind(),
                name: location.name.clone(),
                port: Some(port.name.clone()),
                adapter: Some(qualified_adapter_name(&adapter)),
                host,
            });
        }

        for port in &self.send_ports {
            let transports = std::iter::once((&port.transport, SEND_PORT, "send port"))
                .chain(port.backup_transport.iter().map(|backup| {
                    (backup, BACKUP_SEND_PORT, "backup transport of send port")
                }));

            for (transport, kind, what) in transports {
                let adapter = transport.adapter.to_adapter(Direction::Outbound)?;
                let artifact = Artifact::SendPort { name: &port.name, adapter: &adapter };
                let host = transport
                    .policy()?
                    .resolve_host(artifact, environment)
                    .context(format!("{what} '{}'", port.name))
                    .inspect_err(|e| warn!(application = %self.name, %environment, "{e}"))?;

                entries.push(HostEntry {
                    kind,
                    name: port.name.clone(),
                    port: None,
                    adapter: Some(qualified_adapter_name(&adapter)),
                    host,
                });
            }
        }

        for orchestration in &self.orchestrations {
            let artifact = Artifact::Orchestration(&orchestration.name);
            let host = orchestration
                .policy()?
                .resolve_host(artifact, environment)
                .context(format!("orchestration '{}'", orchestration.name))
                .inspect_err(|e| warn!(application = %self.name, %environment, "{e}"))?;

            entries.push(HostEntry {
                kind: artifact.kind(),
                name: orchestration.name.clone(),
                port: None,
                adapter: None,
                host,
            });
        }

        debug!(application = %self.name, %environment, entries = entries.len(), "hosts resolved");
        Ok(HostReport { application: self.name.clone(), environment, entries })
    }
}

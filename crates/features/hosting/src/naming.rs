//! Host and adapter naming conventions.
//!
//! ```text
//! orchestrations   PxHost
//! inbound          [L|R]xHost_([Zone]_)?[Adapter](_32)?(_Single)?
//! outbound         TxHost_([Zone]_)?[Adapter](_32)?
//! ```
//!
//! The zone segment is omitted for the Intranet zone. `L` marks adapters whose receive
//! handler needs an isolated host, `R` all others.

use bts_domain::{Adapter, AdapterKind, NetworkZones};

/// Default in-process host of development and build deployments.
pub const DEVELOPMENT_HOST: &str = "BizTalkServerApplication";
/// Default isolated host of development and build deployments.
pub const DEVELOPMENT_ISOLATED_HOST: &str = "BizTalkServerIsolatedHost";
/// Host of every orchestration deployed to the Intranet zone.
pub const ORCHESTRATION_HOST: &str = "PxHost";

const ADAPTER_SUFFIX: &str = "Adapter";

/// Adapter name used inside host names: `File`, `SBMessaging`, `WcfWSHttp`, `WcfSql`.
#[must_use]
pub fn adapter_name(adapter: &Adapter) -> String {
    kind_name(adapter.kind())
}

/// [`adapter_name`] followed by the WCF hosting flavour: `WcfNetTcpCustom`.
#[must_use]
pub fn qualified_adapter_name(adapter: &Adapter) -> String {
    let mut name = kind_name(adapter.kind());
    if let Some(hosting) = adapter.wcf_hosting() {
        name.push_str(hosting.suffix());
    }
    name
}

fn kind_name(kind: &AdapterKind) -> String {
    match kind {
        AdapterKind::Wcf { binding, .. } => format!("Wcf{}", binding.short_name()),
        other => {
            let type_name = other.type_name().unwrap_or_default();
            type_name.split(ADAPTER_SUFFIX).next().unwrap_or(type_name).to_owned()
        },
    }
}

/// Host of a development or build deployment.
#[must_use]
pub const fn development_host(isolated_receive_handler: bool) -> &'static str {
    if isolated_receive_handler { DEVELOPMENT_ISOLATED_HOST } else { DEVELOPMENT_HOST }
}

/// Receive host of `adapter` in the single zone `zone`.
#[must_use]
pub fn receive_host(adapter: &Adapter, zone: NetworkZones) -> String {
    let prefix = if adapter.requires_isolated_receive_handler() { 'L' } else { 'R' };
    let mut host = format!("{prefix}xHost_{}{}", zone_segment(zone), adapter_name(adapter));
    if adapter.is_x86_only() {
        host.push_str("_32");
    }
    if matches!(adapter.kind(), AdapterKind::Pop3 | AdapterKind::Sftp) {
        host.push_str("_Single");
    }
    host
}

/// Send host of `adapter` in the single zone `zone`.
#[must_use]
pub fn send_host(adapter: &Adapter, zone: NetworkZones) -> String {
    let mut host = format!("TxHost_{}{}", zone_segment(zone), adapter_name(adapter));
    if adapter.is_x86_only() {
        host.push_str("_32");
    }
    host
}

fn zone_segment(zone: NetworkZones) -> String {
    if zone.matches(NetworkZones::INTRANET) { String::new() } else { format!("{zone}_") }
}

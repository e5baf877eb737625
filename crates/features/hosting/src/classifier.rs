//! # Network Zone Classifier
//!
//! Maps an adapter descriptor to the network zones it may be hosted in.
//!
//! The tables are exhaustive over the known adapter kinds. Unknown adapter types, unknown
//! WCF bindings and inbound-only adapters used outbound are rejected with
//! [`HostingError::UnsupportedInZone`]; they never classify as [`NetworkZones::NONE`].

use crate::error::HostingError;
use crate::naming::qualified_adapter_name;
use bts_domain::{Adapter, AdapterKind, Direction, NetworkZones, WcfBinding, WcfHosting};
use tracing::trace;

/// Zones in which `adapter` may be hosted.
///
/// # Errors
/// * [`HostingError::UnsupportedInZone`] for adapters absent from the tables.
/// * [`HostingError::InvalidConfiguration`] for an outbound `WCF-CustomIsolated` adapter.
pub fn supported_zones(adapter: &Adapter) -> Result<NetworkZones, HostingError> {
    let zones = match adapter.direction() {
        Direction::Inbound => inbound_zones(adapter)?,
        Direction::Outbound => outbound_zones(adapter)?,
    };
    trace!(adapter = %qualified_adapter_name(adapter), direction = %adapter.direction(), %zones, "classified adapter");
    Ok(zones)
}

/// Whether `adapter` may be hosted in `zone`.
///
/// # Errors
/// Same as [`supported_zones`].
pub fn is_supported_for(adapter: &Adapter, zone: NetworkZones) -> Result<bool, HostingError> {
    Ok(supported_zones(adapter)?.matches(zone))
}

fn inbound_zones(adapter: &Adapter) -> Result<NetworkZones, HostingError> {
    Ok(match adapter.kind() {
        AdapterKind::File | AdapterKind::Http => NetworkZones::INTRANET,
        AdapterKind::Ftp => NetworkZones::NONE,
        AdapterKind::Office365Email
        | AdapterKind::Pop3
        | AdapterKind::SbMessaging
        | AdapterKind::Sftp => NetworkZones::B2B,
        AdapterKind::Wcf { binding, hosting } => match binding {
            // HTTP based bindings are only supported on isolated hosts, never in-process
            WcfBinding::BasicHttp | WcfBinding::WebHttp => {
                unless(*hosting == WcfHosting::Custom, NetworkZones::ALL)
            },
            WcfBinding::WsHttp => unless(*hosting == WcfHosting::Custom, NetworkZones::B2B),
            WcfBinding::NetMsmq | WcfBinding::Oracle | WcfBinding::Sap | WcfBinding::Sql => {
                unless(*hosting == WcfHosting::CustomIsolated, NetworkZones::INTRANET)
            },
            WcfBinding::NetTcp => NetworkZones::INTRANET,
            WcfBinding::BasicHttpRelay | WcfBinding::NetNamedPipe | WcfBinding::NetTcpRelay => {
                NetworkZones::NONE
            },
            WcfBinding::Other(_) => {
                return Err(unknown("Inbound WCF adapter", adapter));
            },
        },
        AdapterKind::Other(_) => return Err(unknown("Inbound adapter", adapter)),
    })
}

fn outbound_zones(adapter: &Adapter) -> Result<NetworkZones, HostingError> {
    Ok(match adapter.kind() {
        AdapterKind::File => NetworkZones::INTRANET,
        AdapterKind::Ftp => NetworkZones::NONE,
        AdapterKind::Http => NetworkZones::ALL,
        AdapterKind::SbMessaging | AdapterKind::Sftp => NetworkZones::B2B,
        AdapterKind::Wcf { hosting: WcfHosting::CustomIsolated, .. } => {
            return Err(HostingError::invalid(format!(
                "Outbound WCF adapter '{}' cannot exist: WCF-CustomIsolated adapters are receive only.",
                qualified_adapter_name(adapter)
            )));
        },
        AdapterKind::Wcf { binding, .. } => match binding {
            WcfBinding::BasicHttp | WcfBinding::NetNamedPipe | WcfBinding::WebHttp => {
                NetworkZones::ALL
            },
            WcfBinding::NetMsmq
            | WcfBinding::NetTcp
            | WcfBinding::Oracle
            | WcfBinding::Sap
            | WcfBinding::Sql => NetworkZones::INTRANET,
            WcfBinding::WsHttp => NetworkZones::B2B,
            WcfBinding::BasicHttpRelay | WcfBinding::NetTcpRelay => NetworkZones::NONE,
            WcfBinding::Other(_) => return Err(unknown("Outbound WCF adapter", adapter)),
        },
        AdapterKind::Office365Email | AdapterKind::Pop3 | AdapterKind::Other(_) => {
            return Err(unknown("Outbound adapter", adapter));
        },
    })
}

const fn unless(excluded: bool, zones: NetworkZones) -> NetworkZones {
    if excluded { NetworkZones::NONE } else { zones }
}

fn unknown(what: &str, adapter: &Adapter) -> HostingError {
    HostingError::unsupported(format!(
        "{what} '{}' is not supported in any NetworkZones.",
        qualified_adapter_name(adapter)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_adapters_fail_fast() {
        let err = supported_zones(&Adapter::inbound(AdapterKind::Other("MQSeries".into())))
            .expect_err("unknown adapter");
        assert_eq!(err.message(), "Inbound adapter 'MQSeries' is not supported in any NetworkZones.");

        let adapter = Adapter::outbound(AdapterKind::wcf_custom(WcfBinding::Other(
            "NetHttpBindingElement".into(),
        )));
        let err = supported_zones(&adapter).expect_err("unknown binding");
        assert_eq!(
            err.message(),
            "Outbound WCF adapter 'WcfNetHttpCustom' is not supported in any NetworkZones."
        );
    }

    #[test]
    fn inbound_only_adapters_are_unknown_outbound() {
        let err = supported_zones(&Adapter::outbound(AdapterKind::Pop3)).expect_err("pop3 out");
        assert!(matches!(err, HostingError::UnsupportedInZone { .. }));
        assert_eq!(err.message(), "Outbound adapter 'Pop3' is not supported in any NetworkZones.");
    }

    #[test]
    fn outbound_custom_isolated_is_a_configuration_error() {
        let adapter = Adapter::outbound(AdapterKind::wcf_custom_isolated(WcfBinding::WsHttp));
        let err = supported_zones(&adapter).expect_err("receive only");
        assert!(matches!(err, HostingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn in_process_http_bindings_are_unsupported_inbound() {
        for binding in [WcfBinding::BasicHttp, WcfBinding::WebHttp, WcfBinding::WsHttp] {
            let custom = Adapter::inbound(AdapterKind::wcf_custom(binding.clone()));
            assert_eq!(supported_zones(&custom).ok(), Some(NetworkZones::NONE), "{binding:?}");

            let isolated = Adapter::inbound(AdapterKind::wcf_custom_isolated(binding.clone()));
            assert_ne!(supported_zones(&isolated).ok(), Some(NetworkZones::NONE), "{binding:?}");
        }
    }

    #[test]
    fn net_tcp_inbound_is_intranet_for_every_flavour() {
        for kind in [
            AdapterKind::wcf(WcfBinding::NetTcp),
            AdapterKind::wcf_custom(WcfBinding::NetTcp),
            AdapterKind::wcf_custom_isolated(WcfBinding::NetTcp),
        ] {
            assert_eq!(supported_zones(&Adapter::inbound(kind)).ok(), Some(NetworkZones::INTRANET));
        }
    }
}

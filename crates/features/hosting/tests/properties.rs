use bts_domain::{Adapter, AdapterKind, Artifact, NetworkZones, TargetEnvironment, WcfBinding};
use bts_hosting::{Host, ResolveHost, ZoneBoundPolicy, supported_zones};
use proptest::prelude::*;
use proptest::sample::select;
use strum::IntoEnumIterator;

fn bindings() -> Vec<WcfBinding> {
    vec![
        WcfBinding::BasicHttp,
        WcfBinding::BasicHttpRelay,
        WcfBinding::NetMsmq,
        WcfBinding::NetNamedPipe,
        WcfBinding::NetTcp,
        WcfBinding::NetTcpRelay,
        WcfBinding::Oracle,
        WcfBinding::Sap,
        WcfBinding::Sql,
        WcfBinding::WebHttp,
        WcfBinding::WsHttp,
    ]
}

fn inbound_kinds() -> Vec<AdapterKind> {
    let mut kinds = vec![
        AdapterKind::File,
        AdapterKind::Ftp,
        AdapterKind::Http,
        AdapterKind::Office365Email,
        AdapterKind::Pop3,
        AdapterKind::SbMessaging,
        AdapterKind::Sftp,
    ];
    for binding in bindings() {
        kinds.push(AdapterKind::wcf(binding.clone()));
        kinds.push(AdapterKind::wcf_custom(binding.clone()));
        kinds.push(AdapterKind::wcf_custom_isolated(binding));
    }
    kinds
}

fn outbound_kinds() -> Vec<AdapterKind> {
    let mut kinds =
        vec![AdapterKind::File, AdapterKind::Ftp, AdapterKind::Http, AdapterKind::SbMessaging, AdapterKind::Sftp];
    for binding in bindings() {
        kinds.push(AdapterKind::wcf(binding.clone()));
        kinds.push(AdapterKind::wcf_custom(binding));
    }
    kinds
}

fn adapters() -> impl Strategy<Value = Adapter> {
    let kinds = prop_oneof![
        select(inbound_kinds()).prop_map(Adapter::inbound),
        select(outbound_kinds()).prop_map(Adapter::outbound),
    ];
    (kinds, any::<bool>(), any::<bool>()).prop_map(|(adapter, isolated, x86)| {
        adapter.with_isolated_receive_handler(isolated).with_x86_only(x86)
    })
}

fn single_zones() -> impl Strategy<Value = NetworkZones> {
    select(vec![NetworkZones::INTRANET, NetworkZones::B2B])
}

fn environments() -> impl Strategy<Value = TargetEnvironment> {
    select(TargetEnvironment::iter().collect::<Vec<_>>())
}

fn deployed() -> impl Strategy<Value = TargetEnvironment> {
    environments().prop_filter("deployed", |env| !env.is_development_or_build())
}

fn resolve(adapter: &Adapter, policy: &impl ResolveHost, env: TargetEnvironment) -> Option<String> {
    let artifact = if adapter.is_inbound() {
        Artifact::ReceiveLocation { name: "Location", adapter }
    } else {
        Artifact::SendPort { name: "Port", adapter }
    };
    policy.resolve_host(artifact, env).ok()
}

proptest! {
    #[test]
    fn classification_is_deterministic(adapter in adapters()) {
        prop_assert_eq!(supported_zones(&adapter).ok(), supported_zones(&adapter).ok());
    }

    #[test]
    fn zone_bound_resolves_iff_supported(adapter in adapters(), zone in single_zones(), env in deployed()) {
        let policy = ZoneBoundPolicy::new(zone).expect("single zone");
        let supported = supported_zones(&adapter).expect("known adapter").matches(zone);
        prop_assert_eq!(resolve(&adapter, &policy, env).is_some(), supported);
    }

    #[test]
    fn zone_bound_orchestrations_resolve_iff_intranet(zone in single_zones(), env in deployed()) {
        let policy = ZoneBoundPolicy::new(zone).expect("single zone");
        let resolved = policy.resolve_host(Artifact::Orchestration("Process"), env);
        prop_assert_eq!(resolved.is_ok(), zone.matches(NetworkZones::INTRANET));
    }

    #[test]
    fn development_and_build_depend_on_isolation_only(
        adapter in adapters(),
        env in environments().prop_filter("dev or build", |env| env.is_development_or_build()),
    ) {
        let expected = if adapter.is_inbound() && adapter.requires_isolated_receive_handler() {
            "BizTalkServerIsolatedHost"
        } else {
            "BizTalkServerApplication"
        };
        let default_policy = resolve(&adapter, Host::default_policy(), env);
        let b2b = resolve(&adapter, Host::b2b(), env);
        let intranet = resolve(&adapter, Host::intranet(), env);
        prop_assert_eq!(default_policy.as_deref(), Some(expected));
        prop_assert_eq!(b2b.as_deref(), Some(expected));
        prop_assert_eq!(intranet.as_deref(), Some(expected));
    }

    #[test]
    fn any_zone_agrees_with_the_single_fitting_zone(adapter in adapters(), env in deployed()) {
        let zones = supported_zones(&adapter).expect("known adapter");
        let any = resolve(&adapter, Host::default_policy(), env);
        match (zones.matches(NetworkZones::INTRANET), zones.matches(NetworkZones::B2B)) {
            (true, false) => prop_assert_eq!(any, resolve(&adapter, Host::intranet(), env)),
            (false, true) => prop_assert_eq!(any, resolve(&adapter, Host::b2b(), env)),
            _ => prop_assert!(any.is_none()),
        }
    }
}

use bts_domain::{Adapter, AdapterKind, Artifact, TargetEnvironment, WcfBinding};
use bts_hosting::{Host, HostPolicy, HostingError, ResolveHost};

#[test]
fn zone_bound_b2b_resolves_isolated_basic_http() {
    let adapter = Adapter::inbound(AdapterKind::wcf(WcfBinding::BasicHttp));
    let location = Artifact::ReceiveLocation { name: "Quotes", adapter: &adapter };

    let host = Host::b2b().resolve_host(location, TargetEnvironment::Acceptance);
    assert_eq!(host.ok().as_deref(), Some("LxHost_B2B_WcfBasicHttp"));
}

#[test]
fn any_zone_is_ambiguous_when_both_zones_fit() {
    let adapter = Adapter::inbound(AdapterKind::wcf(WcfBinding::BasicHttp));
    let location = Artifact::ReceiveLocation { name: "Quotes", adapter: &adapter };

    let err = Host::default_policy()
        .resolve_host(location, TargetEnvironment::Acceptance)
        .expect_err("BasicHttp runs in both zones");
    assert!(matches!(err, HostingError::AmbiguousResolution { .. }));
    assert_eq!(
        err.message(),
        "HostResolutionPolicy cannot unambiguously resolve host for inbound WcfBasicHttp adapter among the NetworkZones. \
         Either HostResolutionPolicy.B2B or HostResolutionPolicy.Intranet must be explicitly assigned to Quotes's transport host property."
    );
}

#[test]
fn any_zone_picks_the_only_fitting_zone() {
    let file = Adapter::inbound(AdapterKind::File);
    let location = Artifact::ReceiveLocation { name: "Credit Notes", adapter: &file };
    assert_eq!(
        Host::default_policy().resolve_host(location, TargetEnvironment::Production).ok().as_deref(),
        Some("RxHost_File")
    );

    let sftp = Adapter::outbound(AdapterKind::Sftp);
    let port = Artifact::SendPort { name: "Bank Statements", adapter: &sftp };
    assert_eq!(
        Host::default_policy().resolve_host(port, TargetEnvironment::Integration).ok().as_deref(),
        Some("TxHost_B2B_Sftp")
    );

    let orchestration = Artifact::Orchestration("Accounting.Processes.Billing");
    assert_eq!(
        Host::default_policy()
            .resolve_host(orchestration, TargetEnvironment::Preproduction)
            .ok()
            .as_deref(),
        Some("PxHost")
    );
}

#[test]
fn any_zone_rejects_adapters_no_zone_supports() {
    let ftp = Adapter::inbound(AdapterKind::Ftp);
    let location = Artifact::ReceiveLocation { name: "Legacy Drop", adapter: &ftp };

    let err = Host::default_policy()
        .resolve_host(location, TargetEnvironment::Integration)
        .expect_err("FTP is supported nowhere");
    assert!(matches!(err, HostingError::UnsupportedInZone { .. }));
    assert_eq!(
        err.message(),
        "Hosting inbound Ftp adapter is not supported for any 'NetworkZones' in 'INT'."
    );
}

#[test]
fn any_zone_ambiguity_names_the_send_port_and_qualified_adapter() {
    let http = Adapter::outbound(AdapterKind::wcf_custom(WcfBinding::WebHttp));
    let port = Artifact::SendPort { name: "Partner API", adapter: &http };

    let err = Host::default_policy()
        .resolve_host(port, TargetEnvironment::Production)
        .expect_err("WebHttp runs in both zones");
    assert!(err.message().contains("for outbound WcfWebHttpCustom adapter"));
    assert!(err.message().contains("assigned to Partner API's transport host property."));
}

#[test]
fn any_zone_propagates_classifier_errors() {
    let unknown = Adapter::inbound(AdapterKind::Other("MQSeries".into()));
    let location = Artifact::ReceiveLocation { name: "Mainframe", adapter: &unknown };

    let err = Host::default_policy()
        .resolve_host(location, TargetEnvironment::Production)
        .expect_err("unknown adapter");
    assert_eq!(err.message(), "Inbound adapter 'MQSeries' is not supported in any NetworkZones.");
}

#[test]
fn development_bypasses_even_unknown_adapters() {
    let unknown = Adapter::inbound(AdapterKind::Other("MQSeries".into()));
    let location = Artifact::ReceiveLocation { name: "Mainframe", adapter: &unknown };

    for env in [TargetEnvironment::Development, TargetEnvironment::Build] {
        assert_eq!(
            Host::default_policy().resolve_host(location, env).ok().as_deref(),
            Some("BizTalkServerApplication")
        );
    }

    let http = Adapter::inbound(AdapterKind::Http);
    let location = Artifact::ReceiveLocation { name: "Web Hook", adapter: &http };
    assert_eq!(
        Host::default_policy()
            .resolve_host(location, TargetEnvironment::Development)
            .ok()
            .as_deref(),
        Some("BizTalkServerIsolatedHost")
    );
}

#[test]
fn host_policy_dispatches() {
    let adapter = Adapter::inbound(AdapterKind::wcf(WcfBinding::BasicHttp));
    let location = Artifact::ReceiveLocation { name: "Quotes", adapter: &adapter };

    let any = HostPolicy::default();
    assert!(any.resolve_host(location, TargetEnvironment::Acceptance).is_err());

    let intranet = HostPolicy::zone_bound(bts_domain::NetworkZones::INTRANET).expect("single zone");
    assert_eq!(
        intranet.resolve_host(location, TargetEnvironment::Acceptance).ok().as_deref(),
        Some("LxHost_WcfBasicHttp")
    );

    assert!(HostPolicy::zone_bound(bts_domain::NetworkZones::ALL).is_err());
}

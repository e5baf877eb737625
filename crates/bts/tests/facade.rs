use bts::prelude::*;

#[test]
fn registry_lists_enabled_features() {
    assert!(bts::features::is_enabled("hosting"));
    assert_eq!(bts::features::is_enabled("bindings"), cfg!(feature = "bindings"));
    assert!(!bts::features::is_enabled("licensing"));
}

#[test]
fn prelude_resolves_through_the_shared_policies() {
    let adapter = Adapter::inbound(AdapterKind::SbMessaging);
    let location = Artifact::ReceiveLocation { name: "Orders", adapter: &adapter };

    let context = DeploymentContext::new(TargetEnvironment::Integration);
    let host = Host::default_policy()
        .resolve_host(location, context.target_environment())
        .expect("service bus is B2B only");
    assert_eq!(host, "RxHost_B2B_SBMessaging");
}

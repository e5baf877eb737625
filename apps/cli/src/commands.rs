use crate::args::{AdapterArgs, OptionalAdapterArgs};
use anyhow::{Context, Result, bail};
use bts::bindings::ApplicationBinding;
use bts::domain::{Adapter, AdapterKind, Artifact, Direction, NetworkZones, TargetEnvironment};
use bts::hosting::{HostPolicy, ResolveHost, supported_zones};
use bts::kernel::deployment::DeploymentContext;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, warn};

pub(crate) fn resolve(bindings: &Path, env: Option<TargetEnvironment>, json: bool) -> Result<()> {
    let environment = match env {
        Some(environment) => environment,
        None => DeploymentContext::from_env()?
            .map(|context| context.target_environment())
            .context("No target environment: pass --env or set BTS__TARGET_ENVIRONMENT")?,
    };

    let report = ApplicationBinding::load(bindings)?.resolve_hosts(environment)?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

pub(crate) fn check(bindings: &Path) -> Result<()> {
    let binding = ApplicationBinding::load(bindings)?;

    let mut failures = 0_usize;
    for environment in TargetEnvironment::iter() {
        match binding.resolve_hosts(environment) {
            Ok(report) => println!("{environment}  ok ({} artifacts)", report.entries.len()),
            Err(e) => {
                failures += 1;
                println!("{environment}  FAILED: {e}");
            },
        }
    }

    if failures > 0 {
        bail!("{} fails to resolve in {failures} environment(s)", binding.name);
    }
    info!(application = %binding.name, "hosts resolve in every environment");
    Ok(())
}

pub(crate) fn zones(args: &AdapterArgs) -> Result<()> {
    let adapter = adapter(&args.protocol, args.binding.as_deref(), args.direction)?;
    let zones = supported_zones(&adapter)?;
    if zones == NetworkZones::NONE {
        warn!(%adapter, "adapter cannot be hosted in any zone");
    }
    println!("{zones}");
    Ok(())
}

pub(crate) fn host(
    args: &OptionalAdapterArgs,
    environment: TargetEnvironment,
    zone: Option<NetworkZones>,
    explicit: Option<String>,
    name: &str,
) -> Result<()> {
    let policy = match (zone, explicit) {
        (Some(zone), _) => HostPolicy::zone_bound(zone)?,
        (None, Some(host)) => HostPolicy::explicit(host)?,
        (None, None) => HostPolicy::AnyZone,
    };

    let transport = match (&args.protocol, args.direction) {
        (Some(protocol), Some(direction)) => {
            Some(adapter(protocol, args.binding.as_deref(), direction)?)
        },
        _ => None,
    };

    let artifact = match &transport {
        Some(adapter) if adapter.is_inbound() => Artifact::ReceiveLocation { name, adapter },
        Some(adapter) => Artifact::SendPort { name, adapter },
        None => Artifact::Orchestration(name),
    };

    println!("{}", policy.resolve_host(artifact, environment)?);
    Ok(())
}

fn adapter(protocol: &str, binding: Option<&str>, direction: Direction) -> Result<Adapter> {
    let kind = AdapterKind::from_protocol(protocol, binding)?;
    Ok(Adapter::new(kind, direction))
}

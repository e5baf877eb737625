use bts_kernel::config::{ConfigError, environment, load_config, load_config_with_prefix};
use bts_kernel::deployment::DeploymentContext;
use bts_kernel::domain::TargetEnvironment;
use serde::Deserialize;
use std::fs;
use tempfile::tempdir;

#[derive(Debug, Deserialize)]
struct Settings {
    name: String,
    #[serde(default)]
    zones: Vec<String>,
}

#[test]
fn loads_toml_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("bindings.toml");
    fs::write(&path, "name = \"Accounting\"\nzones = [\"b2b\"]\n")?;

    let settings: Settings = load_config_with_prefix(Some(&path), "BTS_KERNEL_TEST_TOML")?;
    assert_eq!(settings.name, "Accounting");
    assert_eq!(settings.zones, ["b2b"]);
    Ok(())
}

#[test]
fn loads_json_by_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("bindings.json");
    fs::write(&path, r#"{ "name": "Billing" }"#)?;

    let settings: Settings = load_config_with_prefix(Some(&path), "BTS_KERNEL_TEST_JSON")?;
    assert_eq!(settings.name, "Billing");
    assert!(settings.zones.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let err = load_config::<Settings>(Some(&path)).expect_err("file does not exist");
    let ConfigError::Config { context, .. } = &err;
    assert!(context.as_deref().is_some_and(|c| c.contains("Failed to build config")));
}

#[test]
fn mistyped_content_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bindings.toml");
    fs::write(&path, "zones = 3\n").expect("write");

    let err = load_config_with_prefix::<Settings>(Some(&path), "BTS_KERNEL_TEST_BAD")
        .expect_err("name is missing");
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn deployment_context_from_source() -> Result<(), ConfigError> {
    let vars = [("BTS__TARGET_ENVIRONMENT".to_owned(), "acc".to_owned())].into_iter().collect();
    let ctx = DeploymentContext::from_source(environment("BTS").source(Some(vars)))?;
    assert_eq!(ctx, Some(DeploymentContext::new(TargetEnvironment::Acceptance)));

    let ctx = DeploymentContext::from_source(environment("BTS").source(Some(config::Map::new())))?;
    assert_eq!(ctx, None);
    Ok(())
}

#[test]
fn deployment_context_rejects_unknown_environment() {
    let vars = [("BTS__TARGET_ENVIRONMENT".to_owned(), "staging".to_owned())].into_iter().collect();
    let err = DeploymentContext::from_source(environment("BTS").source(Some(vars)))
        .expect_err("staging is not an environment");
    assert!(err.to_string().contains("BTS__TARGET_ENVIRONMENT"));
}

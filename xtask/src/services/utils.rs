use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Workspace directories holding crates, in listing order.
pub const CRATE_DIRS: &[(&str, &str)] = &[
    ("apps", "Applications"),
    ("crates/features", "Features"),
    ("crates/shared", "Shared"),
    ("infra", "Infrastructure"),
];

/// Crates whose names do not carry the workspace prefix.
const UNPREFIXED: &[&str] = &["bts", "xtask"];

/// Returns the root directory of the project.
///
/// # Errors
/// Returns an error if the manifest directory does not have a parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("Could not find project root from xtask manifest")
}

#[derive(Debug, Deserialize)]
pub struct CrateInfo {
    #[serde(skip)]
    pub path: PathBuf,
    pub package: PackageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub description: Option<String>,
}

/// Discovers crates in a workspace subdirectory (e.g., "crates/features", "apps", "infra").
///
/// # Errors
/// Returns an error if the directory cannot be read, a `Cargo.toml` cannot be read,
/// or the metadata cannot be parsed.
pub fn get_workspace_crates(sub_dir: &str) -> Result<Vec<CrateInfo>> {
    let target_dir = get_project_root()?.join(sub_dir);

    let mut crates = Vec::new();
    if !target_dir.exists() {
        return Ok(crates);
    }

    for entry in fs::read_dir(&target_dir)? {
        let path = entry?.path();
        let cargo_path = path.join("Cargo.toml");

        if path.is_dir() && cargo_path.exists() {
            let content = fs::read_to_string(&cargo_path)
                .with_context(|| format!("Reading {}", cargo_path.display()))?;
            let mut info: CrateInfo = toml::from_str(&content)
                .with_context(|| format!("Parsing {}", cargo_path.display()))?;
            info.path = path;
            crates.push(info);
        }
    }

    crates.sort_by(|a, b| a.package.name.cmp(&b.package.name));
    Ok(crates)
}

/// Prints a formatted table of crates with their folder, name, and description.
pub fn render_crate_table(title: &str, crates: &[CrateInfo]) {
    println!("\n{title}:\n");
    println!("{:<12} {:<16} {:<50}", "Folder", "Crate Name", "Description");
    println!("{:-<80}", "");

    for info in crates {
        let folder = info.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown");
        let desc = info.package.description.as_deref().unwrap_or("No description provided");
        println!("{:<12} {:<16} {:<50}", folder, info.package.name, desc);
    }
    println!();
}

/// Normalizes a project crate name to the workspace naming convention.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with("bts-") || UNPREFIXED.contains(&project) {
        project.to_owned()
    } else {
        format!("bts-{project}")
    }
}

/// Whether `project` designates the whole workspace.
#[must_use]
pub fn is_workspace(project: Option<&str>) -> bool {
    project.is_none_or(|value| value == "all")
}

/// Runs `cargo` with `args` from the workspace root.
///
/// # Errors
/// Returns an error if cargo cannot be started or exits unsuccessfully.
pub fn cargo<I, S>(args: I, failure: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let status = Command::new("cargo").args(args).current_dir(get_project_root()?).status()?;
    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_names_get_the_workspace_prefix() {
        assert_eq!(normalize_project_name("hosting"), "bts-hosting");
        assert_eq!(normalize_project_name("bts-cli"), "bts-cli");
        assert_eq!(normalize_project_name("bts"), "bts");
        assert_eq!(normalize_project_name("xtask"), "xtask");
    }

    #[test]
    fn workspace_target() {
        assert!(is_workspace(None));
        assert!(is_workspace(Some("all")));
        assert!(!is_workspace(Some("hosting")));
    }

    #[test]
    fn discovers_feature_crates() {
        let features = get_workspace_crates("crates/features").expect("features");
        let names: Vec<_> = features.iter().map(|c| c.package.name.as_str()).collect();
        assert!(names.contains(&"bts-hosting"));
        assert!(names.contains(&"bts-bindings"));
    }
}

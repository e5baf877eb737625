use crate::services::utils::{cargo, is_workspace, normalize_project_name};

/// Runs tests in the workspace or a specific crate, through `cargo-nextest` when installed.
///
/// # Errors
/// Returns an error if the test execution fails or if the test runner is not found.
pub fn run_tests(project: Option<&str>) -> anyhow::Result<()> {
    let has_nextest = std::process::Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> =
        if has_nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };
    args.extend(target(project));
    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            ["--failure-output", "immediate-final", "--success-output", "never"]
                .into_iter()
                .map(String::from),
        );
    }

    println!(
        "🧪 Running {} tests via '{}'...",
        label(project),
        if has_nextest { "nextest" } else { "cargo test" }
    );
    cargo(args, "Tests failed!")
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Errors
/// Returns an error if the doctest execution fails.
pub fn run_doctests(project: Option<&str>) -> anyhow::Result<()> {
    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];
    args.extend(target(project));
    args.push("--all-features".into());

    println!("📚 Running {} doc tests...", label(project));
    cargo(args, "Doc tests failed!")
}

fn target(project: Option<&str>) -> Vec<String> {
    match project {
        Some(project) if !is_workspace(Some(project)) => {
            vec!["-p".into(), normalize_project_name(project)]
        },
        _ => vec!["--workspace".into()],
    }
}

fn label(project: Option<&str>) -> &'static str {
    if is_workspace(project) { "workspace" } else { "crate" }
}

use crate::services::utils::cargo;

/// Checks formatting and runs clippy on every target with all features, denying warnings.
///
/// # Errors
/// Returns an error if formatting differs or clippy reports a warning.
pub fn run_lint(fix: bool) -> anyhow::Result<()> {
    if fix {
        println!("🧹 Formatting workspace...");
        cargo(["fmt", "--all"], "Formatting failed!")?;

        println!("🧹 Applying clippy suggestions...");
        return cargo(
            ["clippy", "--workspace", "--all-targets", "--all-features", "--fix", "--allow-dirty"],
            "Clippy could not apply its suggestions!",
        );
    }

    println!("🔍 Checking formatting...");
    cargo(["fmt", "--all", "--check"], "Formatting check failed! Run 'cargo xtask lint --fix'.")?;

    println!("🔍 Running clippy...");
    cargo(
        ["clippy", "--workspace", "--all-targets", "--all-features", "--", "-D", "warnings"],
        "Clippy reported warnings!",
    )
}

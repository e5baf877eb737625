//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and the deployment context.
//!
//! ## Config loading
//! ```rust,no_run
//! use bts_kernel::config::load_config;
//!
//! #[derive(serde::Deserialize)]
//! struct Settings {
//!     name: String,
//! }
//!
//! let settings: Settings = load_config(Some("bindings.toml")).unwrap();
//! # let _ = settings.name;
//! ```
//!
//! ## Deployment context
//! ```rust
//! use bts_kernel::deployment::DeploymentContext;
//! use bts_kernel::domain::TargetEnvironment;
//!
//! let ctx = DeploymentContext::new(TargetEnvironment::Acceptance);
//! assert!(!ctx.target_environment().is_development_or_build());
//! ```
pub mod config;
pub mod deployment;

pub use bts_domain as domain;

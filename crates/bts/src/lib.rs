//! Facade crate for BizTalk host resolution.
//! Re-exports the domain, kernel and feature crates under one name.
//! Keep this crate thin: it composes other crates and implements no resolution logic.
//!
//! ## Usage
//! - Add `bts` (the `bindings` feature is on by default).
//! - `use bts::prelude::*;` brings the types needed to resolve hosts into scope.
//!
//! ```rust
//! use bts::prelude::*;
//!
//! let adapter = Adapter::outbound(AdapterKind::Sftp);
//! let port = Artifact::SendPort { name: "Bank Statements", adapter: &adapter };
//!
//! let host = Host::default_policy().resolve_host(port, TargetEnvironment::Production)?;
//! assert_eq!(host, "TxHost_B2B_Sftp");
//! # Ok::<(), bts::hosting::HostingError>(())
//! ```

pub use bts_domain as domain;
pub use bts_kernel as kernel;

/// Feature crates and the build-time feature registry.
pub mod features {
    #[cfg(feature = "bindings")]
    pub use bts_bindings as bindings;
    pub use bts_hosting as hosting;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "hosting",
        #[cfg(feature = "bindings")]
        "bindings",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(feature = "bindings")]
pub use features::bindings;
pub use features::hosting;

pub mod prelude {
    #[cfg(feature = "bindings")]
    pub use bts_bindings::{ApplicationBinding, BindingError, HostReport};
    pub use bts_domain::{
        Adapter, AdapterKind, Artifact, Direction, NetworkZones, TargetEnvironment, WcfBinding,
        WcfHosting,
    };
    pub use bts_hosting::{
        AnyZonePolicy, Host, HostPolicy, HostingError, ResolveHost, ZoneBoundPolicy,
    };
    pub use bts_kernel::deployment::DeploymentContext;
}

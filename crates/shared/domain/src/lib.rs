//! # Domain Models
//!
//! Pure domain types for host resolution: network zones, target environments,
//! adapter descriptors and binding artifacts.
//! Keep it lean: no I/O and no resolution logic, just data and simple predicates.

pub mod adapter;
pub mod artifact;
pub mod environment;
pub mod error;
pub mod zones;

pub use adapter::{Adapter, AdapterKind, Direction, WcfBinding, WcfHosting};
pub use artifact::Artifact;
pub use environment::TargetEnvironment;
pub use error::{DomainError, DomainErrorExt};
pub use zones::NetworkZones;

//! # Host Resolution
//!
//! Derives the BizTalk host of orchestrations, receive locations and send ports from the
//! network zones their adapters may run in and from the target environment.
//!
//! * [`classifier`]: which network zones an adapter supports.
//! * [`naming`]: host and adapter naming conventions.
//! * [`policy`]: any-zone, zone-bound and explicit resolution policies.
//! * [`Host`]: the shared policy instances.

pub mod classifier;
mod error;
mod host;
pub mod naming;
pub mod policy;

pub use crate::classifier::{is_supported_for, supported_zones};
pub use crate::error::{HostingError, HostingErrorExt};
pub use crate::host::Host;
pub use crate::policy::{AnyZonePolicy, HostPolicy, ResolveHost, ZoneBoundPolicy};

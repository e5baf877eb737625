//! # Application Bindings
//!
//! Declarative description of a BizTalk application (receive ports and locations, send
//! ports, orchestrations) and the host report derived from it.
//!
//! ```rust
//! use bts_bindings::ApplicationBinding;
//! use bts_domain::TargetEnvironment;
//!
//! let binding: ApplicationBinding = serde_json::from_str(r#"{
//!     "name": "Accounting",
//!     "send_ports": [
//!         { "name": "Archive", "transport": { "adapter": { "protocol": "File" } } }
//!     ],
//!     "orchestrations": [ { "name": "Accounting.Processes.Billing" } ]
//! }"#)?;
//!
//! let report = binding.resolve_hosts(TargetEnvironment::Production)?;
//! assert_eq!(report.host_of("Archive"), Some("TxHost_File"));
//! assert_eq!(report.host_of("Accounting.Processes.Billing"), Some("PxHost"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
pub mod model;
pub mod report;
pub mod schedule;

pub use crate::error::{BindingError, BindingErrorExt};
pub use crate::model::{
    AdapterSpec, ApplicationBinding, Orchestration, ReceiveLocation, ReceivePort, RetryPolicy,
    SendPort, SendTransport, Transport,
};
pub use crate::report::{HostEntry, HostReport};
pub use crate::schedule::{Ordinality, Schedule, ServiceWindow, TimeWindow};

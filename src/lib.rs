//! Type-safe CredHub credential names for Rust.
//!
//! CredHub addresses every credential by a slash-delimited path. Service
//! brokers store binding credentials under names of the form
//! `/c/service-broker-name/service-offering-name/binding-GUID/credential-name`.
//! This crate builds those names from their segments.
//!
//! # Core Components
//!
//! - [`ServiceInstanceCredentialName`] - Name of a service instance binding credential
//! - [`ServiceInstanceCredentialNameBuilder`] - Fluent builder for the four segments
//! - [`CredentialName`] - The ordered segments and their canonical path form
//!
//! # Quick Start
//!
//! ```rust
//! use credhub_names::ServiceInstanceCredentialName;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let name = ServiceInstanceCredentialName::builder()
//!         .service_broker_name("broker1")
//!         .service_offering_name("mysql")
//!         .service_binding_id("abc-123")
//!         .credential_name("password")
//!         .build()?;
//!
//!     assert_eq!(name.name(), "/c/broker1/mysql/abc-123/password");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod name;

pub use error::{CredentialNameError, CredentialNameResult};
pub use name::{
    CredentialName, SEGMENT_SEPARATOR, SERVICE_INSTANCE_TYPE, ServiceInstanceCredentialName,
    ServiceInstanceCredentialNameBuilder, ServiceInstanceCredentialNameParts,
};

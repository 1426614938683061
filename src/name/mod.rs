//! Credential name value objects.
//!
//! A credential name is an ordered list of segments rendered as a
//! slash-delimited path. [`CredentialName`] owns the segments and the joining
//! rules. Concrete variants such as [`ServiceInstanceCredentialName`] compose
//! it and add their own typed accessors and construction rules.

mod builder;
mod credential_name;
mod service_instance;

pub use builder::ServiceInstanceCredentialNameBuilder;
pub use credential_name::{CredentialName, SEGMENT_SEPARATOR};
pub use service_instance::{
    SERVICE_INSTANCE_TYPE, ServiceInstanceCredentialName, ServiceInstanceCredentialNameParts,
};

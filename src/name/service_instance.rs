//! Credential names for service instance binding credentials.
//!
//! Service brokers store the credentials they hand out to bound applications
//! under a name made of four segments: the service broker name, the service
//! offering name, the service binding GUID and the credential name. The full
//! name has the form
//! `/c/service-broker-name/service-offering-name/binding-GUID/credential-name`.

use crate::error::CredentialNameError;
use crate::name::builder::ServiceInstanceCredentialNameBuilder;
use crate::name::credential_name::CredentialName;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Discriminator segment identifying service instance credentials.
pub const SERVICE_INSTANCE_TYPE: &str = "c";

pub(crate) const SERVICE_BROKER_NAME: &str = "serviceBrokerName";
pub(crate) const SERVICE_OFFERING_NAME: &str = "serviceOfferingName";
pub(crate) const SERVICE_BINDING_ID: &str = "serviceBindingId";
pub(crate) const CREDENTIAL_NAME: &str = "credentialName";

/// The client-provided name of a service instance binding credential.
///
/// Values are immutable once built. Two names are equal when all of their
/// segments are equal, whatever order the segments were supplied in.
///
/// Names are only ever sent to CredHub, so the type serializes to its
/// canonical path and has no `Deserialize` impl. Segments received as JSON
/// arrive as [`ServiceInstanceCredentialNameParts`] and are converted with
/// `TryFrom`.
///
/// ## Examples
///
/// ```rust
/// use credhub_names::ServiceInstanceCredentialName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = ServiceInstanceCredentialName::builder()
///         .service_broker_name("broker1")
///         .service_offering_name("mysql")
///         .service_binding_id("abc-123")
///         .credential_name("password")
///         .build()?;
///
///     assert_eq!(name.name(), "/c/broker1/mysql/abc-123/password");
///
///     // Every segment must be supplied
///     let incomplete = ServiceInstanceCredentialName::builder()
///         .service_broker_name("broker1")
///         .build();
///     assert!(incomplete.is_err());
///
///     Ok(())
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceInstanceCredentialName {
    name: CredentialName,
}

impl ServiceInstanceCredentialName {
    /// Create a name directly from all four segments.
    ///
    /// # Arguments
    ///
    /// * `service_broker_name` - The human-readable name of the service broker
    /// * `service_offering_name` - The human-readable name of the service offering
    /// * `service_binding_id` - The GUID of the service binding
    /// * `credential_name` - The name of the binding credential
    pub fn new(
        service_broker_name: impl Into<String>,
        service_offering_name: impl Into<String>,
        service_binding_id: impl Into<String>,
        credential_name: impl Into<String>,
    ) -> Self {
        Self {
            name: CredentialName::new(
                SERVICE_INSTANCE_TYPE,
                [
                    service_broker_name.into(),
                    service_offering_name.into(),
                    service_binding_id.into(),
                    credential_name.into(),
                ],
            ),
        }
    }

    /// Create a builder for supplying the segments one at a time.
    pub fn builder() -> ServiceInstanceCredentialNameBuilder {
        ServiceInstanceCredentialNameBuilder::new()
    }

    /// Get the service broker name segment.
    pub fn service_broker_name(&self) -> &str {
        self.segment(1)
    }

    /// Get the service offering name segment.
    pub fn service_offering_name(&self) -> &str {
        self.segment(2)
    }

    /// Get the service binding ID segment.
    pub fn service_binding_id(&self) -> &str {
        self.segment(3)
    }

    /// Get the credential name segment.
    pub fn credential_name(&self) -> &str {
        self.segment(4)
    }

    /// Get all five segments in order, starting with the `c` discriminator.
    pub fn segments(&self) -> &[String] {
        self.name.segments()
    }

    /// Get the canonical path form of the name.
    pub fn name(&self) -> String {
        self.name.name()
    }

    /// Borrow the underlying composite name.
    pub fn as_credential_name(&self) -> &CredentialName {
        &self.name
    }

    /// Consume the value and return the underlying composite name.
    pub fn into_credential_name(self) -> CredentialName {
        self.name
    }

    fn segment(&self, index: usize) -> &str {
        // `new` always stores the discriminator plus four segments.
        &self.name.segments()[index]
    }
}

impl fmt::Debug for ServiceInstanceCredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceInstanceCredentialName")
            .field("segments", &self.segments())
            .finish()
    }
}

impl fmt::Display for ServiceInstanceCredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}

impl From<ServiceInstanceCredentialName> for CredentialName {
    fn from(value: ServiceInstanceCredentialName) -> Self {
        value.into_credential_name()
    }
}

impl AsRef<CredentialName> for ServiceInstanceCredentialName {
    fn as_ref(&self) -> &CredentialName {
        &self.name
    }
}

impl Serialize for ServiceInstanceCredentialName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.name.serialize(serializer)
    }
}

/// The four segments as received from untyped input such as a JSON body.
///
/// Keys are camelCase. Converting into a [`ServiceInstanceCredentialName`]
/// fails with `InvalidArgument` for a null segment and `MissingSegment` for
/// an absent one.
///
/// ```rust
/// use credhub_names::{ServiceInstanceCredentialName, ServiceInstanceCredentialNameParts};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let parts: ServiceInstanceCredentialNameParts = serde_json::from_str(
///         r#"{"serviceBrokerName": "broker1", "serviceOfferingName": "mysql",
///             "serviceBindingId": "abc-123", "credentialName": "password"}"#,
///     )?;
///     let name = ServiceInstanceCredentialName::try_from(parts)?;
///     assert_eq!(name.name(), "/c/broker1/mysql/abc-123/password");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstanceCredentialNameParts {
    // Outer `Option`: key present. Inner `Option`: value non-null.
    #[serde(default, deserialize_with = "present")]
    service_broker_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    service_offering_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    service_binding_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    credential_name: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TryFrom<ServiceInstanceCredentialNameParts> for ServiceInstanceCredentialName {
    type Error = CredentialNameError;

    fn try_from(parts: ServiceInstanceCredentialNameParts) -> Result<Self, Self::Error> {
        let mut builder = Self::builder();
        if let Some(value) = parts.service_broker_name {
            builder.try_service_broker_name(value)?;
        }
        if let Some(value) = parts.service_offering_name {
            builder.try_service_offering_name(value)?;
        }
        if let Some(value) = parts.service_binding_id {
            builder.try_service_binding_id(value)?;
        }
        if let Some(value) = parts.credential_name {
            builder.try_credential_name(value)?;
        }
        builder.build()
    }
}

//! Fluent builder for service instance credential names.
//!
//! The typed setters take owned strings and therefore cannot receive a null
//! value. Segments that come from untyped input, where a value may be
//! absent, go through the `try_*` setters instead.

use crate::error::{CredentialNameError, CredentialNameResult};
use crate::name::service_instance::{
    CREDENTIAL_NAME, SERVICE_BINDING_ID, SERVICE_BROKER_NAME, SERVICE_OFFERING_NAME,
    ServiceInstanceCredentialName,
};
use log::{debug, trace, warn};

/// Builder that stages the four segments of a [`ServiceInstanceCredentialName`].
///
/// Segments may be supplied in any order. [`build`](Self::build) fails if any
/// of them is still unset.
///
/// # Example
/// ```rust
/// use credhub_names::ServiceInstanceCredentialName;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name = ServiceInstanceCredentialName::builder()
///         .credential_name("password")
///         .service_binding_id("abc-123")
///         .service_offering_name("mysql")
///         .service_broker_name("broker1")
///         .build()?;
///
///     assert_eq!(name.to_string(), "/c/broker1/mysql/abc-123/password");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceInstanceCredentialNameBuilder {
    service_broker_name: Option<String>,
    service_offering_name: Option<String>,
    service_binding_id: Option<String>,
    credential_name: Option<String>,
}

impl ServiceInstanceCredentialNameBuilder {
    /// Create a builder with every segment unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service broker name segment.
    ///
    /// This is typically a human-readable name that is unique among all
    /// service brokers in the platform.
    pub fn service_broker_name(mut self, service_broker_name: impl Into<String>) -> Self {
        self.service_broker_name = Some(staged(SERVICE_BROKER_NAME, service_broker_name.into()));
        self
    }

    /// Set the service offering name segment.
    ///
    /// This is typically a human-readable name that is unique within the
    /// service broker.
    pub fn service_offering_name(mut self, service_offering_name: impl Into<String>) -> Self {
        self.service_offering_name =
            Some(staged(SERVICE_OFFERING_NAME, service_offering_name.into()));
        self
    }

    /// Set the service binding ID segment.
    ///
    /// The platform generates this GUID when a service instance is bound to
    /// an application.
    pub fn service_binding_id(mut self, service_binding_id: impl Into<String>) -> Self {
        self.service_binding_id = Some(staged(SERVICE_BINDING_ID, service_binding_id.into()));
        self
    }

    /// Set the credential name segment.
    pub fn credential_name(mut self, credential_name: impl Into<String>) -> Self {
        self.credential_name = Some(staged(CREDENTIAL_NAME, credential_name.into()));
        self
    }

    /// Set the service broker name from a value that may be null.
    ///
    /// Fails with [`CredentialNameError::InvalidArgument`] for `None`, leaving
    /// every staged segment unchanged.
    pub fn try_service_broker_name(
        &mut self,
        service_broker_name: Option<String>,
    ) -> CredentialNameResult<&mut Self> {
        self.service_broker_name = Some(required(SERVICE_BROKER_NAME, service_broker_name)?);
        Ok(self)
    }

    /// Set the service offering name from a value that may be null.
    pub fn try_service_offering_name(
        &mut self,
        service_offering_name: Option<String>,
    ) -> CredentialNameResult<&mut Self> {
        self.service_offering_name = Some(required(SERVICE_OFFERING_NAME, service_offering_name)?);
        Ok(self)
    }

    /// Set the service binding ID from a value that may be null.
    pub fn try_service_binding_id(
        &mut self,
        service_binding_id: Option<String>,
    ) -> CredentialNameResult<&mut Self> {
        self.service_binding_id = Some(required(SERVICE_BINDING_ID, service_binding_id)?);
        Ok(self)
    }

    /// Set the credential name from a value that may be null.
    pub fn try_credential_name(
        &mut self,
        credential_name: Option<String>,
    ) -> CredentialNameResult<&mut Self> {
        self.credential_name = Some(required(CREDENTIAL_NAME, credential_name)?);
        Ok(self)
    }

    /// Build the name from the staged segments.
    ///
    /// Segments are checked in name order, so the error names the first
    /// missing one.
    pub fn build(self) -> CredentialNameResult<ServiceInstanceCredentialName> {
        let result = self.assemble();
        match &result {
            Ok(name) => debug!("Built service instance credential name {}", name),
            Err(e) => warn!("Cannot build service instance credential name: {}", e),
        }
        result
    }

    fn assemble(self) -> CredentialNameResult<ServiceInstanceCredentialName> {
        Ok(ServiceInstanceCredentialName::new(
            present(SERVICE_BROKER_NAME, self.service_broker_name)?,
            present(SERVICE_OFFERING_NAME, self.service_offering_name)?,
            present(SERVICE_BINDING_ID, self.service_binding_id)?,
            present(CREDENTIAL_NAME, self.credential_name)?,
        ))
    }
}

fn staged(field: &'static str, value: String) -> String {
    trace!("Staging {} = {:?}", field, value);
    value
}

fn required(field: &'static str, value: Option<String>) -> CredentialNameResult<String> {
    match value {
        Some(value) => Ok(staged(field, value)),
        None => Err(CredentialNameError::InvalidArgument { field }),
    }
}

fn present(field: &'static str, value: Option<String>) -> CredentialNameResult<String> {
    value.ok_or(CredentialNameError::MissingSegment { field })
}

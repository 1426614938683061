//! CredentialName value object for segmented credential paths.
//!
//! Every credential stored in CredHub is addressed by a slash-delimited path.
//! This module holds the segments of such a path and renders them in their
//! canonical form. Concrete name variants compose a `CredentialName` rather
//! than re-implementing the joining rules.

use serde::{Serialize, Serializer};
use std::fmt;

/// Separator placed before every segment of a canonical credential name.
pub const SEGMENT_SEPARATOR: char = '/';

/// An ordered sequence of credential name segments.
///
/// The first segment is the type discriminator of the concrete name variant.
/// The canonical form is the segments joined with `/`, with a leading `/`.
///
/// ## Examples
///
/// ```rust
/// use credhub_names::{CredentialName, ServiceInstanceCredentialName};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let name: CredentialName = ServiceInstanceCredentialName::builder()
///         .service_broker_name("broker1")
///         .service_offering_name("mysql")
///         .service_binding_id("abc-123")
///         .credential_name("password")
///         .build()?
///         .into();
///
///     assert_eq!(name.name(), "/c/broker1/mysql/abc-123/password");
///     assert_eq!(name.segments()[0], "c");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialName {
    segments: Vec<String>,
}

impl CredentialName {
    /// Create a name from a discriminator and the remaining segments.
    ///
    /// The discriminator always occupies the first position, so a name can
    /// never be built without one.
    pub(crate) fn new<I>(discriminator: &str, segments: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut all = vec![discriminator.to_string()];
        all.extend(segments);
        Self { segments: all }
    }

    /// Get the segments in order, discriminator first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the type discriminator segment.
    pub fn discriminator(&self) -> &str {
        // The constructor always places the discriminator first.
        &self.segments[0]
    }

    /// Get the canonical path form, e.g. `/c/broker/offering/binding/credential`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// Consume the name and return its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

impl fmt::Display for CredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}{}", SEGMENT_SEPARATOR, segment)?;
        }
        Ok(())
    }
}

impl Serialize for CredentialName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

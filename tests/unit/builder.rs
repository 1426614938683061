//! Builder Tests
//!
//! Covers chaining in any order, the fallible setters used for untyped input,
//! and the check that every segment is supplied before a name is built.

use crate::assert_fails_on;
use crate::common::{self, fixtures};
use credhub_names::{CredentialNameError, ServiceInstanceCredentialName};

/// Test the documented example name
#[test]
fn test_build_mysql_password() {
    common::init_logging();

    let name = common::complete_builder().build().unwrap();
    assert_eq!(
        name.segments(),
        &["c", "broker1", "mysql", "abc-123", "password"]
    );
    assert_eq!(name.name(), fixtures::MYSQL_PASSWORD_PATH);
}

/// Test that call order does not affect the built name
#[test]
fn test_setter_order_is_irrelevant() {
    let [broker, offering, binding, credential] = fixtures::MYSQL_PASSWORD;

    let reversed = ServiceInstanceCredentialName::builder()
        .credential_name(credential)
        .service_binding_id(binding)
        .service_offering_name(offering)
        .service_broker_name(broker)
        .build()
        .unwrap();

    let shuffled = ServiceInstanceCredentialName::builder()
        .service_binding_id(binding)
        .service_broker_name(broker)
        .credential_name(credential)
        .service_offering_name(offering)
        .build()
        .unwrap();

    assert_eq!(reversed, shuffled);
    assert_eq!(reversed, common::complete_builder().build().unwrap());
}

/// Test that setters accept both owned and borrowed strings
#[test]
fn test_setters_accept_owned_strings() {
    let binding_id = String::from(fixtures::REDIS_URI[2]);

    let name = ServiceInstanceCredentialName::builder()
        .service_broker_name(fixtures::REDIS_URI[0].to_string())
        .service_offering_name(fixtures::REDIS_URI[1])
        .service_binding_id(binding_id.clone())
        .credential_name(fixtures::REDIS_URI[3])
        .build()
        .unwrap();

    assert_eq!(name.service_binding_id(), binding_id);
}

/// Test that the builder agrees with the direct constructor
#[test]
fn test_builder_matches_constructor() {
    let [broker, offering, binding, credential] = fixtures::REDIS_URI;
    let direct = ServiceInstanceCredentialName::new(broker, offering, binding, credential);

    let built = ServiceInstanceCredentialName::builder()
        .service_broker_name(broker)
        .service_offering_name(offering)
        .service_binding_id(binding)
        .credential_name(credential)
        .build()
        .unwrap();

    assert_eq!(direct, built);
}

/// Test each missing segment is reported by name
#[test]
fn test_missing_segments_are_reported() {
    common::init_logging();
    let [broker, offering, binding, credential] = fixtures::MYSQL_PASSWORD;

    let without_broker = ServiceInstanceCredentialName::builder()
        .service_offering_name(offering)
        .service_binding_id(binding)
        .credential_name(credential)
        .build();
    assert_fails_on!(without_broker, MissingSegment, "serviceBrokerName");

    let without_offering = ServiceInstanceCredentialName::builder()
        .service_broker_name(broker)
        .service_binding_id(binding)
        .credential_name(credential)
        .build();
    assert_fails_on!(without_offering, MissingSegment, "serviceOfferingName");

    let without_binding = ServiceInstanceCredentialName::builder()
        .service_broker_name(broker)
        .service_offering_name(offering)
        .credential_name(credential)
        .build();
    assert_fails_on!(without_binding, MissingSegment, "serviceBindingId");

    let without_credential = ServiceInstanceCredentialName::builder()
        .service_broker_name(broker)
        .service_offering_name(offering)
        .service_binding_id(binding)
        .build();
    assert_fails_on!(without_credential, MissingSegment, "credentialName");
}

/// Test that every fallible setter rejects null
#[test]
fn test_fallible_setters_reject_null() {
    let mut builder = common::complete_builder();

    assert_fails_on!(
        builder.try_service_broker_name(None),
        InvalidArgument,
        "serviceBrokerName"
    );
    assert_fails_on!(
        builder.try_service_offering_name(None),
        InvalidArgument,
        "serviceOfferingName"
    );
    assert_fails_on!(
        builder.try_service_binding_id(None),
        InvalidArgument,
        "serviceBindingId"
    );
    assert_fails_on!(
        builder.try_credential_name(None),
        InvalidArgument,
        "credentialName"
    );

    // All four rejections left the staged segments alone
    let name = builder.build().unwrap();
    assert_eq!(name.name(), fixtures::MYSQL_PASSWORD_PATH);
}

/// Test that a rejected null is not mistaken for a set segment
#[test]
fn test_rejected_null_leaves_segment_unset() {
    let [broker, offering, binding, _] = fixtures::MYSQL_PASSWORD;
    let mut builder = ServiceInstanceCredentialName::builder()
        .service_broker_name(broker)
        .service_offering_name(offering)
        .service_binding_id(binding);

    let error = builder.try_credential_name(None).unwrap_err();
    assert_eq!(error.to_string(), "credentialName must not be null");

    assert_eq!(
        builder.build(),
        Err(CredentialNameError::MissingSegment {
            field: "credentialName"
        })
    );
}

/// Test that a cloned builder builds independently of the original
#[test]
fn test_cloned_builder_is_independent() {
    let original = common::complete_builder();
    let variant = original.clone().credential_name("username").build().unwrap();
    let name = original.build().unwrap();

    assert_eq!(name.credential_name(), "password");
    assert_eq!(variant.credential_name(), "username");
    assert_ne!(name, variant);
}

use std::str::FromStr;

use cryptomatch_core::errors::*;
use cryptomatch_core::models::PersonalityCategory;

#[test]
fn every_variant_maps_to_a_stable_code() {
    assert_eq!(
        ConfigError::FileNotFound { path: "x".into() }.error_code(),
        "CONFIG_ERROR"
    );
    assert_eq!(
        ConfigError::InvalidWeights {
            sum: 0.9,
            message: "off by 0.1".into(),
        }
        .error_code(),
        "INVALID_WEIGHTS"
    );
    assert_eq!(
        CatalogError::InvalidCategory { value: "doge".into() }.error_code(),
        "INVALID_CATEGORY"
    );
    assert_eq!(
        CollaboratorError::Unavailable {
            service: "render".into(),
            reason: "down".into(),
        }
        .error_code(),
        "COLLABORATOR_UNAVAILABLE"
    );
}

#[test]
fn match_error_delegates_code_to_source() {
    let err: MatchError = CatalogError::InvalidCategory {
        value: "laser_eyes".into(),
    }
    .into();
    assert_eq!(err.error_code(), "INVALID_CATEGORY");

    let err: MatchError = ConfigError::ValidationFailed {
        field: "matching.default_top_n".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn boundary_string_prefixes_code() {
    let err = CollaboratorError::InvalidOutput {
        service: "narrative".into(),
        reason: "empty text".into(),
    };
    assert_eq!(
        err.boundary_string(),
        "[COLLABORATOR_INVALID_OUTPUT] narrative returned unusable output: empty text"
    );
}

#[test]
fn unknown_category_string_is_rejected() {
    let err = PersonalityCategory::from_str("laser_eyes").unwrap_err();
    assert_eq!(err.to_string(), "Unknown personality category: laser_eyes");

    let err = serde_json::from_str::<PersonalityCategory>("\"BITCOIN_MAXI\"").unwrap_err();
    assert!(err.to_string().contains("BITCOIN_MAXI"));
}

#[test]
fn known_category_strings_parse() {
    for category in PersonalityCategory::ALL {
        assert_eq!(PersonalityCategory::from_str(category.as_str()).unwrap(), category);
    }
}

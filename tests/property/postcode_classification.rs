// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Postcode Classification
//!
//! Verifies totality, normalization fixed points and the result invariants
//! over generated postcodes and arbitrary text.

use proptest::prelude::*;
use watt_savings_intake::domain::POSTCODE_AREAS;
use watt_savings_intake::{classify, Coverage};

// ============================================================================
// Strategies
// ============================================================================

/// Area prefix: mostly real areas, sometimes arbitrary letters
fn area_prefix() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(POSTCODE_AREAS.iter().map(|a| a.prefix).collect::<Vec<_>>())
            .prop_map(str::to_string),
        1 => "[A-Z]{1,2}",
    ]
}

/// Structurally valid canonical postcode, e.g. "SW1A 1AA"
fn canonical_postcode() -> impl Strategy<Value = String> {
    (area_prefix(), "[0-9]", "[A-Z0-9]?", "[0-9][A-Z]{2}").prop_map(
        |(prefix, digit, extra, inward)| format!("{prefix}{digit}{extra} {inward}"),
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn classify_is_total(input in any::<String>()) {
        let result = classify(&input, None);
        if !result.valid {
            prop_assert!(result.error.is_some());
            prop_assert!(result.energy_region.is_none());
            prop_assert!(!result.business_supported);
            prop_assert_eq!(result.coverage, Coverage::Unknown);
        }
    }

    #[test]
    fn generated_postcodes_are_valid_and_canonical(postcode in canonical_postcode()) {
        let result = classify(&postcode, None);
        prop_assert!(result.valid);
        prop_assert_eq!(&result.postcode, &postcode);
        prop_assert!(result.error.is_none());
    }

    #[test]
    fn canonical_form_is_fixed_point(postcode in canonical_postcode()) {
        let first = classify(&postcode, None);
        let second = classify(&first.postcode, None);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lowercase_round_trip(postcode in canonical_postcode()) {
        let upper = classify(&postcode, None);
        let lower = classify(&postcode.to_lowercase(), None);
        prop_assert_eq!(upper.postcode, lower.postcode);
        prop_assert_eq!(upper.district, lower.district);
        prop_assert_eq!(upper.region, lower.region);
        prop_assert_eq!(upper.energy_region, lower.energy_region);
        prop_assert_eq!(upper.business_supported, lower.business_supported);
    }

    #[test]
    fn spacing_does_not_matter(postcode in canonical_postcode(), pad in " {0,3}") {
        let compact = postcode.replace(' ', "");
        let spaced = format!("{pad}{compact}{pad}");
        prop_assert_eq!(classify(&spaced, None).postcode, postcode);
    }

    #[test]
    fn valid_results_keep_invariants(postcode in canonical_postcode()) {
        let result = classify(&postcode, None);
        let outward = result.postcode.split(' ').next().unwrap_or_default();
        prop_assert_eq!(result.district.as_str(), outward);
        prop_assert_eq!(result.business_supported, result.coverage.is_supported());
        if result.coverage == Coverage::Unknown {
            prop_assert_eq!(result.region.as_str(), "Unknown");
            prop_assert!(result.energy_region.is_none());
        }
    }
}

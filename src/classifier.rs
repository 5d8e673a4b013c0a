// Copyright (c) 2025 - Cowboy AI, Inc.
//! Postcode Classification
//!
//! Turns free-text postcode input into a [`PostcodeResult`]: structural
//! verdict, canonical form, district, region, energy region and whether the
//! broker can quote a business there.
//!
//! Classification is total. Every input, including empty, whitespace-only
//! and non-ASCII text, yields a well-formed result; failures are reported
//! through the result's fields, never as a Rust error or panic.
//!
//! # Example
//!
//! ```rust
//! use watt_savings_intake::classify;
//!
//! let result = classify("sw1a1aa", None);
//! assert!(result.valid);
//! assert_eq!(result.postcode, "SW1A 1AA");
//! assert_eq!(result.district, "SW1A");
//! assert_eq!(result.region, "London");
//! assert!(result.business_supported);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::ClassifierConfig;
use crate::domain::postcode;
use crate::domain::{
    coverage_for, lookup_area, Coverage, EnergyRegion, Nation, Postcode, UNKNOWN_REGION,
};
use crate::errors::IntakeResult;

/// Outcome of classifying one postcode input
///
/// Invariants:
/// - `!valid` implies `energy_region == None`, `!business_supported`,
///   `coverage == Unknown` and `error.is_some()`
/// - `valid` implies `error == None` and `district` is the text of
///   `postcode` before its space
/// - `business_supported == coverage.is_supported()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeResult {
    pub valid: bool,
    pub postcode: String,
    pub district: String,
    pub region: String,
    pub energy_region: Option<EnergyRegion>,
    pub business_supported: bool,
    /// Structural failure only; coverage problems never land here
    pub error: Option<String>,
    pub nation: Option<Nation>,
    pub coverage: Coverage,
}

impl PostcodeResult {
    fn invalid(raw: &str, error: impl ToString) -> Self {
        Self {
            valid: false,
            postcode: postcode::clean(raw),
            district: String::new(),
            region: UNKNOWN_REGION.to_string(),
            energy_region: None,
            business_supported: false,
            error: Some(error.to_string()),
            nation: None,
            coverage: Coverage::Unknown,
        }
    }

    /// Message to show when the postcode parsed but cannot be quoted
    pub fn coverage_message(&self) -> Option<&'static str> {
        if !self.valid {
            return None;
        }
        match self.coverage {
            Coverage::Supported => None,
            Coverage::Excluded => {
                Some("Sorry, we currently only serve England, Scotland, and Wales")
            }
            Coverage::Unknown => Some(
                "We could not confirm that we cover this postcode area. Please call us to discuss your quote.",
            ),
        }
    }

    /// Inline text for the postcode field: the error, or "district, region • energy region"
    pub fn summary(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        match self.energy_region {
            Some(energy_region) => format!("{}, {} • {}", self.district, self.region, energy_region),
            None => format!("{}, {}", self.district, self.region),
        }
    }
}

/// Postcode classifier holding the serviced-area configuration
#[derive(Debug, Clone, Default)]
pub struct PostcodeClassifier {
    config: ClassifierConfig,
}

impl PostcodeClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify `raw`, regardless of its length
    ///
    /// `address_line` is accepted for address disambiguation later on and
    /// does not influence the result.
    pub fn classify(&self, raw: &str, address_line: Option<&str>) -> PostcodeResult {
        if let Some(address_line) = address_line {
            trace!(address_line, "Address line supplied with postcode");
        }

        let postcode = match Postcode::new(raw) {
            Ok(postcode) => postcode,
            Err(e) => {
                debug!(input = raw, error = %e, "Postcode failed structural validation");
                return PostcodeResult::invalid(raw, e);
            }
        };

        let area = lookup_area(postcode.area());
        let coverage = coverage_for(area, &self.config.serviced_nations);

        match (area, coverage) {
            (None, _) => debug!(postcode = %postcode, "Postcode area not in lookup table"),
            (Some(area), Coverage::Excluded) => {
                info!(postcode = %postcode, nation = %area.nation, "Postcode outside serviced nations")
            }
            _ => debug!(postcode = %postcode, "Postcode classified"),
        }

        PostcodeResult {
            valid: true,
            district: postcode.outward().to_string(),
            region: area.map_or(UNKNOWN_REGION, |a| a.region).to_string(),
            energy_region: area.and_then(|a| a.energy_region),
            business_supported: coverage.is_supported(),
            error: None,
            nation: area.map(|a| a.nation),
            coverage,
            postcode: postcode.into(),
        }
    }

    /// Classify only once the input passes the minimum-length gate
    ///
    /// `None` means "not yet validated", which callers must keep distinct
    /// from an invalid verdict.
    pub fn check(&self, raw: &str, address_line: Option<&str>) -> Option<PostcodeResult> {
        self.config
            .meets_length_gate(raw)
            .then(|| self.classify(raw, address_line))
    }
}

/// Classify with the default configuration
pub fn classify(raw: &str, address_line: Option<&str>) -> PostcodeResult {
    PostcodeClassifier::default().classify(raw, address_line)
}

/// Postcode lookup backend
///
/// Shaped as an I/O call so a server-side or third-party postcode service can
/// replace the static table without changing callers.
#[async_trait]
pub trait PostcodeLookup: Send + Sync {
    /// Look up `raw` and judge it
    async fn lookup(&self, raw: &str, address_line: Option<&str>) -> IntakeResult<PostcodeResult>;

    /// Trimmed input shorter than this gets no verdict
    fn min_input_length(&self) -> usize;
}

#[async_trait]
impl PostcodeLookup for PostcodeClassifier {
    async fn lookup(&self, raw: &str, address_line: Option<&str>) -> IntakeResult<PostcodeResult> {
        Ok(self.classify(raw, address_line))
    }

    fn min_input_length(&self) -> usize {
        self.config.min_input_length
    }
}

//! Intake core for the Watt Savings business-energy quote form
//!
//! This crate provides UK postcode normalization and classification
//! (district, region, energy region, serviced-nation gating), contact detail
//! checks, and the submission gate applied before a lead is forwarded.

pub mod classifier;
pub mod config;
pub mod domain;
pub mod errors;
pub mod service;

// Re-export commonly used types
pub use classifier::{classify, PostcodeClassifier, PostcodeLookup, PostcodeResult};
pub use config::ClassifierConfig;
pub use domain::{validate_email, validate_phone, Coverage, EnergyRegion, Nation};
pub use errors::{IntakeError, IntakeResult};

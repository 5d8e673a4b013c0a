// Copyright (c) 2025 - Cowboy AI, Inc.
//! Intake Domain Models
//!
//! Value objects and static geography used by the quote form.
//!
//! # Value Objects with Invariants
//!
//! - [`Postcode`] - canonical UK postcode (outward + inward code)
//! - [`EmailAddress`] - `local@domain.tld` shape
//! - [`PhoneNumber`] - plausible UK digit count
//!
//! # Geography
//!
//! - [`PostcodeArea`] - static area table row (region, energy region, nation)
//! - [`Coverage`] - supported / excluded / unknown business availability
//!
//! # Entities
//!
//! - [`QuoteRequest`] - raw form input
//! - [`QuoteSubmission`] - validated lead with canonical postcode

pub mod contact;
pub mod postcode;
pub mod quote;
pub mod region;

pub use contact::{validate_email, validate_phone, EmailAddress, EmailError, PhoneError, PhoneNumber};
pub use postcode::{Postcode, PostcodeError};
pub use quote::{
    AnnualSpend, EnergyType, QuoteRequest, QuoteRequestBuilder, QuoteSubmission, SubmissionError,
};
pub use region::{
    coverage_for, lookup_area, Coverage, EnergyRegion, Nation, PostcodeArea, UnknownNation,
    POSTCODE_AREAS, UNKNOWN_REGION,
};

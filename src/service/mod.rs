// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for the Quote Form
//!
//! Coordinates the pure domain checks with the asynchronous edges of the
//! form: postcode lookups that may complete out of order, and the external
//! intake endpoint that receives validated leads.
//!
//! ```text
//! Keystroke ──▶ PostcodeFieldValidator ──▶ PostcodeLookup ──▶ FieldState
//!
//! Submit ──▶ QuoteIntake::prepare (gate) ──▶ QuoteSink ──▶ SubmissionReceipt
//! ```

pub mod postcode_field;
pub mod quote_intake;

pub use postcode_field::{FieldState, PostcodeFieldValidator};
pub use quote_intake::{QuoteIntake, QuoteSink, SubmissionReceipt};

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Quote Intake Service
//!
//! Applies the form's submission gate to a [`QuoteRequest`] and forwards the
//! resulting [`QuoteSubmission`] to the external intake endpoint.
//!
//! Gate order (first failure wins):
//!
//! 1. Required fields present
//! 2. Postcode structurally valid
//! 3. Postcode area business-supported
//! 4. Email address
//! 5. Phone number
//! 6. Contract end date not in the past

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::classifier::PostcodeClassifier;
use crate::domain::quote::non_blank;
use crate::domain::{
    EmailAddress, PhoneNumber, Postcode, QuoteRequest, QuoteSubmission, SubmissionError,
};
use crate::errors::IntakeResult;

/// Answer from the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
}

/// External destination for validated leads (the spreadsheet-backed API)
#[async_trait]
pub trait QuoteSink: Send + Sync {
    async fn submit(&self, submission: &QuoteSubmission) -> IntakeResult<SubmissionReceipt>;
}

/// Submission gate plus forwarding to a [`QuoteSink`]
pub struct QuoteIntake<S: QuoteSink> {
    classifier: PostcodeClassifier,
    sink: S,
}

impl<S: QuoteSink> QuoteIntake<S> {
    pub fn new(classifier: PostcodeClassifier, sink: S) -> Self {
        Self { classifier, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the submission gate
    ///
    /// `today` bounds the contract end date; it is a parameter so the gate
    /// stays a pure function of its inputs.
    pub fn prepare(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> Result<QuoteSubmission, SubmissionError> {
        let missing = request.missing_required_fields();
        if !missing.is_empty() {
            return Err(SubmissionError::MissingRequiredFields(missing));
        }

        let verdict = self
            .classifier
            .classify(&request.postcode, Some(request.address_line1.as_str()));
        if !verdict.valid {
            return Err(SubmissionError::InvalidPostcode);
        }
        if !verdict.business_supported {
            return Err(SubmissionError::UnsupportedArea);
        }
        let postcode =
            Postcode::new(&verdict.postcode).map_err(|_| SubmissionError::InvalidPostcode)?;

        let email = EmailAddress::new(&request.email).map_err(|_| SubmissionError::InvalidEmail)?;
        let phone = PhoneNumber::new(&request.phone).map_err(|_| SubmissionError::InvalidPhone)?;

        if let Some(end) = request.contract_end_date {
            if end < today {
                return Err(SubmissionError::ContractEndDateInPast(end));
            }
        }

        Ok(QuoteSubmission {
            id: Uuid::now_v7(),
            submitted_at: Utc::now(),
            business_name: request.business_name.trim().to_string(),
            contact_name: request.contact_name.trim().to_string(),
            email,
            phone,
            postcode,
            district: verdict.district,
            region: verdict.region,
            energy_region: verdict.energy_region,
            address_line1: non_blank(&request.address_line1),
            current_supplier: non_blank(&request.current_supplier),
            annual_spend: request.annual_spend,
            contract_end_date: request.contract_end_date,
            energy_type: request.energy_type,
            message: non_blank(&request.message),
        })
    }

    /// Gate the request, then forward it to the sink
    pub async fn submit(
        &self,
        request: &QuoteRequest,
        today: NaiveDate,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let submission = self.prepare(request, today).map_err(|e| {
            warn!(error = %e, "Quote request rejected by submission gate");
            e
        })?;

        let receipt = self.sink.submit(&submission).await.map_err(|e| {
            error!(submission_id = %submission.id, error = %e, "Quote sink failed");
            SubmissionError::Unavailable
        })?;

        if !receipt.success {
            warn!(submission_id = %submission.id, message = %receipt.message, "Quote sink refused submission");
            return Err(SubmissionError::Rejected(receipt.message));
        }

        info!(
            submission_id = %submission.id,
            postcode = %submission.postcode,
            region = %submission.region,
            "Quote submitted"
        );
        Ok(receipt)
    }
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Quote Submission Gate Tests
//!
//! Verifies the order and messages of the checks applied before a lead is
//! forwarded, and the payload shape the intake endpoint receives.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::sync::Mutex;
use test_case::test_case;
use watt_savings_intake::domain::{
    AnnualSpend, EnergyType, QuoteRequest, QuoteSubmission, SubmissionError,
};
use watt_savings_intake::service::{QuoteIntake, QuoteSink, SubmissionReceipt};
use watt_savings_intake::{ClassifierConfig, IntakeResult, Nation, PostcodeClassifier};

#[derive(Default)]
struct MemorySink {
    rows: Mutex<Vec<serde_json::Value>>,
}

#[async_trait]
impl QuoteSink for MemorySink {
    async fn submit(&self, submission: &QuoteSubmission) -> IntakeResult<SubmissionReceipt> {
        let row = serde_json::to_value(submission)?;
        self.rows.lock().unwrap().push(row);
        Ok(SubmissionReceipt {
            success: true,
            message: "Quote request received".to_string(),
        })
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn intake() -> QuoteIntake<MemorySink> {
    QuoteIntake::new(PostcodeClassifier::default(), MemorySink::default())
}

fn complete_request() -> QuoteRequest {
    QuoteRequest::builder()
        .business_name("Acme Widgets Ltd")
        .contact_name("Jo Bloggs")
        .email("jo@acmewidgets.co.uk")
        .phone("0161 833 8661")
        .postcode("sw1a1aa")
        .address_line1("123 Business Street")
        .current_supplier("British Gas")
        .annual_spend(AnnualSpend::From10kTo25k)
        .contract_end_date(NaiveDate::from_ymd_opt(2027, 3, 31).unwrap())
        .energy_type(EnergyType::Electricity)
        .build()
}

#[test]
fn complete_request_passes_gate() -> Result<()> {
    let submission = intake().prepare(&complete_request(), today())?;
    assert_eq!(submission.postcode.as_str(), "SW1A 1AA");
    assert_eq!(submission.district, "SW1A");
    assert_eq!(submission.region, "London");
    assert_eq!(submission.address_line1.as_deref(), Some("123 Business Street"));
    assert_eq!(submission.message, None);
    Ok(())
}

#[test_case(|r: &mut QuoteRequest| r.business_name.clear(), "Please fill in all required fields" ; "missing business name")]
#[test_case(|r: &mut QuoteRequest| r.phone = "   ".to_string(), "Please fill in all required fields" ; "blank phone")]
#[test_case(|r: &mut QuoteRequest| r.postcode = "12345".to_string(), "Please enter a valid UK postcode" ; "invalid postcode")]
#[test_case(|r: &mut QuoteRequest| r.postcode = "BT1 1AA".to_string(), "Sorry, we currently only serve England, Scotland, and Wales" ; "northern ireland")]
#[test_case(|r: &mut QuoteRequest| r.postcode = "ZZ99 1AA".to_string(), "Sorry, we currently only serve England, Scotland, and Wales" ; "unknown area")]
#[test_case(|r: &mut QuoteRequest| r.email = "jo@".to_string(), "Please enter a valid email address" ; "invalid email")]
#[test_case(|r: &mut QuoteRequest| r.phone = "123".to_string(), "Please enter a valid phone number" ; "invalid phone")]
#[test_case(|r: &mut QuoteRequest| r.contract_end_date = NaiveDate::from_ymd_opt(2025, 1, 1), "Contract end date cannot be in the past" ; "past contract end")]
fn gate_rejections(mutate: fn(&mut QuoteRequest), message: &str) {
    let mut request = complete_request();
    mutate(&mut request);
    let err = intake().prepare(&request, today()).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn required_fields_are_checked_before_postcode() {
    let request = QuoteRequest::builder()
        .postcode("not a postcode")
        .email("broken")
        .build();
    let err = intake().prepare(&request, today()).unwrap_err();
    assert_eq!(
        err,
        SubmissionError::MissingRequiredFields(vec!["businessName", "contactName", "phone"])
    );
}

#[test]
fn postcode_is_checked_before_email_and_phone() {
    let mut request = complete_request();
    request.postcode = "BT1 1AA".to_string();
    request.email = "broken".to_string();
    request.phone = "1".to_string();
    assert_eq!(
        intake().prepare(&request, today()).unwrap_err(),
        SubmissionError::UnsupportedArea
    );
}

#[test]
fn narrowed_service_area_rejects_scotland() {
    let intake = QuoteIntake::new(
        PostcodeClassifier::new(ClassifierConfig {
            serviced_nations: vec![Nation::England, Nation::Wales],
            ..ClassifierConfig::default()
        }),
        MemorySink::default(),
    );
    let mut request = complete_request();
    request.postcode = "EH1 1YZ".to_string();
    assert_eq!(
        intake.prepare(&request, today()).unwrap_err(),
        SubmissionError::UnsupportedArea
    );
}

#[tokio::test]
async fn submitted_row_uses_canonical_postcode_and_camel_case() -> Result<()> {
    let intake = intake();
    let receipt = intake.submit(&complete_request(), today()).await?;
    assert!(receipt.success);

    let rows = intake.sink().rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["postcode"], "SW1A 1AA");
    assert_eq!(row["businessName"], "Acme Widgets Ltd");
    assert_eq!(row["phone"], "0161 833 8661");
    assert_eq!(row["energyRegion"], "London");
    assert_eq!(row["annualSpend"], "10000-25000");
    assert_eq!(row["contractEndDate"], "2027-03-31");
    assert_eq!(row["energyType"], "electricity");
    assert!(row.get("message").is_none());
    assert!(row["id"].is_string());
    Ok(())
}

#[tokio::test]
async fn rejected_request_never_reaches_sink() {
    let intake = intake();
    let mut request = complete_request();
    request.email = "nope".to_string();

    let err = intake.submit(&request, today()).await.unwrap_err();
    assert_eq!(err, SubmissionError::InvalidEmail);
    assert!(intake.sink().rows.lock().unwrap().is_empty());
}

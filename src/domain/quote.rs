// Copyright (c) 2025 - Cowboy AI, Inc.
//! Quote Request Entity
//!
//! The business details a visitor enters on the quote form, and the payload
//! forwarded to the intake spreadsheet once the submission gate has passed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::{EmailAddress, EnergyRegion, PhoneNumber, Postcode};

/// Submission gate failure
///
/// Messages are the user-facing text the form shows as a toast.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields(Vec<&'static str>),

    #[error("Please enter a valid UK postcode")]
    InvalidPostcode,

    #[error("Sorry, we currently only serve England, Scotland, and Wales")]
    UnsupportedArea,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Contract end date cannot be in the past")]
    ContractEndDateInPast(NaiveDate),

    /// The intake endpoint answered but refused the lead
    #[error("{0}")]
    Rejected(String),

    #[error("Something went wrong. Please try again or call us directly.")]
    Unavailable,
}

/// Which fuels the business wants quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyType {
    #[default]
    Both,
    Electricity,
    Gas,
}

impl EnergyType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Electricity => "electricity",
            Self::Gas => "gas",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Both => "Electricity & Gas",
            Self::Electricity => "Electricity Only",
            Self::Gas => "Gas Only",
        }
    }
}

impl FromStr for EnergyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" | "dual" | "dual_fuel" => Ok(Self::Both),
            "electricity" | "electric" => Ok(Self::Electricity),
            "gas" => Ok(Self::Gas),
            other => Err(format!("Unknown energy type: {other}")),
        }
    }
}

/// Annual energy spend bands offered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnualSpend {
    #[serde(rename = "0-5000")]
    UpTo5k,
    #[serde(rename = "5000-10000")]
    From5kTo10k,
    #[serde(rename = "10000-25000")]
    From10kTo25k,
    #[serde(rename = "25000-50000")]
    From25kTo50k,
    #[serde(rename = "50000-100000")]
    From50kTo100k,
    #[serde(rename = "100000+")]
    Over100k,
}

impl AnnualSpend {
    /// Form value, also used as the spreadsheet cell value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo5k => "0-5000",
            Self::From5kTo10k => "5000-10000",
            Self::From10kTo25k => "10000-25000",
            Self::From25kTo50k => "25000-50000",
            Self::From50kTo100k => "50000-100000",
            Self::Over100k => "100000+",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UpTo5k => "£0 - £5,000",
            Self::From5kTo10k => "£5,000 - £10,000",
            Self::From10kTo25k => "£10,000 - £25,000",
            Self::From25kTo50k => "£25,000 - £50,000",
            Self::From50kTo100k => "£50,000 - £100,000",
            Self::Over100k => "£100,000+",
        }
    }

    /// Lower bound of the band in whole pounds
    pub fn lower_bound(&self) -> u32 {
        match self {
            Self::UpTo5k => 0,
            Self::From5kTo10k => 5_000,
            Self::From10kTo25k => 10_000,
            Self::From25kTo50k => 25_000,
            Self::From50kTo100k => 50_000,
            Self::Over100k => 100_000,
        }
    }
}

impl FromStr for AnnualSpend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0-5000" => Ok(Self::UpTo5k),
            "5000-10000" => Ok(Self::From5kTo10k),
            "10000-25000" => Ok(Self::From10kTo25k),
            "25000-50000" => Ok(Self::From25kTo50k),
            "50000-100000" => Ok(Self::From50kTo100k),
            "100000+" => Ok(Self::Over100k),
            other => Err(format!("Unknown annual spend band: {other}")),
        }
    }
}

impl fmt::Display for AnnualSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Quote request as entered on the form
///
/// Fields are raw text; nothing here is trusted until the submission gate
/// turns it into a [`QuoteSubmission`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub postcode: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub current_supplier: String,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_spend: Option<AnnualSpend>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub contract_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub energy_type: EnergyType,
    #[serde(default)]
    pub message: String,
}

/// Optional select/date input: the form sends `""` until a value is picked
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => text
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

impl QuoteRequest {
    /// Builder pattern for fluent construction
    pub fn builder() -> QuoteRequestBuilder {
        QuoteRequestBuilder::default()
    }

    /// Names of required fields that are blank
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("businessName", &self.business_name),
            ("contactName", &self.contact_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("postcode", &self.postcode),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Builder for QuoteRequest
#[derive(Debug, Default)]
pub struct QuoteRequestBuilder {
    request: QuoteRequest,
}

impl QuoteRequestBuilder {
    pub fn business_name(mut self, value: impl Into<String>) -> Self {
        self.request.business_name = value.into();
        self
    }

    pub fn contact_name(mut self, value: impl Into<String>) -> Self {
        self.request.contact_name = value.into();
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.request.email = value.into();
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.request.phone = value.into();
        self
    }

    pub fn postcode(mut self, value: impl Into<String>) -> Self {
        self.request.postcode = value.into();
        self
    }

    pub fn address_line1(mut self, value: impl Into<String>) -> Self {
        self.request.address_line1 = value.into();
        self
    }

    pub fn current_supplier(mut self, value: impl Into<String>) -> Self {
        self.request.current_supplier = value.into();
        self
    }

    pub fn annual_spend(mut self, value: AnnualSpend) -> Self {
        self.request.annual_spend = Some(value);
        self
    }

    pub fn contract_end_date(mut self, value: NaiveDate) -> Self {
        self.request.contract_end_date = Some(value);
        self
    }

    pub fn energy_type(mut self, value: EnergyType) -> Self {
        self.request.energy_type = value;
        self
    }

    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.request.message = value.into();
        self
    }

    pub fn build(self) -> QuoteRequest {
        self.request
    }
}

/// Validated lead, ready for the intake spreadsheet
///
/// `postcode` is always the canonical form, never the raw keystrokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub business_name: String,
    pub contact_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub postcode: Postcode,
    pub district: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_region: Option<EnergyRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_spend: Option<AnnualSpend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end_date: Option<NaiveDate>,
    pub energy_type: EnergyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Trimmed text, or `None` when blank
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

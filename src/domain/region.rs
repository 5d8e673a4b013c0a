// Copyright (c) 2025 - Cowboy AI, Inc.
//! Postcode Area Geography
//!
//! Static mapping from the alphabetic prefix of an outward code (the postcode
//! area, e.g. "SW", "M", "BT") to a human-readable region, the electricity
//! distribution region used for supplier matching, and the nation the area
//! belongs to.
//!
//! The table is plain data. It is indexed once on first lookup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Region name reported for areas missing from the table
pub const UNKNOWN_REGION: &str = "Unknown";

/// Nation (or crown dependency) a postcode area belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nation {
    England,
    Scotland,
    Wales,
    NorthernIreland,
    /// Channel Islands and the Isle of Man
    CrownDependency,
}

/// Error parsing a [`Nation`] from configuration text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown nation: {0}")]
pub struct UnknownNation(pub String);

impl Nation {
    /// Nations the broker currently serves
    pub const SERVICED: [Nation; 3] = [Nation::England, Nation::Scotland, Nation::Wales];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::England => "england",
            Self::Scotland => "scotland",
            Self::Wales => "wales",
            Self::NorthernIreland => "northern_ireland",
            Self::CrownDependency => "crown_dependency",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::England => "England",
            Self::Scotland => "Scotland",
            Self::Wales => "Wales",
            Self::NorthernIreland => "Northern Ireland",
            Self::CrownDependency => "Crown Dependency",
        }
    }
}

impl FromStr for Nation {
    type Err = UnknownNation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "england" => Ok(Self::England),
            "scotland" => Ok(Self::Scotland),
            "wales" => Ok(Self::Wales),
            "northern_ireland" | "ni" => Ok(Self::NorthernIreland),
            "crown_dependency" | "channel_islands" | "isle_of_man" => Ok(Self::CrownDependency),
            _ => Err(UnknownNation(s.to_string())),
        }
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Great Britain electricity distribution regions
///
/// These are the fourteen regions suppliers price against. Northern Ireland
/// and the crown dependencies sit outside this market and have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyRegion {
    #[serde(rename = "Eastern")]
    Eastern,
    #[serde(rename = "East Midlands")]
    EastMidlands,
    #[serde(rename = "London")]
    London,
    #[serde(rename = "Merseyside & North Wales")]
    MerseysideNorthWales,
    #[serde(rename = "West Midlands")]
    WestMidlands,
    #[serde(rename = "North East")]
    NorthEast,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Southern")]
    Southern,
    #[serde(rename = "South East")]
    SouthEast,
    #[serde(rename = "South Wales")]
    SouthWales,
    #[serde(rename = "South West")]
    SouthWest,
    #[serde(rename = "Yorkshire")]
    Yorkshire,
    #[serde(rename = "South Scotland")]
    SouthScotland,
    #[serde(rename = "North Scotland")]
    NorthScotland,
}

impl EnergyRegion {
    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Eastern => "Eastern",
            Self::EastMidlands => "East Midlands",
            Self::London => "London",
            Self::MerseysideNorthWales => "Merseyside & North Wales",
            Self::WestMidlands => "West Midlands",
            Self::NorthEast => "North East",
            Self::NorthWest => "North West",
            Self::Southern => "Southern",
            Self::SouthEast => "South East",
            Self::SouthWales => "South Wales",
            Self::SouthWest => "South West",
            Self::Yorkshire => "Yorkshire",
            Self::SouthScotland => "South Scotland",
            Self::NorthScotland => "North Scotland",
        }
    }
}

impl fmt::Display for EnergyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the postcode area table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostcodeArea {
    /// Alphabetic area prefix, uppercase
    pub prefix: &'static str,
    /// Human-readable region name
    pub region: &'static str,
    /// Electricity distribution region, if the area is in the GB market
    pub energy_region: Option<EnergyRegion>,
    /// Nation the area belongs to
    pub nation: Nation,
}

/// Business availability of a postcode area
///
/// Keeps "known and excluded" apart from "not in the table", which a single
/// boolean cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// Area recognised and inside a serviced nation
    Supported,
    /// Area recognised but its nation is not serviced
    Excluded,
    /// Area not recognised, or the postcode did not parse
    Unknown,
}

impl Coverage {
    /// Only `Supported` areas may submit a quote
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }
}

const fn area(
    prefix: &'static str,
    region: &'static str,
    energy_region: EnergyRegion,
    nation: Nation,
) -> PostcodeArea {
    PostcodeArea {
        prefix,
        region,
        energy_region: Some(energy_region),
        nation,
    }
}

const fn outside_gb(prefix: &'static str, region: &'static str, nation: Nation) -> PostcodeArea {
    PostcodeArea {
        prefix,
        region,
        energy_region: None,
        nation,
    }
}

use EnergyRegion as E;
use Nation::{CrownDependency, England, NorthernIreland, Scotland, Wales};

/// Every geographic UK postcode area
pub static POSTCODE_AREAS: &[PostcodeArea] = &[
    area("AB", "Aberdeen", E::NorthScotland, Scotland),
    area("AL", "St Albans", E::Eastern, England),
    area("B", "Birmingham", E::WestMidlands, England),
    area("BA", "Bath", E::SouthWest, England),
    area("BB", "Blackburn", E::NorthWest, England),
    area("BD", "Bradford", E::Yorkshire, England),
    area("BH", "Bournemouth", E::Southern, England),
    area("BL", "Bolton", E::NorthWest, England),
    area("BN", "Brighton", E::SouthEast, England),
    area("BR", "Bromley", E::SouthEast, England),
    area("BS", "Bristol", E::SouthWest, England),
    outside_gb("BT", "Northern Ireland", NorthernIreland),
    area("CA", "Carlisle", E::NorthWest, England),
    area("CB", "Cambridge", E::Eastern, England),
    area("CF", "Cardiff", E::SouthWales, Wales),
    area("CH", "Chester", E::MerseysideNorthWales, England),
    area("CM", "Chelmsford", E::Eastern, England),
    area("CO", "Colchester", E::Eastern, England),
    area("CR", "Croydon", E::SouthEast, England),
    area("CT", "Canterbury", E::SouthEast, England),
    area("CV", "Coventry", E::WestMidlands, England),
    area("CW", "Crewe", E::MerseysideNorthWales, England),
    area("DA", "Dartford", E::SouthEast, England),
    area("DD", "Dundee", E::NorthScotland, Scotland),
    area("DE", "Derby", E::EastMidlands, England),
    area("DG", "Dumfries", E::SouthScotland, Scotland),
    area("DH", "Durham", E::NorthEast, England),
    area("DL", "Darlington", E::NorthEast, England),
    area("DN", "Doncaster", E::Yorkshire, England),
    area("DT", "Dorchester", E::Southern, England),
    area("DY", "Dudley", E::WestMidlands, England),
    area("E", "London", E::London, England),
    area("EC", "London", E::London, England),
    area("EH", "Edinburgh", E::SouthScotland, Scotland),
    area("EN", "Enfield", E::Eastern, England),
    area("EX", "Exeter", E::SouthWest, England),
    area("FK", "Falkirk", E::SouthScotland, Scotland),
    area("FY", "Blackpool", E::NorthWest, England),
    area("G", "Glasgow", E::SouthScotland, Scotland),
    area("GL", "Gloucester", E::WestMidlands, England),
    area("GU", "Guildford", E::Southern, England),
    outside_gb("GY", "Guernsey", CrownDependency),
    area("HA", "Harrow", E::London, England),
    area("HD", "Huddersfield", E::Yorkshire, England),
    area("HG", "Harrogate", E::Yorkshire, England),
    area("HP", "Hemel Hempstead", E::Eastern, England),
    area("HR", "Hereford", E::WestMidlands, England),
    area("HS", "Outer Hebrides", E::NorthScotland, Scotland),
    area("HU", "Hull", E::Yorkshire, England),
    area("HX", "Halifax", E::Yorkshire, England),
    area("IG", "Ilford", E::Eastern, England),
    outside_gb("IM", "Isle of Man", CrownDependency),
    area("IP", "Ipswich", E::Eastern, England),
    area("IV", "Inverness", E::NorthScotland, Scotland),
    outside_gb("JE", "Jersey", CrownDependency),
    area("KA", "Kilmarnock", E::SouthScotland, Scotland),
    area("KT", "Kingston upon Thames", E::SouthEast, England),
    area("KW", "Kirkwall", E::NorthScotland, Scotland),
    area("KY", "Kirkcaldy", E::SouthScotland, Scotland),
    area("L", "Liverpool", E::MerseysideNorthWales, England),
    area("LA", "Lancaster", E::NorthWest, England),
    area("LD", "Llandrindod Wells", E::MerseysideNorthWales, Wales),
    area("LE", "Leicester", E::EastMidlands, England),
    area("LL", "Llandudno", E::MerseysideNorthWales, Wales),
    area("LN", "Lincoln", E::EastMidlands, England),
    area("LS", "Leeds", E::Yorkshire, England),
    area("LU", "Luton", E::Eastern, England),
    area("M", "Manchester", E::NorthWest, England),
    area("ME", "Medway", E::SouthEast, England),
    area("MK", "Milton Keynes", E::EastMidlands, England),
    area("ML", "Motherwell", E::SouthScotland, Scotland),
    area("N", "London", E::London, England),
    area("NE", "Newcastle upon Tyne", E::NorthEast, England),
    area("NG", "Nottingham", E::EastMidlands, England),
    area("NN", "Northampton", E::EastMidlands, England),
    area("NP", "Newport", E::SouthWales, Wales),
    area("NR", "Norwich", E::Eastern, England),
    area("NW", "London", E::London, England),
    area("OL", "Oldham", E::NorthWest, England),
    area("OX", "Oxford", E::Southern, England),
    area("PA", "Paisley", E::SouthScotland, Scotland),
    area("PE", "Peterborough", E::Eastern, England),
    area("PH", "Perth", E::NorthScotland, Scotland),
    area("PL", "Plymouth", E::SouthWest, England),
    area("PO", "Portsmouth", E::Southern, England),
    area("PR", "Preston", E::NorthWest, England),
    area("RG", "Reading", E::Southern, England),
    area("RH", "Redhill", E::SouthEast, England),
    area("RM", "Romford", E::Eastern, England),
    area("S", "Sheffield", E::Yorkshire, England),
    area("SA", "Swansea", E::SouthWales, Wales),
    area("SE", "London", E::London, England),
    area("SG", "Stevenage", E::Eastern, England),
    area("SK", "Stockport", E::NorthWest, England),
    area("SL", "Slough", E::Southern, England),
    area("SM", "Sutton", E::London, England),
    area("SN", "Swindon", E::Southern, England),
    area("SO", "Southampton", E::Southern, England),
    area("SP", "Salisbury", E::Southern, England),
    area("SR", "Sunderland", E::NorthEast, England),
    area("SS", "Southend-on-Sea", E::Eastern, England),
    area("ST", "Stoke-on-Trent", E::WestMidlands, England),
    area("SW", "London", E::London, England),
    area("SY", "Shrewsbury", E::MerseysideNorthWales, England),
    area("TA", "Taunton", E::SouthWest, England),
    area("TD", "Galashiels", E::SouthScotland, Scotland),
    area("TF", "Telford", E::WestMidlands, England),
    area("TN", "Tonbridge", E::SouthEast, England),
    area("TQ", "Torquay", E::SouthWest, England),
    area("TR", "Truro", E::SouthWest, England),
    area("TS", "Cleveland", E::NorthEast, England),
    area("TW", "Twickenham", E::SouthEast, England),
    area("UB", "Southall", E::Southern, England),
    area("W", "London", E::London, England),
    area("WA", "Warrington", E::NorthWest, England),
    area("WC", "London", E::London, England),
    area("WD", "Watford", E::Eastern, England),
    area("WF", "Wakefield", E::Yorkshire, England),
    area("WN", "Wigan", E::NorthWest, England),
    area("WR", "Worcester", E::WestMidlands, England),
    area("WS", "Walsall", E::WestMidlands, England),
    area("WV", "Wolverhampton", E::WestMidlands, England),
    area("YO", "York", E::Yorkshire, England),
    area("ZE", "Lerwick", E::NorthScotland, Scotland),
];

fn area_index() -> &'static HashMap<&'static str, &'static PostcodeArea> {
    static INDEX: OnceLock<HashMap<&'static str, &'static PostcodeArea>> = OnceLock::new();
    INDEX.get_or_init(|| POSTCODE_AREAS.iter().map(|a| (a.prefix, a)).collect())
}

/// Look up a postcode area by its alphabetic prefix (case-insensitive)
pub fn lookup_area(prefix: &str) -> Option<&'static PostcodeArea> {
    area_index()
        .get(prefix.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Judge business availability of an area against the serviced nations
pub fn coverage_for(area: Option<&PostcodeArea>, serviced: &[Nation]) -> Coverage {
    match area {
        Some(area) if serviced.contains(&area.nation) => Coverage::Supported,
        Some(_) => Coverage::Excluded,
        None => Coverage::Unknown,
    }
}

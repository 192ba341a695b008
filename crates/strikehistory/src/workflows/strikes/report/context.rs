use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::super::stats::DistanceStats;

/// Report form: the free public report or the contractor certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    Plain,
    Certificate,
}

impl ReportVariant {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Plain => "Lightning Strike History Report",
            Self::Certificate => "Lightning Strike History Certificate",
        }
    }

    pub const fn file_label(self) -> &'static str {
        match self {
            Self::Plain => "report",
            Self::Certificate => "certificate",
        }
    }
}

/// Business identity printed on the certificate variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractorIdentity {
    pub company_name: Option<String>,
    pub license_number: Option<String>,
    pub representative: Option<String>,
}

/// Customer identity printed on the certificate variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequesterIdentity {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Everything the synthesizer needs, captured up front. The generation
/// timestamp is supplied by the caller so synthesis itself never reads a
/// clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    pub address: String,
    pub target_date: NaiveDate,
    pub stats: DistanceStats,
    pub closest_km: Option<f64>,
    pub generated_at: NaiveDateTime,
    pub contractor: ContractorIdentity,
    pub requester: RequesterIdentity,
}

use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use strikehistory::workflows::strikes::report::ReportVariant;
use strikehistory::workflows::strikes::{StrikeSearchService, SyntheticStrikeSource};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the synthetic-backed search service. A fixed seed pins the drawn
/// strike timeline for reproducible demos; otherwise each process gets its
/// own stream.
pub(crate) fn synthetic_service(seed: Option<u64>) -> StrikeSearchService<SyntheticStrikeSource> {
    let source = match seed {
        Some(seed) => SyntheticStrikeSource::from_seed(seed),
        None => SyntheticStrikeSource::default(),
    };
    StrikeSearchService::new(source)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_variant(raw: &str) -> Result<ReportVariant, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "plain" | "report" => Ok(ReportVariant::Plain),
        "certificate" | "contractor" => Ok(ReportVariant::Certificate),
        other => Err(format!(
            "unknown report variant '{other}' (expected plain or certificate)"
        )),
    }
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Compass direction a strike was observed in, relative to the query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::North,
            Self::Northeast,
            Self::East,
            Self::Southeast,
            Self::South,
            Self::Southwest,
            Self::West,
            Self::Northwest,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::West => "W",
            Self::Northwest => "NW",
        }
    }
}

/// Display band for a raw intensity value. Raw values above 100 are possible
/// in fine-resolution detail and still classify as strong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityBand {
    Weak,
    Moderate,
    Strong,
}

impl IntensityBand {
    pub const fn classify(intensity: u32) -> Self {
        if intensity >= 80 {
            Self::Strong
        } else if intensity >= 60 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

/// One observed strike. Coordinates are only present in 24-hour detail data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeEvent {
    pub time: NaiveTime,
    pub distance_km: f64,
    pub intensity: u32,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl StrikeEvent {
    pub fn band(&self) -> IntensityBand {
        IntensityBand::classify(self.intensity)
    }
}

/// All strikes attributed to one calendar day, ordered by time of day.
/// Immutable once built; `count` always equals `details.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub count: usize,
    pub details: Vec<StrikeEvent>,
}

impl DaySummary {
    pub fn new(date: NaiveDate, details: Vec<StrikeEvent>) -> Self {
        Self {
            date,
            count: details.len(),
            details,
        }
    }
}

/// Lookback window offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPeriod {
    Week,
    Month,
    Quarter,
    Year,
}

impl SearchPeriod {
    pub const fn ordered() -> [Self; 4] {
        [Self::Week, Self::Month, Self::Quarter, Self::Year]
    }

    pub const fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Past 7 days",
            Self::Month => "Past 30 days",
            Self::Quarter => "Past 90 days",
            Self::Year => "Past year",
        }
    }

    pub fn from_days(days: u32) -> Result<Self, StrikeError> {
        Self::ordered()
            .into_iter()
            .find(|period| period.days() == days)
            .ok_or(StrikeError::UnsupportedPeriod(days))
    }
}

/// Search radius offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceFilter {
    Within1Km,
    Within3Km,
    Within5Km,
    Within10Km,
}

impl DistanceFilter {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Within1Km,
            Self::Within3Km,
            Self::Within5Km,
            Self::Within10Km,
        ]
    }

    pub const fn km(self) -> f64 {
        match self {
            Self::Within1Km => 1.0,
            Self::Within3Km => 3.0,
            Self::Within5Km => 5.0,
            Self::Within10Km => 10.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Within1Km => "Within 1 km",
            Self::Within3Km => "Within 3 km",
            Self::Within5Km => "Within 5 km",
            Self::Within10Km => "Within 10 km",
        }
    }

    pub fn from_km(km: u32) -> Result<Self, StrikeError> {
        match km {
            1 => Ok(Self::Within1Km),
            3 => Ok(Self::Within3Km),
            5 => Ok(Self::Within5Km),
            10 => Ok(Self::Within10Km),
            other => Err(StrikeError::UnsupportedDistance(other)),
        }
    }
}

/// Minimum-intensity filter offered by the search form. The floor offsets the
/// generated intensity distribution upward rather than discarding events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityFilter {
    All,
    WeakAndAbove,
    ModerateAndAbove,
    StrongOnly,
}

impl IntensityFilter {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::All,
            Self::WeakAndAbove,
            Self::ModerateAndAbove,
            Self::StrongOnly,
        ]
    }

    pub const fn floor(self) -> u32 {
        match self {
            Self::All => 0,
            Self::WeakAndAbove => 30,
            Self::ModerateAndAbove => 60,
            Self::StrongOnly => 80,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All intensities",
            Self::WeakAndAbove => "Weak and above",
            Self::ModerateAndAbove => "Moderate and above",
            Self::StrongOnly => "Strong only",
        }
    }

    pub fn from_floor(floor: u32) -> Result<Self, StrikeError> {
        Self::ordered()
            .into_iter()
            .find(|filter| filter.floor() == floor)
            .ok_or(StrikeError::UnsupportedIntensity(floor))
    }
}

/// Validation failures surfaced before any data is generated. Zero-result
/// searches are not errors and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StrikeError {
    #[error("address must not be empty")]
    EmptyAddress,
    #[error("unsupported search period: {0} days (expected 7, 30, 90, or 365)")]
    UnsupportedPeriod(u32),
    #[error("unsupported distance filter: {0} km (expected 1, 3, 5, or 10)")]
    UnsupportedDistance(u32),
    #[error("unsupported intensity floor: {0} (expected 0, 30, 60, or 80)")]
    UnsupportedIntensity(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_bands_split_at_sixty_and_eighty() {
        assert_eq!(IntensityBand::classify(0), IntensityBand::Weak);
        assert_eq!(IntensityBand::classify(59), IntensityBand::Weak);
        assert_eq!(IntensityBand::classify(60), IntensityBand::Moderate);
        assert_eq!(IntensityBand::classify(79), IntensityBand::Moderate);
        assert_eq!(IntensityBand::classify(80), IntensityBand::Strong);
        assert_eq!(IntensityBand::classify(119), IntensityBand::Strong);
    }

    #[test]
    fn form_options_round_trip_through_their_raw_values() {
        for period in SearchPeriod::ordered() {
            assert_eq!(SearchPeriod::from_days(period.days()), Ok(period));
        }
        for distance in DistanceFilter::ordered() {
            assert_eq!(DistanceFilter::from_km(distance.km() as u32), Ok(distance));
        }
        for intensity in IntensityFilter::ordered() {
            assert_eq!(IntensityFilter::from_floor(intensity.floor()), Ok(intensity));
        }
    }

    #[test]
    fn unknown_form_values_are_rejected() {
        assert_eq!(
            SearchPeriod::from_days(14),
            Err(StrikeError::UnsupportedPeriod(14))
        );
        assert_eq!(
            DistanceFilter::from_km(2),
            Err(StrikeError::UnsupportedDistance(2))
        );
        assert_eq!(
            IntensityFilter::from_floor(50),
            Err(StrikeError::UnsupportedIntensity(50))
        );
    }

    #[test]
    fn day_summary_count_tracks_its_details() {
        let details = vec![StrikeEvent {
            time: NaiveTime::from_hms_opt(12, 30, 0).expect("valid time"),
            distance_km: 2.4,
            intensity: 55,
            direction: Direction::East,
            latitude: None,
            longitude: None,
        }];
        let summary = DaySummary::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            details,
        );
        assert_eq!(summary.count, summary.details.len());
    }
}

use std::sync::Mutex;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::domain::{
    DaySummary, DistanceFilter, IntensityFilter, SearchPeriod, StrikeError, StrikeEvent,
};
use super::generator::{generate_day_detail, generate_search_window};

/// Source of strike observations for the search and detail workflows.
///
/// The shipped implementation is synthetic. A production deployment swaps in
/// a client for a real observation network that returns the same shapes; the
/// service layer above does not change.
pub trait StrikeSource: Send + Sync {
    fn search_window(
        &self,
        today: NaiveDate,
        days: u32,
        distance_cap_km: f64,
        intensity_floor: u32,
    ) -> Vec<DaySummary>;

    fn day_detail(&self, date: NaiveDate) -> Vec<StrikeEvent>;
}

/// Generator-backed source. Seedable so demos and tests reproduce exactly.
pub struct SyntheticStrikeSource {
    rng: Mutex<StdRng>,
}

impl SyntheticStrikeSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for SyntheticStrikeSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl StrikeSource for SyntheticStrikeSource {
    fn search_window(
        &self,
        today: NaiveDate,
        days: u32,
        distance_cap_km: f64,
        intensity_floor: u32,
    ) -> Vec<DaySummary> {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        generate_search_window(&mut *rng, today, days, distance_cap_km, intensity_floor)
    }

    // Each detail call is a fresh independent draw; the requested date does
    // not constrain it and does not have to match any earlier summary.
    fn day_detail(&self, _date: NaiveDate) -> Vec<StrikeEvent> {
        let mut rng = self.rng.lock().expect("rng mutex poisoned");
        generate_day_detail(&mut *rng)
    }
}

/// Validates search input and delegates to the configured source. Performs
/// no caching: identical calls may return different synthetic results.
pub struct StrikeSearchService<S> {
    source: S,
}

impl<S: StrikeSource> StrikeSearchService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn search(
        &self,
        address: &str,
        period: SearchPeriod,
        distance: DistanceFilter,
        intensity: IntensityFilter,
        today: NaiveDate,
    ) -> Result<Vec<DaySummary>, StrikeError> {
        if address.trim().is_empty() {
            return Err(StrikeError::EmptyAddress);
        }

        let window = self
            .source
            .search_window(today, period.days(), distance.km(), intensity.floor());
        debug!(
            days = window.len(),
            lookback = period.days(),
            "search window assembled"
        );
        Ok(window)
    }

    pub fn expand(&self, date: NaiveDate) -> Vec<StrikeEvent> {
        let detail = self.source.day_detail(date);
        debug!(%date, events = detail.len(), "day detail expanded");
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        window_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    impl StrikeSource for CountingSource {
        fn search_window(
            &self,
            _today: NaiveDate,
            _days: u32,
            _distance_cap_km: f64,
            _intensity_floor: u32,
        ) -> Vec<DaySummary> {
            self.window_calls.fetch_add(1, Ordering::Relaxed);
            Vec::new()
        }

        fn day_detail(&self, _date: NaiveDate) -> Vec<StrikeEvent> {
            self.detail_calls.fetch_add(1, Ordering::Relaxed);
            Vec::new()
        }
    }

    fn search_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    #[test]
    fn blank_address_never_reaches_the_source() {
        let service = StrikeSearchService::new(CountingSource::default());

        for address in ["", "   ", "\t\n"] {
            let result = service.search(
                address,
                SearchPeriod::Week,
                DistanceFilter::Within5Km,
                IntensityFilter::All,
                search_date(),
            );
            assert_eq!(result, Err(StrikeError::EmptyAddress));
        }

        assert_eq!(service.source.window_calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn valid_search_delegates_once() {
        let service = StrikeSearchService::new(CountingSource::default());

        let result = service.search(
            "Tokyo",
            SearchPeriod::Week,
            DistanceFilter::Within5Km,
            IntensityFilter::All,
            search_date(),
        );

        assert_eq!(result, Ok(Vec::new()));
        assert_eq!(service.source.window_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn expand_delegates_to_the_source() {
        let service = StrikeSearchService::new(CountingSource::default());

        service.expand(search_date());
        service.expand(search_date());

        assert_eq!(service.source.detail_calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn synthetic_detail_is_a_fresh_draw_each_call() {
        let service = StrikeSearchService::new(SyntheticStrikeSource::from_seed(9));

        let first = service.expand(search_date());
        let second = service.expand(search_date());

        assert_ne!(first, second);
    }
}

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

use super::domain::{DaySummary, Direction, StrikeEvent};

/// Chance that any given day in the lookback window saw strike activity.
const STRIKE_DAY_PROBABILITY: f64 = 0.2;

/// Fine-resolution detail is always drawn within this radius.
pub const DETAIL_RADIUS_KM: f64 = 5.0;

/// Reference point the synthetic detail coordinates are jittered around.
const REFERENCE_LATITUDE: f64 = 35.6762;
const REFERENCE_LONGITUDE: f64 = 139.6503;

/// Full jitter span in degrees; coordinates land within half of this on
/// either side of the reference point.
const COORDINATE_JITTER_DEGREES: f64 = 0.1;

/// Draws day summaries for the `days` calendar days ending at `today`.
///
/// Each day independently has strike activity with a fixed probability; an
/// active day carries 1 to 8 strikes at minute resolution, with distances
/// below `distance_cap_km` and intensities offset upward by
/// `intensity_floor`. Only active days appear in the result, most recent
/// first, with each day's details ordered by time of day.
pub fn generate_search_window<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
    distance_cap_km: f64,
    intensity_floor: u32,
) -> Vec<DaySummary> {
    let mut window = Vec::new();

    for offset in 0..days {
        let date = today - Duration::days(i64::from(offset));
        if !rng.random_bool(STRIKE_DAY_PROBABILITY) {
            continue;
        }

        let count: usize = rng.random_range(1..=8);
        let mut details = Vec::with_capacity(count);
        for _ in 0..count {
            details.push(StrikeEvent {
                time: minute_of_day(rng),
                distance_km: rng.random_range(0.0..distance_cap_km),
                intensity: rng.random_range(0..100) + intensity_floor,
                direction: random_direction(rng),
                latitude: None,
                longitude: None,
            });
        }
        details.sort_by_key(|event| event.time);

        window.push(DaySummary::new(date, details));
    }

    window
}

/// Draws the full 24-hour detail timeline for one day: 5 to 19 strikes at
/// second resolution within the fixed detail radius, intensities 20 to 119,
/// with synthetic coordinates near the reference point. Ordered by time.
pub fn generate_day_detail<R: Rng + ?Sized>(rng: &mut R) -> Vec<StrikeEvent> {
    let count: usize = rng.random_range(5..=19);
    let mut events = Vec::with_capacity(count);

    for _ in 0..count {
        events.push(StrikeEvent {
            time: second_of_day(rng),
            distance_km: rng.random_range(0.0..DETAIL_RADIUS_KM),
            intensity: rng.random_range(20..=119),
            direction: random_direction(rng),
            latitude: Some(REFERENCE_LATITUDE + jitter(rng)),
            longitude: Some(REFERENCE_LONGITUDE + jitter(rng)),
        });
    }
    events.sort_by_key(|event| event.time);

    events
}

fn minute_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    NaiveTime::from_hms_opt(rng.random_range(0..24), rng.random_range(0..60), 0)
        .expect("in-range clock components")
}

fn second_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    NaiveTime::from_hms_opt(
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60),
    )
    .expect("in-range clock components")
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    let directions = Direction::ordered();
    directions[rng.random_range(0..directions.len())]
}

fn jitter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.random::<f64>() - 0.5) * COORDINATE_JITTER_DEGREES
}

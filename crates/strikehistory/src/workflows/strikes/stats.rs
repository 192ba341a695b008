use serde::Serialize;

use super::domain::StrikeEvent;
use super::rings::ring_for;

/// Radius used when the caller does not configure one; matches the fixed
/// radius of the 24-hour detail draw.
pub const DEFAULT_MAX_RADIUS_KM: u32 = 5;

/// Per-ring strike counters derived from one event list.
///
/// `total` is the length of the input list, so events past the outermost
/// ring count toward `total` without belonging to any ring and the ring sum
/// may fall short of `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceStats {
    rings: Vec<usize>,
    total: usize,
}

impl DistanceStats {
    pub fn max_radius_km(&self) -> u32 {
        self.rings.len() as u32
    }

    /// Count for ring `ring` (1-indexed); zero outside the configured radius.
    pub fn ring(&self, ring: u32) -> usize {
        ring.checked_sub(1)
            .and_then(|index| self.rings.get(index as usize))
            .copied()
            .unwrap_or(0)
    }

    /// `(ring, count)` pairs from the innermost ring outward.
    pub fn ring_counts(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.rings
            .iter()
            .enumerate()
            .map(|(index, count)| (index as u32 + 1, *count))
    }

    pub fn ring_sum(&self) -> usize {
        self.rings.iter().sum()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

/// Aggregates an event list into ring counters. Pure and order-insensitive;
/// recompute after any change to the source list rather than caching.
pub fn compute_stats(events: &[StrikeEvent], max_radius_km: u32) -> DistanceStats {
    let mut rings = vec![0usize; max_radius_km as usize];

    for event in events {
        if let Some(ring) = ring_for(event.distance_km, max_radius_km) {
            rings[(ring - 1) as usize] += 1;
        }
    }

    DistanceStats {
        rings,
        total: events.len(),
    }
}

/// Minimum observed distance, or `None` for an empty list. Ties collapse to
/// the same value whichever event supplies it.
pub fn closest_approach(events: &[StrikeEvent]) -> Option<f64> {
    events
        .iter()
        .map(|event| event.distance_km)
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::strikes::domain::Direction;
    use chrono::NaiveTime;

    fn event(distance_km: f64) -> StrikeEvent {
        StrikeEvent {
            time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            distance_km,
            intensity: 50,
            direction: Direction::North,
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn empty_input_yields_all_zero_stats() {
        let stats = compute_stats(&[], DEFAULT_MAX_RADIUS_KM);
        assert_eq!(stats.total(), 0);
        assert_eq!(stats.ring_sum(), 0);
        assert_eq!(stats.max_radius_km(), DEFAULT_MAX_RADIUS_KM);
        assert_eq!(closest_approach(&[]), None);
    }

    #[test]
    fn ring_edges_count_toward_the_closer_ring() {
        let events = [event(0.0), event(1.0), event(1.2), event(5.0)];
        let stats = compute_stats(&events, 5);

        assert_eq!(stats.ring(1), 2);
        assert_eq!(stats.ring(2), 1);
        assert_eq!(stats.ring(5), 1);
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.ring_sum(), 4);
    }

    #[test]
    fn out_of_range_events_only_count_toward_total() {
        let events = [event(0.5), event(7.3)];
        let stats = compute_stats(&events, 5);

        assert_eq!(stats.total(), 2);
        assert_eq!(stats.ring_sum(), 1);
    }

    #[test]
    fn stats_are_invariant_under_reordering() {
        let mut events = vec![event(0.4), event(2.9), event(4.4), event(1.0)];
        let forward = compute_stats(&events, 5);
        events.reverse();
        events.rotate_left(1);

        assert_eq!(compute_stats(&events, 5), forward);
    }

    #[test]
    fn closest_approach_is_the_minimum_distance() {
        let events = [event(3.2), event(0.8), event(0.8), event(4.9)];
        assert_eq!(closest_approach(&events), Some(0.8));
    }
}

/// Buckets a distance into 1 km wide rings indexed by their outer boundary.
///
/// Returns the first ring `k` in `1..=max_radius_km` with `distance_km <= k`,
/// so a distance sitting exactly on a ring edge belongs to the closer ring
/// (2.0 km is ring 2, not ring 3). Distances beyond the outermost ring have
/// no ring at all.
pub fn ring_for(distance_km: f64, max_radius_km: u32) -> Option<u32> {
    (1..=max_radius_km).find(|ring| distance_km <= f64::from(*ring))
}

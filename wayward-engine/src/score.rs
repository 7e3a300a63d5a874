const BASE_SCORE: f64 = 10.0;
const ORPHAN_PENALTY: f64 = 0.5;
const ORPHAN_PENALTY_CAP: f64 = 3.0;
const DEAD_END_PENALTY: f64 = 0.2;
const DEAD_END_PENALTY_CAP: f64 = 1.0;
const JOURNEY_PENALTY_WEIGHT: f64 = 2.0;

/// Combine orphan count, dead-end count, and aggregate journey coverage into
/// a single 0-10 health score.
///
/// Pass `None` for `avg_journey_coverage` when no journeys were supplied;
/// the journey penalty term is then omitted, keeping one formula rather than
/// a branching special case. Deterministic: identical inputs always produce
/// the identical score.
pub fn health_score(orphans: usize, dead_ends: usize, avg_journey_coverage: Option<f64>) -> f64 {
    let orphan_penalty = (orphans as f64 * ORPHAN_PENALTY).min(ORPHAN_PENALTY_CAP);
    let dead_end_penalty = (dead_ends as f64 * DEAD_END_PENALTY).min(DEAD_END_PENALTY_CAP);
    let journey_penalty = avg_journey_coverage
        .map(|coverage| (1.0 - coverage) * JOURNEY_PENALTY_WEIGHT)
        .unwrap_or(0.0);

    (BASE_SCORE - orphan_penalty - dead_end_penalty - journey_penalty).max(0.0)
}

//! Pillar scorers. Each sub-dimension awards fixed points for qualifying
//! facts, sums to a raw value out of 100, and clamps; the pillar total is a
//! fixed convex combination of the rounded sub-scores.

mod environmental;
mod governance;
mod social;

pub use environmental::score_environmental;
pub use governance::score_governance;
pub use social::score_social;

/// Clamp a raw sub-dimension sum into [0,100] and round at the point of
/// output. Accumulation happens in f64 so rounding error does not compound.
pub(crate) fn finalize(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Weighted pillar total over already-rounded sub-scores. Weights must sum
/// to 1.0, so the result stays in [0,100].
pub(crate) fn weighted_total(parts: &[(u8, f64)]) -> u8 {
    parts
        .iter()
        .map(|(sub, weight)| f64::from(*sub) * weight)
        .sum::<f64>()
        .round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finalize_clamps_both_ends() {
        assert_eq!(finalize(-5.0), 0);
        assert_eq!(finalize(130.0), 100);
        assert_eq!(finalize(49.5), 50);
    }

    #[test]
    fn weighted_total_of_uniform_subs_is_identity() {
        let total = weighted_total(&[(60, 0.5), (60, 0.3), (60, 0.2)]);
        assert_eq!(total, 60);
    }
}

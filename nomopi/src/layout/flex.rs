//! Shared main-axis distribution logic for every container orientation.
//!
//! This module provides axis-agnostic sizing math: given the ordered size
//! policies of a container's children and the usable span on the main axis,
//! `distribute` returns the main-axis extent of each child. Cross-axis
//! extents are not decided here; every child takes the full inner cross
//! dimension.

use super::frame::scale;
use super::length::SizePolicy;

/// How the distribution treats the usable span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanMode {
    /// The span is a hard limit. Fixed children are clamped to what is left.
    #[default]
    Bounded,
    /// Content may overflow the span (scroll boxes). Fixed children keep
    /// their size; Fill children share whatever is left, possibly nothing.
    Scrollable,
}

/// Allocation result for a single child.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Allocated size on main axis.
    pub main_size: u32,
    /// Whether this child is Fill (vs fixed).
    pub is_fill: bool,
}

/// Output of a distribution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    /// One entry per input policy, in input order.
    pub allocations: Vec<Allocation>,
    /// Sum of all allocated main sizes.
    pub consumed: u32,
    /// Whether any fixed child had to be shrunk to fit the span.
    pub clamped: bool,
}

/// Distribute `span` main-axis pixels among children.
///
/// First pass, in order: Proportional children take
/// `round(fraction * inner_main)` (the container's inner main extent, before
/// spacing is removed) and PixelPerfect children take their pixels; each is
/// subtracted from the running space left. Second pass, in order: Fill children split what the
/// first pass left by weight. The last Fill child takes everything still left
/// so rounding slack is absorbed rather than lost. A zero total weight splits
/// equally.
pub fn distribute(
    policies: impl IntoIterator<Item = SizePolicy>,
    span: u32,
    inner_main: u32,
    mode: SpanMode,
) -> Distribution {
    let policies: Vec<SizePolicy> = policies.into_iter().collect();

    let mut total_weight = 0.0f64;
    let mut fill_count = 0u32;
    for policy in &policies {
        if let SizePolicy::Fill { weight } = policy {
            total_weight += f64::from(*weight);
            fill_count += 1;
        }
    }

    let mut allocations = vec![Allocation::default(); policies.len()];
    let mut space_left = i64::from(span);
    let mut clamped = false;

    // First pass: fixed children
    for (policy, allocation) in policies.iter().zip(allocations.iter_mut()) {
        let requested = match *policy {
            SizePolicy::Proportional { fraction } => scale(fraction, inner_main),
            SizePolicy::PixelPerfect { pixels } => pixels,
            SizePolicy::Fill { .. } => continue,
        };

        let main_size = match mode {
            SpanMode::Bounded => {
                let available = space_left.max(0) as u32;
                if requested > available {
                    clamped = true;
                }
                requested.min(available)
            }
            SpanMode::Scrollable => requested,
        };

        allocation.main_size = main_size;
        space_left -= i64::from(main_size);
    }

    // Second pass: Fill children share what is left
    let fill_span = space_left.max(0) as f64;
    let mut fills_left = fill_count;
    for (policy, allocation) in policies.iter().zip(allocations.iter_mut()) {
        let SizePolicy::Fill { weight } = *policy else {
            continue;
        };

        let available = space_left.max(0);
        let main_size = if fills_left > 1 {
            let share = if total_weight > 0.0 {
                fill_span * f64::from(weight) / total_weight
            } else {
                fill_span / f64::from(fill_count)
            };
            (share.round() as i64).clamp(0, available)
        } else {
            available
        };

        allocation.main_size = main_size as u32;
        allocation.is_fill = true;
        space_left -= main_size;
        fills_left -= 1;
    }

    let consumed = allocations
        .iter()
        .fold(0u32, |acc, a| acc.saturating_add(a.main_size));

    Distribution {
        allocations,
        consumed,
        clamped,
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(distribution: &Distribution) -> Vec<u32> {
        distribution.allocations.iter().map(|a| a.main_size).collect()
    }

    #[test]
    fn test_distribute_empty() {
        let d = distribute(Vec::new(), 500, 500, SpanMode::Bounded);
        assert!(d.allocations.is_empty());
        assert_eq!(d.consumed, 0);
        assert!(!d.clamped);
    }

    #[test]
    fn test_distribute_weighted_fill() {
        let d = distribute(
            [SizePolicy::fill_weighted(1.0), SizePolicy::fill_weighted(3.0)],
            400,
            400,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![100, 300]);
        assert!(d.allocations.iter().all(|a| a.is_fill));
        assert_eq!(d.consumed, 400);
    }

    #[test]
    fn test_distribute_single_fill_absorbs_rest() {
        let d = distribute(
            [
                SizePolicy::proportional(0.25),
                SizePolicy::fill(),
                SizePolicy::pixels(30),
            ],
            200,
            200,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![50, 120, 30]);
        assert!(!d.allocations[0].is_fill);
        assert!(d.allocations[1].is_fill);
    }

    #[test]
    fn test_distribute_last_fill_absorbs_rounding() {
        let d = distribute(
            [SizePolicy::fill(), SizePolicy::fill(), SizePolicy::fill()],
            100,
            100,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![33, 33, 34]);
        assert_eq!(d.consumed, 100);
    }

    #[test]
    fn test_distribute_zero_weights_split_equally() {
        let d = distribute(
            [SizePolicy::fill_weighted(0.0), SizePolicy::fill_weighted(0.0)],
            301,
            301,
            SpanMode::Bounded,
        );
        // 150.5 rounds to 151; the last child takes the remaining 150
        assert_eq!(sizes(&d), vec![151, 150]);
        assert_eq!(d.consumed, 301);
    }

    #[test]
    fn test_distribute_zero_weight_among_weighted() {
        let d = distribute(
            [SizePolicy::fill_weighted(0.0), SizePolicy::fill_weighted(2.0)],
            100,
            100,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![0, 100]);
    }

    #[test]
    fn test_distribute_fixed_clamped_to_span() {
        let d = distribute(
            [
                SizePolicy::pixels(80),
                SizePolicy::proportional(0.5),
                SizePolicy::fill(),
            ],
            100,
            100,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![80, 20, 0]);
        assert!(d.clamped);
        assert_eq!(d.consumed, 100);
    }

    #[test]
    fn test_distribute_all_fixed_leaves_remainder() {
        let d = distribute(
            [SizePolicy::pixels(10), SizePolicy::proportional(0.3)],
            100,
            100,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![10, 30]);
        assert_eq!(d.consumed, 40);
        assert!(!d.clamped);
    }

    #[test]
    fn test_distribute_scrollable_overflows() {
        let d = distribute(
            [
                SizePolicy::pixels(80),
                SizePolicy::pixels(80),
                SizePolicy::fill(),
            ],
            100,
            100,
            SpanMode::Scrollable,
        );
        assert_eq!(sizes(&d), vec![80, 80, 0]);
        assert_eq!(d.consumed, 160);
        assert!(!d.clamped);
    }

    #[test]
    fn test_distribute_is_deterministic() {
        let policies = [
            SizePolicy::fill_weighted(1.3),
            SizePolicy::proportional(0.17),
            SizePolicy::fill_weighted(2.9),
            SizePolicy::pixels(7),
        ];
        let first = distribute(policies, 997, 997, SpanMode::Bounded);
        let second = distribute(policies, 997, 997, SpanMode::Bounded);
        assert_eq!(first, second);
        assert_eq!(first.consumed, 997);
    }

    #[test]
    fn test_distribute_proportional_uses_inner_extent() {
        // 1000px inner, 100px of spacing leaves a 900px span
        let d = distribute(
            [SizePolicy::proportional(0.5), SizePolicy::fill()],
            900,
            1000,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![500, 400]);
        assert_eq!(d.consumed, 900);
        assert!(!d.clamped);
    }

    #[test]
    fn test_distribute_proportional_clamped_to_span() {
        let d = distribute(
            [SizePolicy::proportional(0.6), SizePolicy::proportional(0.6)],
            900,
            1000,
            SpanMode::Bounded,
        );
        assert_eq!(sizes(&d), vec![600, 300]);
        assert!(d.clamped);
    }
}

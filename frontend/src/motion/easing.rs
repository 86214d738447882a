/// Cubic ease-in-out over normalized progress `t` in `[0, 1]`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out, used by the statistics counters.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to `[0, 1]`.
/// A non-positive duration is already complete.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Delay of the `index`-th item in a staggered group, `index × step_ms`.
/// Pinned at `u32::MAX` rather than overflowing.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn in_out_hits_endpoints_and_midpoint() {
        assert!(ease_in_out_cubic(0.0).abs() < EPS);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < EPS);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn in_out_matches_both_branches() {
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < EPS);
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < EPS);
    }

    #[test]
    fn in_out_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_in_out_cubic(step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn out_cubic_decelerates() {
        assert!(ease_out_cubic(0.0).abs() < EPS);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < EPS);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress(-5.0, 800.0), 0.0);
        assert_eq!(progress(400.0, 800.0), 0.5);
        assert_eq!(progress(2000.0, 800.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger(0, 150), 0);
        assert_eq!(stagger(3, 150), 450);
        assert_eq!(stagger(3_000_000, 1500), u32::MAX);
        assert_eq!(stagger(usize::MAX, 1), u32::MAX);
    }
}

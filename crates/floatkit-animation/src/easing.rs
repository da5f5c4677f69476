//! Easing functions for docking and settle animations.

/// Easing curve applied to a linear elapsed fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No shaping; the fraction is used as-is.
    Linear,
    /// Decelerating cubic curve.
    EaseOut,
    /// Material-style standard curve.
    FastOutSlowIn,
    /// Piecewise-parabola bounce: the value reaches the target early and
    /// rebounds off it with decaying amplitude before settling.
    BounceOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    ///
    /// Every curve maps 0 to 0 and 1 to 1, so a finished animation always
    /// lands exactly on its target.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::BounceOut => bounce_out(fraction.clamp(0.0, 1.0)),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Use Newton-Raphson iterations to solve for the parametric value `t`
    // corresponding to the provided x fraction. Clamp to [0, 1] to keep the
    // solution within bounds.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Fall back to a binary subdivision if Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// Classic bounce-out: four parabolic arcs with decaying amplitude.
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_hits_both_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::FastOutSlowIn,
            Easing::BounceOut,
        ] {
            assert!(
                easing.transform(0.0).abs() < 1e-3,
                "{:?} should start at 0",
                easing
            );
            assert!(
                (easing.transform(1.0) - 1.0).abs() < 1e-3,
                "{:?} should end at 1",
                easing
            );
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
        assert_eq!(Easing::Linear.transform(0.75), 0.75);
    }

    #[test]
    fn ease_out_decelerates() {
        // A decelerating curve is ahead of linear at the midpoint.
        assert!(Easing::EaseOut.transform(0.5) > 0.5);
        assert!(Easing::FastOutSlowIn.transform(0.8) > 0.8);
    }

    #[test]
    fn bounce_rebounds_before_settling() {
        // The first arc lands on the target around t = 1/2.75; shortly after,
        // the curve has bounced back below it.
        let landing = Easing::BounceOut.transform(1.0 / 2.75);
        assert!((landing - 1.0).abs() < 1e-3);

        let rebound = Easing::BounceOut.transform(0.45);
        assert!(rebound < 1.0);

        // Each later arc stays closer to the target than the rebound dip.
        let late = Easing::BounceOut.transform(0.95);
        assert!(late > rebound);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(Easing::BounceOut.transform(-1.0), 0.0);
        assert!((Easing::BounceOut.transform(2.0) - 1.0).abs() < 1e-3);
        assert_eq!(Easing::EaseOut.transform(2.0), 1.0);
    }
}

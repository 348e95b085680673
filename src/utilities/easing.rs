//src/utilities/easing.rs

// easing curves for tile transitions
// CubicBezier follows the CSS `cubic-bezier()` timing function

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EasingType {
    #[default]
    Linear,
    CubicBezier(CubicBezier),
}

impl EasingType {
    /// Maps linear progress in [0.0, 1.0] to eased progress.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::CubicBezier(curve) => curve.apply(t),
        }
    }
}

impl From<CubicBezier> for EasingType {
    fn from(curve: CubicBezier) -> Self {
        EasingType::CubicBezier(curve)
    }
}

impl From<[f32; 4]> for EasingType {
    fn from(points: [f32; 4]) -> Self {
        EasingType::CubicBezier(CubicBezier::from(points))
    }
}

/// A cubic Bézier timing curve anchored at (0, 0) and (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f32 = 1e-6;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    // polynomial coefficients for one axis: (a, b, c) of a*t^3 + b*t^2 + c*t
    fn coefficients(p1: f32, p2: f32) -> (f32, f32, f32) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample(p1: f32, p2: f32, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(p1: f32, p2: f32, t: f32) -> f32 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // find the curve parameter whose x equals `x`
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // bisection fallback for flat regions
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let sampled = Self::sample(self.x1, self.x2, t);
            if (sampled - x).abs() < SOLVE_EPSILON {
                break;
            }
            if x > sampled {
                low = t;
            } else {
                high = t;
            }
            t = (high - low) * 0.5 + low;
        }
        t
    }

    pub fn apply(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

impl From<[f32; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SLIDE: CubicBezier = CubicBezier::new(0.25, 0.46, 0.45, 0.94);
    const REVEAL: CubicBezier = CubicBezier::new(0.87, 0.0, 0.13, 1.0);

    #[rstest]
    #[case(EasingType::Linear)]
    #[case(EasingType::CubicBezier(SLIDE))]
    #[case(EasingType::CubicBezier(REVEAL))]
    fn test_easing_boundaries(#[case] easing: EasingType) {
        assert!(easing.apply(0.0).abs() < 1e-4, "{:?} at t=0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{:?} at t=1", easing);
        // out of range input is clamped
        assert!(easing.apply(-3.0).abs() < 1e-4);
        assert!((easing.apply(7.0) - 1.0).abs() < 1e-4);
    }

    #[rstest]
    #[case(SLIDE)]
    #[case(REVEAL)]
    fn test_bezier_monotonic(#[case] curve: CubicBezier) {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = curve.apply(i as f32 / 100.0);
            assert!(v + 1e-4 >= prev, "not monotonic at step {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_symmetric_curve_midpoint() {
        // the reveal curve is point-symmetric around (0.5, 0.5)
        assert!((REVEAL.apply(0.5) - 0.5).abs() < 1e-3);
        assert!(REVEAL.apply(0.25) < 0.25);
        assert!(REVEAL.apply(0.75) > 0.75);
    }

    #[test]
    fn test_from_control_points() {
        let easing = EasingType::from([0.25, 0.46, 0.45, 0.94]);
        assert_eq!(easing, EasingType::CubicBezier(SLIDE));
    }
}

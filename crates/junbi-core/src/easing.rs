//! Easing curves applied to normalized elapsed time.

use serde::Deserialize;

/// Monotonic reshaping curve for normalized elapsed time.
///
/// Every curve maps 0 to 0 and 1 to 1 and is strictly increasing in
/// between, so eased progress inherits the monotonicity of raw progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// No reshaping.
    Linear,
    /// `1 - (1 - t)^4`: quick start with a long deceleration tail.
    #[default]
    EaseOutQuart,
    /// `1 - (1 - t)^3`: milder deceleration than quart.
    EaseOutCubic,
    /// Quadratic acceleration then deceleration.
    EaseInOutQuad,
}

impl Easing {
    /// Apply the curve to `t`, clamping the input to `0.0..=1.0`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOutQuart,
        Easing::EaseOutCubic,
        Easing::EaseInOutQuad,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_strictly_increasing() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let next = easing.apply(i as f64 / 100.0);
                assert!(next > prev, "{easing:?} not increasing at step {i}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_out_of_range_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_ease_out_quart_shape() {
        // Matches 1 - (1 - t)^4 at the midpoint.
        assert!((Easing::EaseOutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrap {
            easing: Easing,
        }
        let wrap: Wrap = toml::from_str(r#"easing = "ease-out-quart""#).unwrap();
        assert_eq!(wrap.easing, Easing::EaseOutQuart);
    }
}

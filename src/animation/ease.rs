/// Easing curves mapping normalized progress in `[0, 1]` onto eased progress in `[0, 1]`.
///
/// Every variant satisfies `f(0) = 0`, `f(1) = 1` and is monotonic non-decreasing on `[0, 1]`.
/// Inputs are clamped first, so out-of-range progress never escapes the unit interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// `1 - (1 - x)^3`.
    OutCubic,
    /// Symmetric quadratic ease-in/out.
    InOutQuad,
    /// Symmetric cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// All easing variants, in declaration order.
    pub const ALL: [Ease; 4] = [
        Ease::Linear,
        Ease::OutCubic,
        Ease::InOutQuad,
        Ease::InOutCubic,
    ];

    /// Apply this easing function to progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

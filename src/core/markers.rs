use serde::{Deserialize, Serialize};

/// Digit sums below this value get a star glyph.
pub const STAR_DIGIT_SUM_LIMIT: u32 = 10;

/// Marker glyph chosen for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    /// Open four-vertex polyline, no fill.
    Star,
    /// Small outlined and filled circle.
    Circle,
}

impl MarkerKind {
    /// Classifies a sample by the digit sum of its truncated `|y|`.
    ///
    /// The result depends on `y` alone, never on `x`, order or viewport.
    #[must_use]
    pub fn classify(y: f64) -> Self {
        if digit_sum(y) < STAR_DIGIT_SUM_LIMIT {
            Self::Star
        } else {
            Self::Circle
        }
    }
}

/// Sum of the decimal digits of `|y|` truncated toward zero.
///
/// Magnitudes beyond `u64::MAX` saturate; NaN counts as zero.
#[must_use]
pub fn digit_sum(y: f64) -> u32 {
    let mut integer = y.abs().trunc() as u64;
    let mut sum = 0;
    while integer > 0 {
        sum += (integer % 10) as u32;
        integer /= 10;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::{MarkerKind, digit_sum};

    #[test]
    fn digit_sum_truncates_fraction_and_sign() {
        assert_eq!(digit_sum(3.2), 3);
        assert_eq!(digit_sum(17.9), 8);
        assert_eq!(digit_sum(99.0), 18);
        assert_eq!(digit_sum(0.0), 0);
        assert_eq!(digit_sum(-45.0), 9);
        assert_eq!(digit_sum(-0.99), 0);
    }

    #[test]
    fn classification_boundary_is_strict() {
        assert_eq!(MarkerKind::classify(9.0), MarkerKind::Star);
        assert_eq!(MarkerKind::classify(19.0), MarkerKind::Circle);
        assert_eq!(MarkerKind::classify(-28.5), MarkerKind::Circle);
        assert_eq!(MarkerKind::classify(1_000_000.0), MarkerKind::Star);
    }

    #[test]
    fn magnitudes_read_as_u64_and_saturate_past_it() {
        // Values above i32::MAX keep their own digits.
        assert_eq!(digit_sum(3.0e9), 3);
        assert_eq!(MarkerKind::classify(3.0e9), MarkerKind::Star);
        assert_eq!(digit_sum(2_147_483_648.0), 47);

        // 18446744073709551615
        assert_eq!(digit_sum(1.0e30), 87);
        assert_eq!(digit_sum(-1.0e30), 87);
        assert_eq!(MarkerKind::classify(f64::MAX), MarkerKind::Circle);
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-pixel rounding shared by geometry observers and placement output.

/// Round to one decimal place, half away from zero.
///
/// Geometry reported by hosts carries float noise well below a tenth of a
/// pixel; rounding before the equality gate keeps that noise from reading as
/// change. Implemented with integer truncation so it works without float
/// intrinsics in `no_std` builds. Inputs are screen-scale coordinates, far
/// inside the exactly-representable integer range.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "screen-scale pixel values are far inside i64 range"
    )]
    let truncated = scaled as i64 as f64;
    let fraction = scaled - truncated;
    let rounded = if fraction >= 0.5 {
        truncated + 1.0
    } else if fraction <= -0.5 {
        truncated - 1.0
    } else {
        truncated
    };
    rounded / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(-1.25), -1.3);
    }

    #[test]
    fn keeps_exact_tenths() {
        assert_eq!(round_to_tenth(455.0), 455.0);
        assert_eq!(round_to_tenth(12.3), 12.3);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn drops_sub_tenth_noise() {
        assert_eq!(round_to_tenth(99.96), 100.0);
        assert_eq!(round_to_tenth(99.94), 99.9);
        assert_eq!(round_to_tenth(-0.04), 0.0);
    }
}

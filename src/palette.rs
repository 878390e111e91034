//! Hue-rotation palettes built on the HSL conversions.
//!
//! Both generators validate their base color up front and convert through
//! HSL, so every output is a canonical `#RRGGBB` value.

use crate::color::{Color, ColorError, Hsl};

/// Generate `n` colors at evenly spaced hues with s = 0.5, l = 0.5.
///
/// Hues are `i * 360 / n` for `i` in `[0, n)`; the rotation always starts
/// at 0 degrees. The base color is validated but its own hue does not seed
/// the sequence, so the palette is "analogous" in spacing only. This
/// mirrors the long-standing behavior of the engine; callers who want the
/// base hue woven in should rotate from [`Color::to_hsl`] themselves.
///
/// `n = 0` yields an empty palette.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `base` is not `#RRGGBB`.
pub fn analogous(base: &str, n: usize) -> Result<Vec<Color>, ColorError> {
    Color::parse(base, "base")?;

    let step = 360.0 / n as f64;
    Ok((0..n)
        .map(|i| {
            Color::from_hsl(Hsl {
                h: (i as f64 * step) % 360.0,
                s: 0.5,
                l: 0.5,
            })
        })
        .collect())
}

/// Generate a two-color palette: the base and its 180-degree complement.
///
/// The complement keeps the base's saturation and lightness and rotates
/// its hue halfway around the circle.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `base` is not `#RRGGBB`.
pub fn complementary(base: &str) -> Result<[Color; 2], ColorError> {
    let base = Color::parse(base, "base")?;
    let hsl = base.to_hsl();
    let complement = Color::from_hsl(Hsl {
        h: (hsl.h + 180.0) % 360.0,
        ..hsl
    });
    Ok([base, complement])
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.to_hex()).collect()
    }

    // ── Analogous ────────────────────────────────────────────────────────

    #[test]
    fn analogous_quarter_turns() {
        // Hues 0/90/180/270 at s = 0.5, l = 0.5.
        let palette = analogous("#FF0000", 4).unwrap();
        assert_eq!(
            hexes(&palette),
            vec!["#BF4040", "#80BF40", "#40BFBF", "#8040BF"]
        );
    }

    #[test]
    fn analogous_ignores_base_hue() {
        // Same spacing regardless of which valid base is supplied.
        let from_red = analogous("#FF0000", 6).unwrap();
        let from_blue = analogous("#0000FF", 6).unwrap();
        assert_eq!(from_red, from_blue);
    }

    #[test]
    fn analogous_single_entry_starts_at_zero() {
        let palette = analogous("#123456", 1).unwrap();
        assert_eq!(hexes(&palette), vec!["#BF4040"]);
    }

    #[test]
    fn analogous_length_matches_request() {
        for n in [1, 2, 3, 5, 12] {
            assert_eq!(analogous("#ABCDEF", n).unwrap().len(), n);
        }
        assert!(analogous("#ABCDEF", 0).unwrap().is_empty());
    }

    #[test]
    fn analogous_rejects_bad_base() {
        let err = analogous("#ZZZZZZ", 5).unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidFormat {
                param: "base",
                value: "#ZZZZZZ".to_owned()
            }
        );
    }

    // ── Complementary ────────────────────────────────────────────────────

    #[test]
    fn red_complement_is_cyan() {
        let pair = complementary("#FF0000").unwrap();
        assert_eq!(hexes(&pair), vec!["#FF0000", "#00FFFF"]);
    }

    #[test]
    fn complement_keeps_base_first() {
        let pair = complementary("#00ff00").unwrap();
        assert_eq!(pair[0], Color::rgb(0, 255, 0));
        assert_eq!(pair[1], Color::rgb(255, 0, 255));
    }

    #[test]
    fn complement_of_gray_is_gray() {
        // Achromatic base: rotation has no visible effect.
        let pair = complementary("#808080").unwrap();
        assert_eq!(pair[0], pair[1]);
    }

    #[test]
    fn complement_double_rotation_is_near_identity() {
        let base = Color::rgb(200, 120, 40);
        let pair = complementary(&base.to_hex()).unwrap();
        let back = complementary(&pair[1].to_hex()).unwrap();
        // Two lossy HSL round-trips; allow 1 per channel per trip.
        assert!(base.distance(back[1]) < 4.0, "{base} came back as {}", back[1]);
    }

    #[test]
    fn complementary_rejects_bad_base() {
        let err = complementary("#ZZZZZZ").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidFormat {
                param: "base",
                value: "#ZZZZZZ".to_owned()
            }
        );
    }
}

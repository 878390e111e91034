//! Random color source and constrained generators.
//!
//! Every generating function takes the randomness capability as an explicit
//! `&mut impl Rng` argument. Callers who just want colors pass
//! [`rand::rng()`]; tests pass a seeded [`rand::rngs::StdRng`] so sampling
//! stays deterministic.
//!
//! The two rejection samplers have deliberately different termination
//! policies:
//!
//! - [`avoiding_list`] retries without bound. The avoid set is matched
//!   exactly, so unless it covers all 2^24 colors each draw succeeds with
//!   overwhelming probability and practical non-termination is negligible.
//! - [`avoiding_background`] caps total draws at an attempt budget and tops
//!   the result up with unconstrained colors, so it always returns exactly
//!   the requested count. Constraint satisfaction is best-effort; count is
//!   guaranteed.

use rand::Rng;

use crate::color::{Color, ColorError};

/// Minimum Euclidean RGB distance for a candidate to count as dissimilar
/// from the background.
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Total draw budget for [`avoiding_background`] before it falls back to
/// unconstrained colors.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Draw one uniformly random color: three independent uniform bytes.
#[must_use]
pub fn random_color(rng: &mut impl Rng) -> Color {
    Color {
        r: rng.random(),
        g: rng.random(),
        b: rng.random(),
    }
}

/// Draw `n` independent random colors. `n = 0` yields an empty vector.
#[must_use]
pub fn random_colors(rng: &mut impl Rng, n: usize) -> Vec<Color> {
    (0..n).map(|_| random_color(rng)).collect()
}

/// Draw `n` random colors, none of which is a member of `avoid`.
///
/// Membership is exact value equality on the color, not a distance check.
/// Retries are unbounded: termination is probabilistic, guaranteed only
/// when `avoid` leaves some of the 24-bit color space uncovered.
#[must_use]
pub fn avoiding_list(rng: &mut impl Rng, avoid: &[Color], n: usize) -> Vec<Color> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let candidate = random_color(rng);
        if !avoid.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Draw `n` colors dissimilar from a background color.
///
/// Uses [`DEFAULT_THRESHOLD`] and [`DEFAULT_MAX_ATTEMPTS`]; see
/// [`avoiding_background_with`] for the knobs and the top-up policy.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `bg` is not `#RRGGBB`.
pub fn avoiding_background(
    rng: &mut impl Rng,
    bg: &str,
    n: usize,
) -> Result<Vec<Color>, ColorError> {
    avoiding_background_with(rng, bg, n, DEFAULT_THRESHOLD, DEFAULT_MAX_ATTEMPTS)
}

/// Draw `n` colors whose RGB distance from `bg` exceeds `threshold`,
/// spending at most `max_attempts` draws on the constrained phase.
///
/// If the budget runs out first, the shortfall is filled with
/// unconstrained random colors, so the result always has exactly `n`
/// entries. Budget exhaustion is an observability signal (a `tracing`
/// debug event), never an error.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `bg` is not `#RRGGBB`.
pub fn avoiding_background_with(
    rng: &mut impl Rng,
    bg: &str,
    n: usize,
    threshold: f64,
    max_attempts: u32,
) -> Result<Vec<Color>, ColorError> {
    let bg = Color::parse(bg, "bg")?;
    Ok(sample_dissimilar(rng, bg, n, threshold, max_attempts))
}

/// Constrained sampling core shared with the session generator.
pub(crate) fn sample_dissimilar(
    rng: &mut impl Rng,
    bg: Color,
    n: usize,
    threshold: f64,
    max_attempts: u32,
) -> Vec<Color> {
    let mut out = Vec::with_capacity(n);
    let mut attempts = 0;
    while out.len() < n && attempts < max_attempts {
        attempts += 1;
        let candidate = random_color(rng);
        if candidate.distance(bg) > threshold {
            out.push(candidate);
        }
    }

    if out.len() < n {
        tracing::debug!(
            requested = n,
            constrained = out.len(),
            max_attempts,
            %bg,
            threshold,
            "attempt budget exhausted, topping up with unconstrained colors"
        );
        while out.len() < n {
            out.push(random_color(rng));
        }
    }

    out
}

/// Draw one random color pulled halfway toward `bias`.
///
/// Each channel is the midpoint of the random draw and the bias color,
/// rounded to the nearest integer (halves round up).
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `bias` is not `#RRGGBB`.
pub fn biased(rng: &mut impl Rng, bias: &str) -> Result<Color, ColorError> {
    let bias = Color::parse(bias, "bias")?;
    let random = random_color(rng);
    Ok(Color {
        r: midpoint(random.r, bias.r),
        g: midpoint(random.g, bias.g),
        b: midpoint(random.b, bias.b),
    })
}

/// Round-to-nearest midpoint of two channel values (halves round up).
#[inline]
const fn midpoint(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

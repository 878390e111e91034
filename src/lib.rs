//! # huegen — random and constrained hex color generation
//!
//! Produces random and constrained `#RRGGBB` color codes for visual
//! applications: palettes, avatars, chart theming. The whole engine is a
//! handful of pure functions over a small [`Color`] value type, plus one
//! explicitly owned piece of session memory.
//!
//! # Architecture
//!
//! ```text
//! rand::Rng (injected randomness capability)
//!     │
//!     ▼
//! color.rs:    #RRGGBB ↔ RGB ↔ HSL conversions, validation, distance
//!     │
//!     ▼
//! generate.rs: random draws + rejection sampling (avoid lists,
//!     │        background dissimilarity, bias toward a color)
//!     ▼
//! palette.rs:  hue-rotation palettes (analogous spacing, complementary)
//!     │
//!     ▼
//! session.rs:  per-session memory of previously generated colors
//! ```
//!
//! Data flows one direction through that chain; nothing depends on state
//! outside it. Caller-supplied color strings are validated at the public
//! boundary and rejected with [`ColorError::InvalidFormat`] before any
//! work happens; colors the engine produces are canonical by construction.
//!
//! # Randomness
//!
//! Every generating function takes `&mut impl Rng` instead of reaching for
//! a global source. Pass [`rand::rng()`] for everyday use, or a seeded
//! [`rand::rngs::StdRng`] when output must be reproducible:
//!
//! ```
//! use huegen::generate;
//!
//! let mut rng = rand::rng();
//! let color = generate::random_color(&mut rng);
//! assert_eq!(color.to_hex().len(), 7);
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Channel max/min are bit-identical copies of one of r/g/b, so float
// equality in the HSL hue dispatch is exact.
#![allow(clippy::float_cmp)]
// Channel math truncates intentionally after clamping and rounding.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Palette indices and hue angles fit f64 exactly.
#![allow(clippy::cast_precision_loss)]

pub mod color;
pub mod generate;
pub mod palette;
pub mod session;

pub use color::{Color, ColorError, Hsl, is_valid_hex};
pub use generate::{
    avoiding_background, avoiding_background_with, avoiding_list, biased, random_color,
    random_colors,
};
pub use palette::{analogous, complementary};
pub use session::Session;

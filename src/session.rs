//! Session-owned memory of previously generated colors.
//!
//! One [`Session`] belongs to one logical consumer (one user, one chart,
//! one avatar set). Its memory is never shared: there is no process-wide
//! color list, and two sessions can never observe each other. Exclusive
//! access is enforced by `&mut self` rather than any internal locking;
//! callers who share a session across threads wrap it themselves.

use rand::Rng;

use crate::color::{Color, ColorError};
use crate::generate::{DEFAULT_MAX_ATTEMPTS, DEFAULT_THRESHOLD, sample_dissimilar};

/// Accumulator of previously generated colors for one consumer.
///
/// Starts empty, grows by append when a caller asks to remember, and
/// resets when they ask to forget.
///
/// # Examples
///
/// ```
/// use huegen::Session;
///
/// let mut session = Session::new();
/// let mut rng = rand::rng();
///
/// let first = session.generate(&mut rng, "#FFFFFF", 5, true).unwrap();
/// assert_eq!(first.len(), 5);
///
/// // Growing the request keeps the first five as a prefix.
/// let grown = session.generate(&mut rng, "#FFFFFF", 10, true).unwrap();
/// assert_eq!(&grown[..5], &first[..]);
///
/// // Asking to forget resets the memory to empty.
/// session.generate(&mut rng, "#FFFFFF", 3, false).unwrap();
/// assert!(session.previous().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    previous: Vec<Color>,
}

impl Session {
    /// Create a session with empty memory.
    #[must_use]
    pub const fn new() -> Self {
        Self { previous: Vec::new() }
    }

    /// Generate `n` colors dissimilar from `bg`, threading them through
    /// this session's memory.
    ///
    /// With `remember = true` the stored colors come first and only the
    /// shortfall is freshly generated; the combined sequence is stored
    /// back and returned. When more colors are stored than requested,
    /// nothing is trimmed and the full stored sequence comes back, so the
    /// result can be longer than `n`.
    ///
    /// With `remember = false` the memory is unconditionally reset to
    /// empty and `n` fresh colors are returned without being stored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if `bg` is not `#RRGGBB`.
    /// Validation happens before any mutation, so a failed call leaves
    /// the memory untouched.
    pub fn generate(
        &mut self,
        rng: &mut impl Rng,
        bg: &str,
        n: usize,
        remember: bool,
    ) -> Result<Vec<Color>, ColorError> {
        let bg = Color::parse(bg, "bg")?;

        if remember {
            let shortfall = n.saturating_sub(self.previous.len());
            let fresh =
                sample_dissimilar(rng, bg, shortfall, DEFAULT_THRESHOLD, DEFAULT_MAX_ATTEMPTS);
            self.previous.extend(fresh);
            Ok(self.previous.clone())
        } else {
            let fresh = sample_dissimilar(rng, bg, n, DEFAULT_THRESHOLD, DEFAULT_MAX_ATTEMPTS);
            self.previous.clear();
            Ok(fresh)
        }
    }

    /// The colors this session currently remembers, oldest first.
    #[must_use]
    pub fn previous(&self) -> &[Color] {
        &self.previous
    }

    /// Reset the memory to empty.
    pub fn forget(&mut self) {
        self.previous.clear();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

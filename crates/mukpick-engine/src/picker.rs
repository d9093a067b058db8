//! Random category and keyword selection over the fixed vocabularies.
//!
//! The random source is injected so tests can seed it; production callers
//! construct the picker from OS entropy. Picks are never cached: every search
//! attempt draws a fresh category and a fresh, independent keyword.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mukpick_core::vocab::{FOOD_CATEGORIES, SEARCH_KEYWORDS};

/// Draws uniformly random categories and keywords.
pub struct CategoryPicker<R> {
    rng: R,
}

impl CategoryPicker<StdRng> {
    /// A picker seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> CategoryPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A uniformly random food category.
    pub fn pick_category(&mut self) -> &'static str {
        let index = self.rng.random_range(0..FOOD_CATEGORIES.len());
        FOOD_CATEGORIES[index]
    }

    /// A uniformly random search-refinement keyword, independent of any
    /// category pick.
    pub fn pick_keyword(&mut self) -> &'static str {
        let index = self.rng.random_range(0..SEARCH_KEYWORDS.len());
        SEARCH_KEYWORDS[index]
    }

    /// The picker's random source, shared with the venue selection draw.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

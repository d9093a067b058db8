//! The recommendation workflow: permission gate, then location resolution,
//! then a freshly randomized search and a uniform venue pick.
//!
//! Ordering is fixed: the gate is consulted before the resolver is ever
//! invoked, and the resolver runs before the first search. Search and
//! selection re-randomize the category and keyword on every attempt, so a
//! retry after an empty outcome issues a genuinely new query.

use rand::Rng;

use mukpick_geo::{
    LocationResolver, PermissionGate, PermissionState, PositionProvider, ResolvedLocation,
};
use mukpick_naver::{NaverClient, Restaurant};

use crate::error::WorkflowError;
use crate::picker::CategoryPicker;
use crate::selection::{select_one, Selection};
use crate::state::LocationSlot;

/// Outcome of one recommendation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// One venue, chosen uniformly at random from the search results.
    Venue {
        restaurant: Restaurant,
        category: String,
        photo: Option<String>,
    },
    /// Nothing usable came back for this category. The caller offers a
    /// retry, which draws a fresh category and keyword.
    NoMatch { category: String },
}

/// Drives the full workflow and owns the session state.
pub struct Recommender<G, P, R> {
    gate: G,
    resolver: LocationResolver<P>,
    naver: NaverClient,
    picker: CategoryPicker<R>,
    slot: LocationSlot,
}

impl<G, P, R> Recommender<G, P, R>
where
    G: PermissionGate,
    P: PositionProvider,
    R: Rng,
{
    pub fn new(
        gate: G,
        resolver: LocationResolver<P>,
        naver: NaverClient,
        picker: CategoryPicker<R>,
    ) -> Self {
        Self {
            gate,
            resolver,
            naver,
            picker,
            slot: LocationSlot::new(),
        }
    }

    /// The session location, if one has been resolved.
    #[must_use]
    pub fn location(&self) -> Option<ResolvedLocation> {
        self.slot.get()
    }

    /// Resolves and stores the session location, gating on permission first.
    ///
    /// The resolver itself never fails (it degrades to the fallback
    /// location), so the only error paths are the permission flow and a
    /// platform without location capability.
    ///
    /// # Errors
    ///
    /// - [`WorkflowError::PermissionDenied`] when the user declines; carries
    ///   the final state so a blocked denial can be routed to settings.
    /// - [`WorkflowError::Platform`] when the gate reports no capability.
    pub async fn ensure_location(&mut self) -> Result<ResolvedLocation, WorkflowError> {
        if let Some(resolved) = self.slot.get() {
            return Ok(resolved);
        }

        let mut state = self.gate.check().await?;
        if state != PermissionState::Granted {
            tracing::info!(%state, "location permission not yet granted; requesting");
            state = self.gate.request().await?;
        }
        if state != PermissionState::Granted {
            return Err(WorkflowError::PermissionDenied(state));
        }

        let token = self.slot.begin_update();
        let resolved = self.resolver.resolve().await;
        if !self.slot.set_if_current(token, resolved.clone()) {
            // A newer resolution superseded this one; its value wins.
            if let Some(current) = self.slot.get() {
                return Ok(current);
            }
        }
        Ok(resolved)
    }

    /// Runs one recommendation attempt: fresh category and keyword, one
    /// search call, one uniform pick. With `with_photo`, a representative
    /// image is looked up for the chosen venue; photo failures never block
    /// the recommendation.
    ///
    /// # Errors
    ///
    /// Only permission/platform errors propagate; see
    /// [`Recommender::ensure_location`].
    pub async fn recommend(&mut self, with_photo: bool) -> Result<Recommendation, WorkflowError> {
        let category = self.picker.pick_category().to_string();
        self.recommend_with(category, with_photo).await
    }

    /// Like [`Recommender::recommend`], but with the category pinned by the
    /// caller. The refinement keyword is still drawn fresh per attempt.
    ///
    /// # Errors
    ///
    /// Same as [`Recommender::recommend`].
    pub async fn recommend_in_category(
        &mut self,
        category: &str,
        with_photo: bool,
    ) -> Result<Recommendation, WorkflowError> {
        self.recommend_with(category.to_string(), with_photo).await
    }

    async fn recommend_with(
        &mut self,
        category: String,
        with_photo: bool,
    ) -> Result<Recommendation, WorkflowError> {
        let resolved = self.ensure_location().await?;

        let keyword = self.picker.pick_keyword();
        let candidates = self
            .naver
            .search_nearby(&resolved.info, &category, keyword)
            .await;

        match select_one(&candidates, self.picker.rng_mut()) {
            Selection::Chosen(restaurant) => {
                let photo = if with_photo {
                    let query = format!("{} {}", resolved.info.city, restaurant.plain_title());
                    self.naver.search_image(&query).await
                } else {
                    None
                };
                tracing::info!(
                    category,
                    title = %restaurant.plain_title(),
                    "recommendation selected"
                );
                Ok(Recommendation::Venue {
                    restaurant,
                    category,
                    photo,
                })
            }
            Selection::Empty(reason) => {
                tracing::info!(category, ?reason, "no usable candidates for this attempt");
                Ok(Recommendation::NoMatch { category })
            }
        }
    }
}

// 🎬 Render/Transition Driver - Staggered crossfade planning
//
// Given the old and new slot assignments, produce a timeline the animation
// layer can execute: per changed slot, fade out, swap the card content at the
// midpoint, fade back in. Slots whose occupant did not change are left
// untouched so they never flicker.
//
// Phases of one slot are strictly ordered (fade-out < swap < fade-in); slots
// are staggered by a fixed delay but otherwise independent.

use crate::entities::{Company, CompanyRegistry};
use crate::rotation::{SlotAssignment, FADE_DURATION_SECS, STAGGER_DELAY_SECS};
use serde::{Deserialize, Serialize};

// ============================================================================
// CARD CONTENT
// ============================================================================

/// The presentational fields written into a bento card at the swap midpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    /// Background image path (written as the card's background)
    pub background: String,

    /// Category attribute driving card theming
    pub category: String,

    /// Logo image path + alt text
    pub favicon: String,
    pub logo_alt: String,

    /// Sector tag text
    pub sector: String,

    /// Company name text
    pub name: String,

    /// Description markup
    pub description: String,

    /// Funding round text
    pub round: String,

    /// Investment year text
    pub year: String,
}

impl From<&Company> for CardContent {
    fn from(company: &Company) -> Self {
        CardContent {
            background: company.background.clone(),
            category: company.category.clone(),
            favicon: company.favicon.clone(),
            logo_alt: company.name.clone(),
            sector: company.sector.clone(),
            name: company.name.clone(),
            description: company.description.clone(),
            round: company.round.clone(),
            year: company.year.to_string(),
        }
    }
}

// ============================================================================
// TRANSITION PLAN
// ============================================================================

/// One slot's crossfade: all times are seconds from the start of the tick's
/// animation timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTransition {
    pub slot: usize,

    /// Fade-out starts here and runs for `fade_duration`
    pub fade_out_at: f64,

    /// Card content is swapped exactly here (the crossfade midpoint)
    pub swap_at: f64,

    /// Fade-in starts here and runs for `fade_duration`
    pub fade_in_at: f64,

    /// Duration of each half of the crossfade
    pub fade_duration: f64,

    /// Content the slot shows after the swap
    pub content: CardContent,
}

/// The full timeline for one rotation tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionPlan {
    pub slots: Vec<SlotTransition>,
}

impl TransitionPlan {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Plan the crossfades for one tick.
///
/// Slots with an unchanged occupant are skipped, as are slots whose new
/// occupant is missing from the registry (the slot keeps its old content, a
/// degraded no-op rather than a blank card).
pub fn plan(
    old: &SlotAssignment,
    new: &SlotAssignment,
    registry: &CompanyRegistry,
) -> TransitionPlan {
    let half = FADE_DURATION_SECS * 0.5;
    let mut slots = Vec::new();

    for slot in 0..new.len() {
        let (old_id, new_id) = match (old.get(slot), new.get(slot)) {
            (Some(o), Some(n)) => (o, n),
            _ => continue,
        };
        if old_id == new_id {
            continue;
        }
        let Some(company) = registry.get(new_id) else {
            continue;
        };

        let delay = slot as f64 * STAGGER_DELAY_SECS;
        slots.push(SlotTransition {
            slot,
            fade_out_at: delay,
            swap_at: delay + half,
            fade_in_at: delay + half,
            fade_duration: half,
            content: CardContent::from(company),
        });
    }

    TransitionPlan { slots }
}

// ============================================================================
// TESTS
// ============================================================================

// 📍 Scroll-Snap Navigator - Approach page
//
// Tracks which full-viewport section is in view, keeps the dot indicator in
// sync (active dot + dot colour following the active section's theme), and
// latches one-way entrance reveals. Dot clicks resolve to a scroll command
// for the host page.

use serde::{Deserialize, Serialize};

/// Intersection ratio at which a section becomes the active one
pub const SECTION_VISIBLE_THRESHOLD: f64 = 0.55;

/// Intersection ratio at which an entrance reveal fires
pub const REVEAL_THRESHOLD: f64 = 0.15;

// ============================================================================
// SECTION THEME
// ============================================================================

/// Light/dark theme of a snap section, read from its theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionTheme {
    Dark,
    Light,
}

impl Default for SectionTheme {
    fn default() -> Self {
        SectionTheme::Dark
    }
}

/// State of one dot in the indicator rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotState {
    /// This dot marks the active section
    pub active: bool,

    /// Dot rendered in its light variant (active section has a light theme)
    pub light: bool,
}

// ============================================================================
// SNAP NAVIGATOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct SnapNavigator {
    themes: Vec<SectionTheme>,
    current: usize,
    revealed: Vec<bool>,
}

impl SnapNavigator {
    /// One theme per snap section, in document order.
    pub fn new(themes: Vec<SectionTheme>) -> Self {
        let revealed = vec![false; themes.len()];
        SnapNavigator {
            themes,
            current: 0,
            revealed,
        }
    }

    pub fn section_count(&self) -> usize {
        self.themes.len()
    }

    pub fn current_section(&self) -> usize {
        self.current
    }

    /// A section's intersection ratio changed. Activates the section once it
    /// crosses the visibility threshold; returns whether the active section
    /// changed. Out-of-range indices are ignored.
    pub fn section_intersected(&mut self, index: usize, ratio: f64) -> bool {
        if index >= self.themes.len() || ratio < SECTION_VISIBLE_THRESHOLD {
            return false;
        }
        let changed = self.current != index;
        self.current = index;
        changed
    }

    /// Dot states for the whole rail. Every dot follows the active section's
    /// theme so the rail stays readable against its background.
    pub fn dot_states(&self) -> Vec<DotState> {
        let light = self
            .themes
            .get(self.current)
            .copied()
            .unwrap_or_default()
            == SectionTheme::Light;

        (0..self.themes.len())
            .map(|i| DotState {
                active: i == self.current,
                light,
            })
            .collect()
    }

    /// A dot was clicked: resolve to the section to scroll to, if it exists.
    pub fn select_dot(&self, index: usize) -> Option<usize> {
        (index < self.themes.len()).then_some(index)
    }

    /// An entrance-reveal element's intersection ratio changed. Reveals are a
    /// one-way latch: once visible, always visible.
    pub fn reveal_intersected(&mut self, index: usize, ratio: f64) -> bool {
        if index >= self.revealed.len() || ratio < REVEAL_THRESHOLD {
            return false;
        }
        let newly = !self.revealed[index];
        self.revealed[index] = true;
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

// ============================================================================
// TESTS
// ============================================================================

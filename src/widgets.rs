// 🧩 Page Widgets - tabs, accordion, flywheel, feature toggle, diagram
//
// Small independent controllers, one per interactive block on the approach
// page. Each holds its own selection state and answers presentational
// queries (active flags, aria attributes, inline styles); indices that don't
// exist are ignored so a widget missing from the markup degrades silently.

// ============================================================================
// TABS - pill tab switching
// ============================================================================

/// Exclusive tab selection with an optional icon animation replayed on
/// activation.
#[derive(Debug, Clone)]
pub struct Tabs {
    count: usize,
    active: usize,
    replay_ids: Vec<Option<String>>,
}

impl Tabs {
    pub fn new(count: usize) -> Self {
        Tabs {
            count,
            active: 0,
            replay_ids: vec![None; count],
        }
    }

    /// Animated SVG icon ids replayed when their tab activates, by index.
    pub fn with_replay_animations(mut self, ids: Vec<Option<String>>) -> Self {
        self.replay_ids = ids;
        self.replay_ids.resize(self.count, None);
        self
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Select a tab; returns the icon animation to replay, if any.
    /// Out-of-range indices are a no-op.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        if index >= self.count {
            return None;
        }
        self.active = index;
        self.replay_ids[index].as_deref()
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active
    }

    /// `aria-selected` value for a tab button
    pub fn aria_selected(&self, index: usize) -> &'static str {
        if self.is_active(index) {
            "true"
        } else {
            "false"
        }
    }
}

// ============================================================================
// ACCORDION - single-open cards
// ============================================================================

/// Rendered state of one accordion card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionCard {
    pub open: bool,

    /// `aria-expanded` on the header button
    pub expanded: bool,

    /// Inline `max-height` in px: measured content height when open, 0 when
    /// closed (drives the slide animation)
    pub max_height_px: f64,
}

/// At most one card open at a time; clicking the open card closes it.
#[derive(Debug, Clone)]
pub struct Accordion {
    panel_heights: Vec<f64>,
    open: Option<usize>,
}

impl Accordion {
    /// `panel_heights`: measured content height per card, supplied by the
    /// host since only the layout engine knows it.
    pub fn new(panel_heights: Vec<f64>) -> Self {
        Accordion {
            panel_heights,
            open: None,
        }
    }

    /// Start with a card already open (the markup's default card).
    pub fn with_open(mut self, index: usize) -> Self {
        if index < self.panel_heights.len() {
            self.open = Some(index);
        }
        self
    }

    /// Host re-measured a panel (fonts loaded, viewport resized).
    pub fn set_panel_height(&mut self, index: usize, height: f64) {
        if let Some(h) = self.panel_heights.get_mut(index) {
            *h = height;
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Toggle a card: opening one closes any other.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.panel_heights.len() {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn card(&self, index: usize) -> Option<AccordionCard> {
        let height = *self.panel_heights.get(index)?;
        let open = self.open == Some(index);
        Some(AccordionCard {
            open,
            expanded: open,
            max_height_px: if open { height } else { 0.0 },
        })
    }

    pub fn len(&self) -> usize {
        self.panel_heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panel_heights.is_empty()
    }
}

// ============================================================================
// FLYWHEEL - stepper with track fill
// ============================================================================

/// Rendered state of one flywheel pin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlywheelPin {
    pub active: bool,

    /// Pin already stepped past (before the active one)
    pub past: bool,
}

/// Quarter-cycle stepper: pins along a track, prev/next buttons, the last
/// "next" wraps back to the first step.
#[derive(Debug, Clone)]
pub struct Flywheel {
    count: usize,
    current: usize,
}

impl Flywheel {
    pub fn new(count: usize) -> Self {
        Flywheel { count, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Jump to a step; out-of-range is a no-op.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }

    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    /// Advance; from the last step, loop back to the first.
    pub fn next(&mut self) {
        if self.current + 1 < self.count {
            self.current += 1;
        } else {
            self.current = 0;
        }
    }

    pub fn pin(&self, index: usize) -> Option<FlywheelPin> {
        (index < self.count).then_some(FlywheelPin {
            active: index == self.current,
            past: index < self.current,
        })
    }

    /// Track fill as a percentage of the distance to the last pin.
    pub fn fill_percent(&self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        self.current as f64 / (self.count - 1) as f64 * 100.0
    }

    /// Prev button hidden on the first step
    pub fn prev_hidden(&self) -> bool {
        self.current == 0
    }

    /// Next button label; the last step advertises the wrap-around.
    pub fn next_label(&self) -> &'static str {
        if self.count > 0 && self.current == self.count - 1 {
            "Next Quarter ›"
        } else {
            "Next ›"
        }
    }
}

// ============================================================================
// FEATURE TOGGLE - platform dashboard panels
// ============================================================================

/// Id-keyed exclusive toggle (the platform section's feature list), with a
/// dashboard label mirroring the active feature's title.
#[derive(Debug, Clone)]
pub struct FeatureToggle {
    features: Vec<(String, String)>,
    active: String,
}

impl FeatureToggle {
    /// `features`: (id, title) pairs in display order; `default_id` is
    /// activated immediately.
    pub fn new(features: Vec<(String, String)>, default_id: &str) -> Self {
        FeatureToggle {
            features,
            active: default_id.to_string(),
        }
    }

    pub fn activate(&mut self, id: &str) {
        self.active = id.to_string();
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// Dashboard label text: the active feature's title, empty when the
    /// active id matches nothing.
    pub fn dash_label(&self) -> &str {
        self.features
            .iter()
            .find(|(id, _)| *id == self.active)
            .map(|(_, title)| title.as_str())
            .unwrap_or("")
    }
}

// ============================================================================
// DIAGRAM - hover-paired columns and modals
// ============================================================================

/// Rendered state of the inflection diagram: hovering a column shows its
/// modal, hovering a modal highlights its column, leaving restores the
/// default pairing. The mobile variant switches tab/slide/dot triples.
#[derive(Debug, Clone)]
pub struct Diagram {
    column_count: usize,
    default_column: usize,
    hovered: usize,
    mobile_slide_count: usize,
    mobile_slide: usize,
}

impl Diagram {
    pub fn new(column_count: usize, default_column: usize, mobile_slide_count: usize) -> Self {
        Diagram {
            column_count,
            default_column,
            hovered: default_column,
            mobile_slide_count,
            mobile_slide: 0,
        }
    }

    /// Pointer entered a column (or its paired modal).
    pub fn hover(&mut self, index: usize) {
        if index < self.column_count {
            self.hovered = index;
        }
    }

    /// Pointer left the whole diagram: back to the default pairing.
    pub fn leave(&mut self) {
        self.hovered = self.default_column;
    }

    pub fn column_hovered(&self, index: usize) -> bool {
        index == self.hovered
    }

    pub fn modal_visible(&self, index: usize) -> bool {
        index == self.hovered
    }

    /// Mobile: switch the active tab/slide/dot triple.
    pub fn switch_slide(&mut self, index: usize) {
        if index < self.mobile_slide_count {
            self.mobile_slide = index;
        }
    }

    pub fn slide_active(&self, index: usize) -> bool {
        index == self.mobile_slide
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_exclusive_selection() {
        let mut tabs = Tabs::new(3);
        assert!(tabs.is_active(0));
        assert_eq!(tabs.aria_selected(0), "true");

        tabs.activate(2);
        assert!(tabs.is_active(2));
        assert!(!tabs.is_active(0));
        assert_eq!(tabs.aria_selected(0), "false");
        assert_eq!(tabs.aria_selected(2), "true");
    }

    #[test]
    fn test_tabs_replay_animation_on_activation() {
        let mut tabs = Tabs::new(3).with_replay_animations(vec![
            Some("tailored-crosshair-svg".to_string()),
            Some("g2m-mountain-svg".to_string()),
            None,
        ]);

        assert_eq!(tabs.activate(1), Some("g2m-mountain-svg"));
        assert_eq!(tabs.activate(2), None);
        // Out of range: no-op, selection unchanged
        assert_eq!(tabs.activate(9), None);
        assert!(tabs.is_active(2));
    }

    #[test]
    fn test_accordion_keeps_at_most_one_card_open() {
        let mut acc = Accordion::new(vec![120.0, 200.0, 90.0]);
        assert_eq!(acc.open_index(), None);

        acc.toggle(1);
        assert_eq!(acc.open_index(), Some(1));

        acc.toggle(2);
        assert_eq!(acc.open_index(), Some(2));
        assert!(!acc.card(1).unwrap().open);
    }

    #[test]
    fn test_accordion_toggling_open_card_closes_it() {
        let mut acc = Accordion::new(vec![120.0, 200.0]).with_open(0);
        assert_eq!(acc.open_index(), Some(0));

        acc.toggle(0);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn test_accordion_max_height_tracks_measured_content() {
        let mut acc = Accordion::new(vec![120.0, 200.0]).with_open(1);

        let open = acc.card(1).unwrap();
        assert!(open.expanded);
        assert_eq!(open.max_height_px, 200.0);

        let closed = acc.card(0).unwrap();
        assert!(!closed.expanded);
        assert_eq!(closed.max_height_px, 0.0);

        // Re-measure while open (viewport resize)
        acc.set_panel_height(1, 260.0);
        assert_eq!(acc.card(1).unwrap().max_height_px, 260.0);
    }

    #[test]
    fn test_flywheel_fill_percent_endpoints() {
        let mut fw = Flywheel::new(5);
        assert_eq!(fw.fill_percent(), 0.0);

        fw.select(4);
        assert_eq!(fw.fill_percent(), 100.0);

        fw.select(2);
        assert_eq!(fw.fill_percent(), 50.0);
    }

    #[test]
    fn test_flywheel_pin_flags() {
        let mut fw = Flywheel::new(4);
        fw.select(2);

        assert_eq!(
            fw.pin(0),
            Some(FlywheelPin {
                active: false,
                past: true
            })
        );
        assert_eq!(
            fw.pin(2),
            Some(FlywheelPin {
                active: true,
                past: false
            })
        );
        assert_eq!(
            fw.pin(3),
            Some(FlywheelPin {
                active: false,
                past: false
            })
        );
        assert_eq!(fw.pin(4), None);
    }

    #[test]
    fn test_flywheel_next_wraps_from_last_step() {
        let mut fw = Flywheel::new(3);
        assert!(fw.prev_hidden());
        assert_eq!(fw.next_label(), "Next ›");

        fw.next();
        fw.next();
        assert_eq!(fw.current(), 2);
        assert_eq!(fw.next_label(), "Next Quarter ›");

        fw.next();
        assert_eq!(fw.current(), 0);
        assert!(fw.prev_hidden());
    }

    #[test]
    fn test_flywheel_prev_stops_at_first_step() {
        let mut fw = Flywheel::new(3);
        fw.prev();
        assert_eq!(fw.current(), 0);

        fw.select(2);
        fw.prev();
        assert_eq!(fw.current(), 1);
    }

    #[test]
    fn test_feature_toggle_label_follows_active_feature() {
        let mut features = FeatureToggle::new(
            vec![
                ("benchmark".to_string(), "Benchmarking".to_string()),
                ("signals".to_string(), "Growth Signals".to_string()),
            ],
            "benchmark",
        );

        assert!(features.is_active("benchmark"));
        assert_eq!(features.dash_label(), "Benchmarking");

        features.activate("signals");
        assert!(features.is_active("signals"));
        assert!(!features.is_active("benchmark"));
        assert_eq!(features.dash_label(), "Growth Signals");

        // Unknown id: nothing active, label empty
        features.activate("nope");
        assert_eq!(features.dash_label(), "");
    }

    #[test]
    fn test_diagram_hover_pairs_column_and_modal() {
        let mut diagram = Diagram::new(3, 0, 3);
        assert!(diagram.column_hovered(0));
        assert!(diagram.modal_visible(0));

        diagram.hover(2);
        assert!(diagram.column_hovered(2));
        assert!(diagram.modal_visible(2));
        assert!(!diagram.modal_visible(0));

        diagram.leave();
        assert!(diagram.column_hovered(0));
    }

    #[test]
    fn test_diagram_mobile_slide_switching() {
        let mut diagram = Diagram::new(3, 0, 3);
        assert!(diagram.slide_active(0));

        diagram.switch_slide(2);
        assert!(diagram.slide_active(2));

        // Out of range ignored
        diagram.switch_slide(9);
        assert!(diagram.slide_active(2));
    }
}

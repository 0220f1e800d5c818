// 🧭 Global Nav Scroll Behavior
//
// Hide on scroll down, show on cumulative scroll up, solid background when
// away from the top, transparent at the very top. On scroll-snap pages the
// nav never hides (discrete jumps feel disorienting) and only the background
// toggles.

use serde::{Deserialize, Serialize};

/// CSS class for the solid nav background below the top zone
pub const SCROLL_CLASS: &str = "scrolled";

/// CSS class hiding the nav while scrolling down
pub const HIDDEN_CLASS: &str = "nav-hidden";

/// Scroll positions at or below this are "top of page"
pub const TOP_ZONE_PX: f64 = 10.0;

/// Cumulative upward scroll required to re-show a hidden nav
pub const SHOW_THRESHOLD_PX: f64 = 30.0;

/// Don't hide until scrolled past the nav's own height
pub const HIDE_THRESHOLD_PX: f64 = 80.0;

// ============================================================================
// NAV STATE
// ============================================================================

/// The two presentational classes the nav carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavClasses {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavClasses {
    /// Class list as applied to the nav element
    pub fn class_list(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.scrolled {
            classes.push(SCROLL_CLASS);
        }
        if self.hidden {
            classes.push(HIDDEN_CLASS);
        }
        classes
    }
}

/// Nav show/hide state machine, driven by scroll positions.
///
/// Persistent counters: last observed scroll position and the accumulated
/// upward scroll distance since the last downward movement.
#[derive(Debug, Clone)]
pub struct NavScroll {
    snap_page: bool,
    last_scroll_y: f64,
    scroll_up_accumulator: f64,
    scrolled: bool,
    hidden: bool,
}

impl NavScroll {
    /// `snap_page`: whether the page scrolls inside a snap container (the
    /// approach page), in which case the nav stays visible.
    pub fn new(snap_page: bool) -> Self {
        NavScroll {
            snap_page,
            last_scroll_y: 0.0,
            scroll_up_accumulator: 0.0,
            scrolled: false,
            hidden: false,
        }
    }

    pub fn classes(&self) -> NavClasses {
        NavClasses {
            scrolled: self.scrolled,
            hidden: self.hidden,
        }
    }

    /// Process one scroll sample and return the resulting classes.
    pub fn on_scroll(&mut self, current_scroll_y: f64) -> NavClasses {
        // At top of page: transparent, always visible, counters reset
        if current_scroll_y <= TOP_ZONE_PX {
            self.scrolled = false;
            self.hidden = false;
            self.scroll_up_accumulator = 0.0;
            self.last_scroll_y = current_scroll_y;
            return self.classes();
        }

        // Below top: solid background
        self.scrolled = true;

        // Snap pages never hide the nav
        if self.snap_page {
            self.hidden = false;
            self.last_scroll_y = current_scroll_y;
            return self.classes();
        }

        let delta = current_scroll_y - self.last_scroll_y;

        if delta > 0.0 {
            // Scrolling DOWN
            self.scroll_up_accumulator = 0.0;
            if current_scroll_y > HIDE_THRESHOLD_PX {
                self.hidden = true;
            }
        } else if delta < 0.0 {
            // Scrolling UP - accumulate before showing
            self.scroll_up_accumulator += delta.abs();
            if self.scroll_up_accumulator > SHOW_THRESHOLD_PX && self.hidden {
                self.hidden = false;
            }
        }

        self.last_scroll_y = current_scroll_y;
        self.classes()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_page_clears_both_classes() {
        let mut nav = NavScroll::new(false);

        // Hide it first
        nav.on_scroll(200.0);
        nav.on_scroll(400.0);
        assert!(nav.classes().hidden);
        assert!(nav.classes().scrolled);

        // Back to the top zone: both classes absent regardless of prior state
        let classes = nav.on_scroll(5.0);
        assert!(!classes.scrolled);
        assert!(!classes.hidden);
        assert!(classes.class_list().is_empty());
    }

    #[test]
    fn test_scrolling_down_past_threshold_hides_nav() {
        let mut nav = NavScroll::new(false);

        // Down but still above hide threshold: visible with background
        let classes = nav.on_scroll(50.0);
        assert!(classes.scrolled);
        assert!(!classes.hidden);

        // Past the threshold
        let classes = nav.on_scroll(120.0);
        assert!(classes.hidden);
        assert_eq!(classes.class_list(), vec![SCROLL_CLASS, HIDDEN_CLASS]);
    }

    #[test]
    fn test_cumulative_upward_scroll_reshows_nav() {
        let mut nav = NavScroll::new(false);
        nav.on_scroll(300.0);
        nav.on_scroll(500.0);
        assert!(nav.classes().hidden);

        // Small upward nudges accumulate: 20px then 15px crosses the 30px bar
        let classes = nav.on_scroll(480.0);
        assert!(classes.hidden);
        let classes = nav.on_scroll(465.0);
        assert!(!classes.hidden);
    }

    #[test]
    fn test_downward_movement_resets_accumulator() {
        let mut nav = NavScroll::new(false);
        nav.on_scroll(300.0);
        nav.on_scroll(500.0);

        // 25px up, then down again, then 25px up: never crosses 30 cumulative
        nav.on_scroll(475.0);
        nav.on_scroll(490.0);
        let classes = nav.on_scroll(465.0);
        assert!(classes.hidden);
    }

    #[test]
    fn test_snap_page_never_hides_nav() {
        let mut nav = NavScroll::new(true);

        let classes = nav.on_scroll(400.0);
        assert!(classes.scrolled);
        assert!(!classes.hidden);

        let classes = nav.on_scroll(900.0);
        assert!(!classes.hidden);
    }

    #[test]
    fn test_unchanged_position_keeps_state() {
        let mut nav = NavScroll::new(false);
        nav.on_scroll(200.0);
        let before = nav.classes();

        // delta == 0: neither branch runs
        let after = nav.on_scroll(200.0);
        assert_eq!(before, after);
    }
}

// Portfolio Landing Engine - Core Library
// Exposes all modules for use in the dev server binary and tests

pub mod entities;
pub mod rotation;
pub mod transition;
pub mod scheduler;
pub mod nav;
pub mod snap;
pub mod chart;
pub mod widgets;
pub mod page;
pub mod fileserver;

// Re-export commonly used types
pub use entities::{Company, CompanyRegistry};
pub use rotation::{
    RotationDelta, RotationEngine, SlotAssignment, FADE_DURATION_SECS, INITIAL_DELAY_MS,
    ROTATION_INTERVAL_MS, SLOT_COUNT, STAGGER_DELAY_SECS,
};
pub use transition::{CardContent, SlotTransition, TransitionPlan};
pub use scheduler::{PauseGate, RotationScheduler};
pub use nav::{NavClasses, NavScroll, HIDDEN_CLASS, SCROLL_CLASS};
pub use snap::{DotState, SectionTheme, SnapNavigator};
pub use chart::{default_stages, Bar, ChartLayout, GapZone, StageDatum};
pub use widgets::{Accordion, Diagram, FeatureToggle, Flywheel, Tabs};
pub use page::{Effect, Intent, PageState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

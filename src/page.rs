// 📄 Page State - explicit session state + typed intent dispatch
//
// One state object owns every controller on the page for the lifetime of the
// session, replacing scattered module-level globals. The host translates raw
// DOM events into typed intents and feeds them through a single dispatcher;
// effects that only the host can perform (scrolling, replaying an icon
// animation) come back as values.

use crate::chart::{default_stages, ChartLayout, StageDatum};
use crate::entities::CompanyRegistry;
use crate::nav::NavScroll;
use crate::rotation::{RotationEngine, SLOT_COUNT};
use crate::scheduler::{PauseGate, RotationScheduler};
use crate::snap::{SectionTheme, SnapNavigator};
use crate::transition::{self, TransitionPlan};
use crate::widgets::{Accordion, Diagram, FeatureToggle, Flywheel, Tabs};
use std::time::Instant;

// ============================================================================
// INTENTS AND EFFECTS
// ============================================================================

/// Typed user/browser events, one variant per DOM event the page listens to.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Scroll position sample (window or snap container)
    Scroll { y: f64 },

    /// A snap section's intersection ratio changed
    SectionVisible { index: usize, ratio: f64 },

    /// An entrance-reveal element's intersection ratio changed
    RevealVisible { index: usize, ratio: f64 },

    /// A dot in the indicator rail was clicked
    DotSelect { index: usize },

    /// An approach tab button was clicked
    TabSelect { index: usize },

    /// An accordion card header was clicked
    AccordionToggle { index: usize },

    /// Flywheel pin / prev / next interactions
    FlywheelSelect { index: usize },
    FlywheelPrev,
    FlywheelNext,

    /// A platform feature button was clicked
    FeatureSelect { id: String },

    /// A diagram column (or its modal) was hovered / the diagram was left
    DiagramHover { index: usize },
    DiagramLeave,
    DiagramSlide { index: usize },

    /// Pointer entered or left the bento grid
    GridHover { inside: bool },

    /// Tab visibility changed
    VisibilityChange { hidden: bool },
}

/// Actions the host page must carry out after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Smooth-scroll the snap container to a section
    ScrollToSection(usize),

    /// Restart an animated SVG icon by element id
    ReplayAnimation(String),
}

// ============================================================================
// PAGE STATE
// ============================================================================

/// Everything the landing/approach pages keep between events.
#[derive(Debug, Clone)]
pub struct PageState {
    pub registry: CompanyRegistry,
    pub nav: NavScroll,
    pub snap: SnapNavigator,
    pub tabs: Tabs,
    pub accordion: Accordion,
    pub flywheel: Flywheel,
    pub features: FeatureToggle,
    pub diagram: Diagram,
    pub gate: PauseGate,
    pub rotation: RotationEngine,
    pub scheduler: RotationScheduler,
    pub stages: Vec<StageDatum>,
}

impl PageState {
    /// Assemble the approach page's controllers around the default portfolio.
    pub fn new(registry: CompanyRegistry, section_themes: Vec<SectionTheme>, now: Instant) -> Self {
        let rotation = RotationEngine::new(&registry, SLOT_COUNT);

        PageState {
            nav: NavScroll::new(true),
            snap: SnapNavigator::new(section_themes),
            tabs: Tabs::new(3).with_replay_animations(vec![
                Some("tailored-crosshair-svg".to_string()),
                Some("g2m-mountain-svg".to_string()),
                Some("heritage-plant-svg".to_string()),
            ]),
            accordion: Accordion::new(Vec::new()),
            flywheel: Flywheel::new(4),
            features: FeatureToggle::new(Vec::new(), "benchmark"),
            diagram: Diagram::new(3, 0, 3),
            gate: PauseGate::new(),
            rotation,
            scheduler: RotationScheduler::new(now),
            stages: default_stages(),
            registry,
        }
    }

    /// Route one intent to its controller. Most intents mutate state the host
    /// re-reads through the controllers; the returned effects are the few
    /// actions only the host can perform.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match intent {
            Intent::Scroll { y } => {
                self.nav.on_scroll(y);
            }
            Intent::SectionVisible { index, ratio } => {
                self.snap.section_intersected(index, ratio);
            }
            Intent::RevealVisible { index, ratio } => {
                self.snap.reveal_intersected(index, ratio);
            }
            Intent::DotSelect { index } => {
                if let Some(section) = self.snap.select_dot(index) {
                    effects.push(Effect::ScrollToSection(section));
                }
            }
            Intent::TabSelect { index } => {
                if let Some(id) = self.tabs.activate(index) {
                    effects.push(Effect::ReplayAnimation(id.to_string()));
                }
            }
            Intent::AccordionToggle { index } => {
                self.accordion.toggle(index);
            }
            Intent::FlywheelSelect { index } => {
                self.flywheel.select(index);
            }
            Intent::FlywheelPrev => {
                self.flywheel.prev();
            }
            Intent::FlywheelNext => {
                self.flywheel.next();
            }
            Intent::FeatureSelect { id } => {
                self.features.activate(&id);
            }
            Intent::DiagramHover { index } => {
                self.diagram.hover(index);
            }
            Intent::DiagramLeave => {
                self.diagram.leave();
            }
            Intent::DiagramSlide { index } => {
                self.diagram.switch_slide(index);
            }
            Intent::GridHover { inside } => {
                if inside {
                    self.gate.pointer_entered();
                } else {
                    self.gate.pointer_left();
                }
            }
            Intent::VisibilityChange { hidden } => {
                self.gate.visibility_changed(hidden);
            }
        }

        effects
    }

    /// Timer callback: run a rotation tick if one is due and the gate is
    /// open. Returns the crossfade plan for the animation layer, or `None`
    /// when nothing should change (not due, paused, or no eligible company).
    pub fn poll_rotation(&mut self, now: Instant) -> Option<TransitionPlan> {
        if !self.scheduler.poll(now, &self.gate) {
            return None;
        }
        let delta = self.rotation.tick()?;
        Some(transition::plan(&delta.old, &delta.new, &self.registry))
    }

    /// Resize callback: rebuild the chart geometry for the new container.
    pub fn chart_layout(&self, width: f64, height: f64, viewport_width: f64) -> ChartLayout {
        ChartLayout::build(width, height, viewport_width, &self.stages)
    }
}

// ============================================================================
// TESTS
// ============================================================================

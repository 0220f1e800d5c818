// 🔄 Rotation Engine - Bento grid slot cycling
//
// 8 display slots ordered clockwise around the grid. Every tick one company
// enters at slot 0, everyone shifts one slot clockwise, and the occupant of
// the last slot is evicted. The entry cursor walks the full pool (initial
// companies first, staged companies behind them) and wraps modulo pool size.

use crate::entities::CompanyRegistry;
use serde::{Deserialize, Serialize};

// ============================================================================
// TIMING CONSTANTS
// ============================================================================

/// Number of display slots in the bento grid
pub const SLOT_COUNT: usize = 8;

/// Milliseconds between rotations
pub const ROTATION_INTERVAL_MS: u64 = 7000;

/// Milliseconds before the first rotation after page load
pub const INITIAL_DELAY_MS: u64 = 4000;

/// Seconds per full crossfade (fade out + fade in)
pub const FADE_DURATION_SECS: f64 = 0.6;

/// Seconds between each slot's fade start (wave effect)
pub const STAGGER_DELAY_SECS: f64 = 0.07;

// ============================================================================
// SLOT ASSIGNMENT
// ============================================================================

/// Ordered mapping of slot index -> company id (clockwise slot order).
///
/// Steady-state invariant: no two slots hold the same company id. A tick
/// that cannot find an entering company outside the grid is skipped rather
/// than allowed to violate this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAssignment {
    slots: Vec<String>,
}

impl SlotAssignment {
    pub fn new(slots: Vec<String>) -> Self {
        SlotAssignment { slots }
    }

    /// Company id currently in the given slot
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots.get(slot).map(|s| s.as_str())
    }

    /// Whether a company is currently on screen
    pub fn contains(&self, id: &str) -> bool {
        self.slots.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }
}

// ============================================================================
// ROTATION ENGINE
// ============================================================================

/// Result of a successful tick: the old and new assignments plus the delta.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationDelta {
    pub entering: String,
    pub evicted: String,
    pub old: SlotAssignment,
    pub new: SlotAssignment,
}

/// Advances the slot assignment one step per tick.
///
/// The engine owns the assignment and the entry cursor; ticks are serialized
/// by the single-threaded event model, so each tick sees the completed state
/// of the previous one.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    assignment: SlotAssignment,
    pool: Vec<String>,
    cursor: usize,
}

impl RotationEngine {
    /// Build the engine from a registry: initial assignment = first
    /// `slot_count` companies, cursor positioned just past them.
    pub fn new(registry: &CompanyRegistry, slot_count: usize) -> Self {
        let pool = registry.entry_queue();
        let assignment = SlotAssignment::new(registry.initial_slots(slot_count));
        let cursor = assignment.len();

        RotationEngine {
            assignment,
            pool,
            cursor,
        }
    }

    /// Build from explicit parts (used by tests and restored sessions)
    pub fn from_parts(assignment: SlotAssignment, pool: Vec<String>, cursor: usize) -> Self {
        RotationEngine {
            assignment,
            pool,
            cursor,
        }
    }

    pub fn assignment(&self) -> &SlotAssignment {
        &self.assignment
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Advance one rotation step.
    ///
    /// Selects the next pool company not already on screen (bounded by
    /// `pool.len()` attempts so a pool no larger than the slot count cannot
    /// loop forever), shifts every occupant one slot clockwise and evicts the
    /// last slot's occupant. Returns `None` and leaves the assignment
    /// untouched when no eligible company exists; the cursor still advances.
    pub fn tick(&mut self) -> Option<RotationDelta> {
        if self.pool.is_empty() || self.assignment.is_empty() {
            return None;
        }

        let mut entering = None;
        let mut tries = 0;
        while tries < self.pool.len() {
            let candidate = &self.pool[self.cursor % self.pool.len()];
            self.cursor += 1;
            tries += 1;

            if !self.assignment.contains(candidate) {
                entering = Some(candidate.clone());
                break;
            }
        }

        let entering = entering?;

        let old = self.assignment.clone();
        let last = old.len() - 1;
        let evicted = old.as_slice()[last].clone();

        let mut slots = Vec::with_capacity(old.len());
        slots.push(entering.clone());
        slots.extend_from_slice(&old.as_slice()[..last]);

        self.assignment = SlotAssignment::new(slots);

        Some(RotationDelta {
            entering,
            evicted,
            old,
            new: self.assignment.clone(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

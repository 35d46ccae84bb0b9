//! The cooking session state machine.
//!
//! Everything here is pure and synchronous: transitions are guarded methods
//! on [`SessionState`], and the timer/judging asynchrony lives in the owning
//! [`crate::App`]. That keeps every invariant testable without a runtime.
//!
//! Phases: Idle -> Cooking -> Judging -> Resolved -> (reset) Idle. Guarded
//! operations that don't apply are silent no-ops rather than errors; the
//! reference behavior treats rejected interaction as UX, not failure.

use skillet_types::{CookingResult, DishSnapshot, HeatLevel, Ingredient};

/// Hard cap on the pan: at most five ingredients per dish.
pub const MAX_SELECTED: usize = 5;

/// Derived view of where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Selecting ingredients, nothing on the stove.
    Idle,
    /// The timer is running.
    Cooking,
    /// A judging request is outstanding.
    Judging,
    /// A verdict is in; waiting for reset.
    Resolved,
}

/// The single mutable record describing one play-through.
///
/// Invariants, upheld by the guarded methods below:
/// - `selected` is unique by id and never exceeds [`MAX_SELECTED`]
/// - `is_cooking` and `loading` are never both true
/// - `result` is `Some` only while `loading` is false
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    selected: Vec<Ingredient>,
    is_cooking: bool,
    heat: HeatLevel,
    timer: u64,
    loading: bool,
    result: Option<CookingResult>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> &[Ingredient] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|i| i.id == id)
    }

    #[must_use]
    pub const fn is_cooking(&self) -> bool {
        self.is_cooking
    }

    #[must_use]
    pub const fn heat(&self) -> HeatLevel {
        self.heat
    }

    /// Seconds elapsed in the current cooking session.
    #[must_use]
    pub const fn timer(&self) -> u64 {
        self.timer
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn result(&self) -> Option<&CookingResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_cooking {
            Phase::Cooking
        } else if self.loading {
            Phase::Judging
        } else if self.result.is_some() {
            Phase::Resolved
        } else {
            Phase::Idle
        }
    }

    /// Toggle an ingredient in or out of the pan.
    ///
    /// No-op while cooking or judging. Removing is always allowed; adding is
    /// silently rejected once the pan holds [`MAX_SELECTED`] items. Insertion
    /// order is preserved and duplicates (by id) are impossible.
    ///
    /// Returns whether the selection changed.
    pub fn toggle_ingredient(&mut self, ingredient: &Ingredient) -> bool {
        if self.is_cooking || self.loading {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|i| i.id == ingredient.id) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= MAX_SELECTED {
            return false;
        }
        self.selected.push(ingredient.clone());
        true
    }

    /// Set the stove heat. No-op while cooking.
    pub fn set_heat(&mut self, heat: HeatLevel) {
        if self.is_cooking {
            return;
        }
        self.heat = heat;
    }

    /// Idle -> Cooking. Guarded by a non-empty selection; resets the timer
    /// to 0. Returns whether cooking actually started.
    pub fn start_cooking(&mut self) -> bool {
        if self.phase() != Phase::Idle || self.selected.is_empty() {
            return false;
        }
        self.is_cooking = true;
        self.timer = 0;
        true
    }

    /// Cooking -> Judging. Captures the dish at the instant of transition so
    /// later mutation of the selection cannot affect the in-flight judgment.
    pub fn stop_cooking(&mut self) -> Option<DishSnapshot> {
        if !self.is_cooking {
            return None;
        }
        self.is_cooking = false;
        self.loading = true;
        Some(DishSnapshot {
            ingredients: self.selected.clone(),
            seconds: self.timer,
            heat: self.heat,
        })
    }

    /// Judging -> Resolved. Unconditional on completion of the judging call;
    /// the judging client guarantees it always produces a verdict.
    pub fn finish_judging(&mut self, result: CookingResult) {
        if !self.loading {
            // A verdict with no outstanding request has nowhere to go.
            tracing::debug!("Dropping judging result outside the Judging phase");
            return;
        }
        self.loading = false;
        self.result = Some(result);
    }

    /// Advance the cooking clock by one second. Ticks that race a stop are
    /// dropped; the timer only moves while cooking.
    pub fn tick(&mut self) {
        if self.is_cooking {
            self.timer += 1;
        }
    }

    /// Return to the initial state. Allowed from Idle, Cooking, and Resolved;
    /// a session mid-Judging is not resettable (the in-flight verdict would
    /// have undefined discard semantics). Returns whether the reset applied.
    pub fn reset(&mut self) -> bool {
        if self.loading {
            return false;
        }
        *self = Self::default();
        true
    }
}

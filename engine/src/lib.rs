//! Core engine for Skillet - session state machine and orchestration.
//!
//! This crate contains the [`App`] state machine without TUI dependencies.
//! The two sources of asynchrony - the one-second cooking clock and the
//! single outstanding judging request - both report back through one
//! unbounded [`SessionEvent`] channel that the front end drains once per
//! frame via [`App::pump_events`]. All `SessionState` mutation happens on
//! the caller's thread, so no locking is needed anywhere.

use tokio::sync::mpsc;

mod catalog;
mod config;
mod session;
mod timer;

pub use catalog::ingredients;
pub use config::{AppConfig, ApiKeys, ConfigError, SkilletConfig};
pub use session::{MAX_SELECTED, Phase, SessionState};

// Re-export from crates for public API
pub use skillet_judge::{ApiKey, JudgeConfig};
pub use skillet_types::{
    CookingResult, DishSnapshot, HEAT_LEVELS, HeatLevel, Ingredient, IngredientCategory,
};

use timer::CookingTimer;

/// Completion notices from the session's background tasks.
#[derive(Debug)]
pub enum SessionEvent {
    /// One second of cooking elapsed.
    TimerTick,
    /// The judging call completed (success or fallback - always a verdict).
    Judged(CookingResult),
}

/// The running game: session state plus the resources that animate it.
///
/// Owns the live timer task (present exactly while the session is Cooking)
/// and spawns at most one judging task per serve; the state machine's
/// mutual exclusion of `is_cooking` and `loading` makes a second outstanding
/// request structurally impossible.
pub struct App {
    session: SessionState,
    judge_config: JudgeConfig,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    events_rx: mpsc::UnboundedReceiver<SessionEvent>,
    timer: Option<CookingTimer>,
    shelf_cursor: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(judge_config: JudgeConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session: SessionState::new(),
            judge_config,
            events_tx,
            events_rx,
            timer: None,
            shelf_cursor: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &'static [Ingredient] {
        catalog::ingredients()
    }

    #[must_use]
    pub const fn shelf_cursor(&self) -> usize {
        self.shelf_cursor
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Move the shelf cursor by `delta` entries, clamped to the catalog.
    pub fn move_shelf_cursor(&mut self, delta: isize) {
        let len = self.catalog().len() as isize;
        let cursor = (self.shelf_cursor as isize + delta).clamp(0, len - 1);
        self.shelf_cursor = cursor as usize;
    }

    /// Toggle the ingredient under the shelf cursor in or out of the pan.
    pub fn toggle_under_cursor(&mut self) {
        let Some(ingredient) = self.catalog().get(self.shelf_cursor) else {
            return;
        };
        self.session.toggle_ingredient(ingredient);
    }

    pub fn set_heat(&mut self, heat: HeatLevel) {
        self.session.set_heat(heat);
    }

    /// Start cooking. Spawns the one-second clock on success.
    pub fn start_cooking(&mut self) {
        if self.session.start_cooking() {
            // A cook reset earlier in this same frame may have left ticks
            // queued; they must not count against the new session.
            self.discard_pending_events();
            tracing::debug!(ingredients = self.session.selected().len(), "Cooking started");
            self.timer = Some(CookingTimer::start(self.events_tx.clone()));
        }
    }

    /// Serve the dish: stop the clock, snapshot the pan, and dispatch the
    /// judging request. The session resolves when the verdict event lands.
    pub fn stop_and_serve(&mut self) {
        let Some(snapshot) = self.session.stop_cooking() else {
            return;
        };
        // Leaving Cooking: the clock must die with the phase.
        self.timer = None;
        tracing::debug!(
            dish = %snapshot.ingredient_names(),
            seconds = snapshot.seconds,
            heat = %snapshot.heat,
            "Dish served; awaiting judgment"
        );

        let config = self.judge_config.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = skillet_judge::judge(&config, &snapshot).await;
            // Receiver dropped means the whole app is going away.
            let _ = events.send(SessionEvent::Judged(result));
        });
    }

    /// Clear the pan and return to Idle. Refused mid-Judging.
    pub fn reset(&mut self) {
        if self.session.reset() {
            self.timer = None;
            self.discard_pending_events();
        }
    }

    /// Throw away queued events from a cook that no longer exists.
    ///
    /// Only called outside Judging: with no request outstanding the channel
    /// can hold nothing but stale timer ticks, so dropping everything is
    /// safe. (A queued `Judged` implies `loading`, and `loading` blocks both
    /// reset and a new start.)
    fn discard_pending_events(&mut self) {
        while self.events_rx.try_recv().is_ok() {}
    }

    /// Drain and apply all pending session events. Called once per frame by
    /// the front end; also how tests advance the session deterministically.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::TimerTick => self.session.tick(),
            SessionEvent::Judged(result) => {
                tracing::debug!(dish = %result.dish_name, "Verdict received");
                self.session.finish_judging(result);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{App, ApiKey, HeatLevel, JudgeConfig, Phase};

    fn app() -> App {
        App::new(JudgeConfig::new(ApiKey::new("test-key")))
    }

    #[test]
    fn cursor_clamps_to_catalog_bounds() {
        let mut app = app();
        app.move_shelf_cursor(-5);
        assert_eq!(app.shelf_cursor(), 0);
        app.move_shelf_cursor(100);
        assert_eq!(app.shelf_cursor(), app.catalog().len() - 1);
    }

    #[test]
    fn toggle_under_cursor_puts_catalog_entry_in_pan() {
        let mut app = app();
        app.move_shelf_cursor(3);
        app.toggle_under_cursor();
        assert_eq!(app.session().selected()[0].name, "Tomato");

        app.toggle_under_cursor();
        assert!(app.session().selected().is_empty());
    }

    #[tokio::test]
    async fn start_and_reset_manage_the_timer_task() {
        let mut app = app();
        app.toggle_under_cursor();
        app.start_cooking();
        assert!(app.timer.is_some());
        assert_eq!(app.session().phase(), Phase::Cooking);

        app.reset();
        assert!(app.timer.is_none());
        assert_eq!(app.session().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn start_without_ingredients_spawns_nothing() {
        let mut app = app();
        app.start_cooking();
        assert!(app.timer.is_none());
        assert_eq!(app.session().phase(), Phase::Idle);
    }

    #[test]
    fn heat_changes_flow_through_to_the_session() {
        let mut app = app();
        app.set_heat(HeatLevel::Low);
        assert_eq!(app.session().heat(), HeatLevel::Low);
    }
}

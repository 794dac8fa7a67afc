/**
 * Easter Egg Tracker
 *
 * Click-counter state machine for the logo triple-click gesture.
 *
 * ```text
 * idle(0) ─click─► counting(1) ─click─► counting(2) ─click─► triggered ─► idle(0)
 *    ▲                 │                    │
 *    └──── decay ──────┴────────────────────┘
 * ```
 *
 * Every click replaces the decay timer. Time never advances on its own: the
 * caller passes `now` to `click` and to `poll`, which the frame loop calls
 * once per frame.
 */

use std::time::{Duration, Instant};

use super::egg::{EggCatalog, UnlockOutcome, TRIPLE_CLICK_EGG};

/// Clicks needed to trigger the egg
pub const CLICKS_TO_TRIGGER: u8 = 3;

/// Timer durations used by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EggTimings {
    /// Maximum gap between consecutive clicks
    pub click_window: Duration,
    /// How long special mode stays on after the first unlock
    pub special_mode: Duration,
    /// Display hint for the "unlocked" notification
    pub unlocked_toast: Duration,
    /// Display hint for the "toggled" notification
    pub toggled_toast: Duration,
}

impl Default for EggTimings {
    fn default() -> Self {
        Self {
            click_window: Duration::from_millis(500),
            special_mode: Duration::from_secs(10),
            unlocked_toast: Duration::from_secs(5),
            toggled_toast: Duration::from_secs(2),
        }
    }
}

/// A pending expiration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    deadline: Instant,
}

impl Timer {
    pub fn start(now: Instant, after: Duration) -> Self {
        Self { deadline: now + after }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Click counter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickState {
    Idle,
    Counting { count: u8, decay: Timer },
}

impl ClickState {
    pub fn count(&self) -> u8 {
        match self {
            ClickState::Idle => 0,
            ClickState::Counting { count, .. } => *count,
        }
    }
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggEventKind {
    Unlocked,
    Toggled { special_mode: bool },
}

/// One-shot notification emitted on every trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EggNotification {
    pub kind: EggEventKind,
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

/// Tracks the triple-click gesture, the egg catalogue and special mode
#[derive(Debug, Clone)]
pub struct EasterEggTracker {
    catalog: EggCatalog,
    timings: EggTimings,
    clicks: ClickState,
    special_mode: bool,
    special_mode_expiry: Option<Timer>,
}

impl Default for EasterEggTracker {
    fn default() -> Self {
        Self::new(EggTimings::default())
    }
}

impl EasterEggTracker {
    pub fn new(timings: EggTimings) -> Self {
        Self {
            catalog: EggCatalog::default(),
            timings,
            clicks: ClickState::Idle,
            special_mode: false,
            special_mode_expiry: None,
        }
    }

    pub fn timings(&self) -> EggTimings {
        self.timings
    }

    pub fn catalog(&self) -> &EggCatalog {
        &self.catalog
    }

    pub fn click_state(&self) -> ClickState {
        self.clicks
    }

    pub fn special_mode(&self) -> bool {
        self.special_mode
    }

    pub fn is_unlocked(&self) -> bool {
        self.catalog.is_unlocked(TRIPLE_CLICK_EGG)
    }

    /// Register a click on the logo
    pub fn click(&mut self, now: Instant) -> Option<EggNotification> {
        self.poll(now);

        let count = self.clicks.count() + 1;
        if count >= CLICKS_TO_TRIGGER {
            self.clicks = ClickState::Idle;
            return Some(self.trigger(now));
        }

        self.clicks = ClickState::Counting {
            count,
            decay: Timer::start(now, self.timings.click_window),
        };
        None
    }

    /// Fire any timers that are due at `now`
    pub fn poll(&mut self, now: Instant) {
        if let ClickState::Counting { decay, .. } = self.clicks {
            if decay.is_due(now) {
                self.clicks = ClickState::Idle;
            }
        }

        if let Some(expiry) = self.special_mode_expiry {
            if expiry.is_due(now) {
                tracing::debug!("Special mode expired");
                self.special_mode = false;
                self.special_mode_expiry = None;
            }
        }
    }

    /// Earliest pending deadline, for scheduling the next repaint
    pub fn next_deadline(&self) -> Option<Instant> {
        let decay = match self.clicks {
            ClickState::Idle => None,
            ClickState::Counting { decay, .. } => Some(decay.deadline()),
        };
        let expiry = self.special_mode_expiry.map(|timer| timer.deadline());

        match (decay, expiry) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn trigger(&mut self, now: Instant) -> EggNotification {
        match self.catalog.unlock(TRIPLE_CLICK_EGG) {
            UnlockOutcome::NewlyUnlocked => {
                tracing::info!("Easter egg unlocked: {}", TRIPLE_CLICK_EGG);
                self.special_mode = true;
                self.special_mode_expiry = Some(Timer::start(now, self.timings.special_mode));
                self.unlocked_notification()
            }
            UnlockOutcome::AlreadyUnlocked | UnlockOutcome::Unknown => {
                self.special_mode = !self.special_mode;
                tracing::debug!("Special mode toggled: {}", self.special_mode);
                self.toggled_notification()
            }
        }
    }

    fn unlocked_notification(&self) -> EggNotification {
        let (title, description) = match self.catalog.get(TRIPLE_CLICK_EGG) {
            Some(egg) => (
                format!("{} Easter egg unlocked: {}", egg.icon, egg.name),
                egg.description.clone(),
            ),
            None => ("Easter egg unlocked".to_string(), String::new()),
        };
        EggNotification {
            kind: EggEventKind::Unlocked,
            title,
            description,
            duration: self.timings.unlocked_toast,
        }
    }

    fn toggled_notification(&self) -> EggNotification {
        let (title, description) = if self.special_mode {
            ("✨ Special mode on", "Triple-click the logo again to turn it off.")
        } else {
            ("Special mode off", "Triple-click the logo to bring it back.")
        };
        EggNotification {
            kind: EggEventKind::Toggled { special_mode: self.special_mode },
            title: title.to_string(),
            description: description.to_string(),
            duration: self.timings.toggled_toast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn triple_click(tracker: &mut EasterEggTracker, start: Instant) -> Option<EggNotification> {
        tracker.click(start);
        tracker.click(start + ms(100));
        tracker.click(start + ms(200))
    }

    #[test]
    fn test_three_quick_clicks_unlock() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();

        assert!(tracker.click(t0).is_none());
        assert_eq!(tracker.click_state().count(), 1);
        assert!(tracker.click(t0 + ms(100)).is_none());
        assert_eq!(tracker.click_state().count(), 2);

        let note = tracker.click(t0 + ms(200)).unwrap();
        assert_eq!(note.kind, EggEventKind::Unlocked);
        assert!(note.title.contains("Triple Threat"));
        assert_eq!(note.duration, Duration::from_secs(5));
        assert!(tracker.is_unlocked());
        assert!(tracker.special_mode());
        assert_eq!(tracker.click_state(), ClickState::Idle);
    }

    #[test]
    fn test_pause_resets_counter() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();

        tracker.click(t0);
        tracker.click(t0 + ms(100));
        // 600ms after the second click: the decay timer has fired
        assert!(tracker.click(t0 + ms(700)).is_none());

        assert!(!tracker.is_unlocked());
        assert_eq!(tracker.click_state().count(), 1);
    }

    #[test]
    fn test_decay_fires_on_poll() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();

        tracker.click(t0);
        tracker.poll(t0 + ms(499));
        assert_eq!(tracker.click_state().count(), 1);
        tracker.poll(t0 + ms(500));
        assert_eq!(tracker.click_state(), ClickState::Idle);
    }

    #[test]
    fn test_each_click_restarts_decay() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();

        tracker.click(t0);
        tracker.click(t0 + ms(400));
        // 800ms after the first click, but only 400ms after the second
        let note = tracker.click(t0 + ms(800));
        assert!(note.is_some());
    }

    #[test]
    fn test_special_mode_auto_disables() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();
        triple_click(&mut tracker, t0);
        let unlocked_at = t0 + ms(200);

        tracker.poll(unlocked_at + Duration::from_secs(9));
        assert!(tracker.special_mode());
        tracker.poll(unlocked_at + Duration::from_secs(10));
        assert!(!tracker.special_mode());
        assert!(tracker.is_unlocked());
        assert!(tracker.next_deadline().is_none());
    }

    #[test]
    fn test_repeat_trigger_toggles_without_reunlock() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();
        triple_click(&mut tracker, t0);

        let note = triple_click(&mut tracker, t0 + Duration::from_secs(1)).unwrap();
        assert_eq!(note.kind, EggEventKind::Toggled { special_mode: false });
        assert_eq!(note.title, "Special mode off");
        assert!(!tracker.special_mode());

        let note = triple_click(&mut tracker, t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(note.kind, EggEventKind::Toggled { special_mode: true });
        assert!(tracker.is_unlocked());
        assert_eq!(tracker.catalog().unlocked().count(), 1);
    }

    #[test]
    fn test_scheduled_disable_still_fires_after_toggles() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();
        triple_click(&mut tracker, t0);
        triple_click(&mut tracker, t0 + Duration::from_secs(1));
        triple_click(&mut tracker, t0 + Duration::from_secs(2));
        assert!(tracker.special_mode());

        tracker.poll(t0 + Duration::from_secs(11));
        assert!(!tracker.special_mode());
    }

    #[test]
    fn test_toggle_after_expiry_has_no_timer() {
        let mut tracker = EasterEggTracker::default();
        let t0 = Instant::now();
        triple_click(&mut tracker, t0);
        tracker.poll(t0 + Duration::from_secs(11));

        let later = t0 + Duration::from_secs(20);
        triple_click(&mut tracker, later);
        assert!(tracker.special_mode());

        tracker.poll(later + Duration::from_secs(60));
        assert!(tracker.special_mode());
    }

    #[test]
    fn test_next_deadline() {
        let timings = EggTimings {
            click_window: ms(50),
            special_mode: ms(1000),
            ..EggTimings::default()
        };
        let mut tracker = EasterEggTracker::new(timings);
        let t0 = Instant::now();
        assert!(tracker.next_deadline().is_none());

        tracker.click(t0);
        assert_eq!(tracker.next_deadline(), Some(t0 + ms(50)));

        tracker.click(t0 + ms(10));
        tracker.click(t0 + ms(20));
        assert_eq!(tracker.next_deadline(), Some(t0 + ms(1020)));
    }
}

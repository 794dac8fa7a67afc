//! Easter Egg Module
//!
//! Hidden achievements for the desktop client. The only gesture tracked is a
//! rapid triple-click on the logo, which unlocks the `triple_click` egg and
//! turns on a temporary special mode.
//!
//! - **`egg`** - Egg definitions and the session catalogue
//! - **`tracker`** - Click counter state machine and timers

pub mod egg;
pub mod tracker;

pub use egg::{EasterEgg, EggCatalog, UnlockOutcome, TRIPLE_CLICK_EGG};
pub use tracker::{
    ClickState, EasterEggTracker, EggEventKind, EggNotification, EggTimings, Timer,
    CLICKS_TO_TRIGGER,
};

pub mod clock;
pub mod games;

pub use clock::{Clock, ManualClock, SystemClock};
pub use games::{GameService, TimerTick};

// Utils compartidos

pub mod constants;
pub mod debounce;

pub use constants::*;
pub use debounce::{Debouncer, Scheduler, TimeoutScheduler};

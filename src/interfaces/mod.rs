// ============================================================================
// Interfaces Module
// Contains the division observer contract and its stock implementations
// ============================================================================

mod observer;

pub use observer::{DivisionEvent, DivisionObserver, DivisionStats, LoggingObserver, NoOpObserver};

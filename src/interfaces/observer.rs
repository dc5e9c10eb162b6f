// ============================================================================
// Division Observer Interface
// Defines the contract for watching the long-division loop digit by digit
// ============================================================================

use crate::numeric::Digit;

/// Events emitted while a division runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionEvent {
    /// Numerator and denominator were multiplied by `factor` so the divisor's
    /// leading digit became `divisor_lead`
    Normalized { factor: Digit, divisor_lead: Digit },

    /// The quotient is zero at the requested scale; no digit loop ran
    OutOfScale { scale: usize },

    /// One quotient digit was produced
    DigitProduced {
        /// Index into the quotient's digit buffer
        position: usize,
        /// Estimate from the two leading remainder digits
        trial: Digit,
        /// Decrements applied by the three-digit refinement test
        refinements: u8,
        /// Whether the multiply-subtract step borrowed and had to add back
        added_back: bool,
        /// Final quotient digit
        digit: Digit,
    },
}

/// Observer trait for instrumenting the division loop.
/// Implementations can handle logging, statistics, assertions, etc.
pub trait DivisionObserver {
    /// Handle a division event
    fn on_event(&mut self, event: DivisionEvent);
}

/// No-op observer, used by the plain division entry points
pub struct NoOpObserver;

impl DivisionObserver for NoOpObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: DivisionEvent) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl DivisionObserver for LoggingObserver {
    fn on_event(&mut self, event: DivisionEvent) {
        tracing::trace!("Division event: {:?}", event);
    }
}

/// Aggregated statistics over one or more divisions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionStats {
    /// Quotient digits produced
    pub digits: usize,
    /// Digits whose multiply-subtract step needed an add-back
    pub add_backs: usize,
    /// Largest refinement count seen for a single digit
    pub max_refinements: u8,
    /// Digits grouped by refinement count (0, 1, 2)
    pub refinement_histogram: [usize; 3],
    /// Divisions that ran the normalization multiply
    pub normalizations: usize,
    /// Divisions short-circuited to zero
    pub out_of_scale: usize,
}

impl DivisionStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}

impl DivisionObserver for DivisionStats {
    fn on_event(&mut self, event: DivisionEvent) {
        match event {
            DivisionEvent::Normalized { .. } => self.normalizations += 1,
            DivisionEvent::OutOfScale { .. } => self.out_of_scale += 1,
            DivisionEvent::DigitProduced {
                refinements,
                added_back,
                ..
            } => {
                self.digits += 1;
                self.add_backs += usize::from(added_back);
                self.max_refinements = self.max_refinements.max(refinements);
                let bucket = usize::from(refinements).min(self.refinement_histogram.len() - 1);
                self.refinement_histogram[bucket] += 1;
            }
        }
    }
}

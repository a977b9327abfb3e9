//! Service observer trait for progress reporting and data collection.

use crate::report::StopVisit;

/// Callbacks invoked by [`Service::run_stops`][crate::Service::run_stops] at
/// each visit boundary.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ServiceObserver for ProgressPrinter {
///     fn on_visit(&mut self, visit: &StopVisit) {
///         println!(
///             "visit {}: {} (+{} -{}, {} onboard)",
///             visit.visit, visit.stop, visit.boarded, visit.alighted, visit.onboard
///         );
///     }
/// }
/// ```
pub trait ServiceObserver {
    /// Called after each stop visit completes.
    fn on_visit(&mut self, _visit: &StopVisit) {}

    /// Called once after the final visit.
    fn on_service_end(&mut self, _visits: u64) {}
}

/// A [`ServiceObserver`] that does nothing.  Use when you need to call
/// `run_stops` but don't want callbacks.
pub struct NoopObserver;

impl ServiceObserver for NoopObserver {}

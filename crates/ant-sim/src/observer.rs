//! Simulation observer trait for progress reporting and log collection.

use ant_core::Tick;

use crate::ActionRecord;

/// Callbacks invoked by [`Controller::run`][crate::Controller::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  [`on_action`][Self::on_action] is the
/// action-log sink — every take/give/move of every robot flows through it,
/// in emission order.
///
/// # Example — delivery progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_delivery(&mut self, _tick: Tick, delivered: u64) {
///         if delivered % 100 == 0 {
///             println!("{delivered}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any robot acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per emitted action record, in emission order.
    fn on_action(&mut self, _record: &ActionRecord) {}

    /// Called after each completed delivery with the running total.
    fn on_delivery(&mut self, _tick: Tick, _delivered: u64) {}

    /// Called at the end of each tick with the number of records emitted.
    fn on_tick_end(&mut self, _tick: Tick, _actions: usize) {}

    /// Called once when the delivery target has been reached.
    fn on_sim_end(&mut self, _final_tick: Tick, _delivered: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

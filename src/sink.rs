use crate::signal::Signal;

/// Drives the light and buzzer for each pad.
///
/// Both calls must be idempotent: deactivating a pad that is already dark,
/// or activating one that is already lit, is harmless.
pub trait SignalSink {
    fn activate(&mut self, signal: Signal);
    fn deactivate(&mut self, signal: Signal);
}

/// Receives the score every time it changes.
pub trait ScoreDisplay {
    fn show_score(&mut self, score: u32);

    /// The operator pressed a wrong pad. `score` is the final score.
    fn game_over(&mut self, _score: u32) {}
}

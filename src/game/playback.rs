use super::{Game, Task, TurnPhase};
use crate::sink::{ScoreDisplay, SignalSink};

impl<S: SignalSink, D: ScoreDisplay> Game<S, D> {
    /// Plays the whole sequence back, one pad per step period.
    ///
    /// Panics if a playback is already running.
    pub(crate) fn begin_playback(&mut self) {
        assert!(
            self.session.phase != TurnPhase::Playing,
            "begin_playback called while already playing"
        );

        log::info!("Playing back {} signal(s)", self.session.sequence.len());

        self.session.phase = TurnPhase::Playing;
        self.session.cursor = 0;
        self.schedule_round(self.timings.step_ms, Task::PlaybackStep);
    }

    pub(super) fn play_step(&mut self) {
        let signal = self.session.sequence[self.session.cursor];
        log::trace!("Playback step {}: {:?}", self.session.cursor, signal);

        self.flash(signal);
        self.session.cursor += 1;

        // The hand-over is one step period after the last flash starts
        let next = if self.session.cursor < self.session.sequence.len() {
            Task::PlaybackStep
        } else {
            Task::FinishPlayback
        };
        self.schedule_round(self.timings.step_ms, next);
    }

    pub(super) fn finish_playback(&mut self) {
        self.round = None;
        self.session.cursor = 0;
        self.session.input.clear();
        self.session.phase = TurnPhase::AwaitingInput;

        log::info!("Operator's turn");
    }
}

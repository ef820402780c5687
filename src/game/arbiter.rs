use super::{Game, Task, TurnPhase, ValidationPolicy};
use crate::signal::Signal;
use crate::sink::{ScoreDisplay, SignalSink};

impl<S: SignalSink, D: ScoreDisplay> Game<S, D> {
    /// Operator pressed a pad. Dropped unless it is the operator's turn.
    pub fn submit(&mut self, signal: Signal) {
        if self.session.phase != TurnPhase::AwaitingInput {
            log::trace!("Dropping press of {} during {:?}", signal, self.session.phase);
            return;
        }

        log::debug!("Signal {} pressed", signal);

        // Right and wrong presses light up the same way
        self.flash(signal);
        self.session.input.push(signal);

        if self.policy == ValidationPolicy::Strict && !self.session.sequence.is_prefix(&self.session.input) {
            self.lose();
        } else if self.session.input.len() == self.session.sequence.len() {
            self.win_round();
        }
    }

    fn win_round(&mut self) {
        self.session.score += 1;
        self.display.show_score(self.session.score);
        log::info!("Round won, score {}", self.session.score);

        self.session.input.clear();
        self.generator.extend(&mut self.session.sequence);

        self.session.phase = TurnPhase::Idle;
        self.schedule_round(self.timings.pause_ms, Task::NextRound);
    }

    fn lose(&mut self) {
        log::info!(
            "Wrong signal at position {}, game over with score {}",
            self.session.input.len() - 1,
            self.session.score
        );

        if let Some(round) = self.round.take() {
            self.timeline.cancel(round);
        }

        self.session.phase = TurnPhase::Lost;
        self.display.game_over(self.session.score);
    }
}

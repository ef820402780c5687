//! The Simon session: sequence, playback, operator turn and score.
//!
//! Everything runs on the caller's thread. Delays are tasks on a
//! [`Timeline`] that only fire when the owner calls [`Game::tick`].

use serde::Deserialize;

use crate::color::NUM_LIGHTS;
use crate::sequence::{Sequence, SequenceGenerator};
use crate::signal::Signal;
use crate::sink::{ScoreDisplay, SignalSink};
use crate::timeline::{TaskHandle, Timeline};

mod arbiter;
mod playback;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnPhase {
    /// No game, or the pause between a won round and the next playback
    Idle,
    /// The machine is playing the sequence back
    Playing,
    /// The operator is repeating the sequence
    AwaitingInput,
    /// The operator pressed a wrong pad
    Lost,
}

/// How a round is judged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Every press must match the sequence, the first mismatch loses the game
    Strict,
    /// Only the number of presses is checked
    LengthOnly,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        ValidationPolicy::Strict
    }
}

/// Game delays in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timings {
    /// How long a pad stays lit
    pub on_ms: u64,
    /// Start-to-start distance between two playback steps
    pub step_ms: u64,
    /// Gap between a won round and the next playback
    pub pause_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            on_ms: 500,
            step_ms: 1000,
            pause_ms: 500,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Task {
    PlaybackStep,
    FinishPlayback,
    NextRound,
    Deactivate(Signal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub sequence: Sequence,
    pub input: Vec<Signal>,
    pub score: u32,
    pub phase: TurnPhase,
    pub cursor: usize,
}

impl Session {
    fn new() -> Self {
        Session {
            sequence: Sequence::new(),
            input: Vec::new(),
            score: 0,
            phase: TurnPhase::Idle,
            cursor: 0,
        }
    }
}

pub struct Game<S, D> {
    sink: S,
    display: D,
    timings: Timings,
    policy: ValidationPolicy,
    generator: SequenceGenerator,

    session: Session,
    timeline: Timeline<Task>,
    // The pending playback step, hand-over or next round
    round: Option<TaskHandle>,
    // One pending deactivate per pad
    lit: [Option<TaskHandle>; NUM_LIGHTS],
    now: u64,
}

impl<S: SignalSink, D: ScoreDisplay> Game<S, D> {
    pub fn new(sink: S, display: D, timings: Timings, policy: ValidationPolicy, generator: SequenceGenerator) -> Self {
        assert!(timings.on_ms > 0, "on duration must be positive");
        assert!(timings.step_ms > 0, "step period must be positive");

        Game {
            sink,
            display,
            timings,
            policy,
            generator,

            session: Session::new(),
            timeline: Timeline::new(),
            round: None,
            lit: [None; NUM_LIGHTS],
            now: 0,
        }
    }

    /// Clears the session and cancels everything still scheduled.
    pub fn reset(&mut self) {
        self.timeline.cancel_all();
        self.round = None;

        for signal in Signal::ALL.iter() {
            if self.lit[signal.index()].take().is_some() {
                self.sink.deactivate(*signal);
            }
        }

        self.session = Session::new();
        log::debug!("Session reset");
    }

    pub fn start_game(&mut self) {
        self.reset();
        log::info!("Starting game");

        self.display.show_score(self.session.score);
        self.generator.extend(&mut self.session.sequence);
        self.begin_playback();
    }

    /// Advances the game clock to `now`, running every task that falls due.
    ///
    /// Each task runs at its own deadline, so delays it schedules are measured
    /// from when it was due rather than from when the tick noticed it.
    pub fn tick(&mut self, now: u64) {
        if now < self.now {
            log::warn!("Clock went backwards ({} < {}), ignoring tick", now, self.now);
            return;
        }

        while let Some((deadline, task)) = self.timeline.pop_due(now) {
            self.now = deadline;
            self.run(task);
        }

        self.now = now;
    }

    fn run(&mut self, task: Task) {
        log::trace!("Running {:?} at {}", task, self.now);

        match task {
            Task::PlaybackStep => self.play_step(),
            Task::FinishPlayback => self.finish_playback(),
            Task::NextRound => {
                self.round = None;
                self.begin_playback();
            }
            Task::Deactivate(signal) => {
                self.lit[signal.index()] = None;
                self.sink.deactivate(signal);
            }
        }
    }

    /// Lights a pad and schedules it to go dark, replacing any earlier
    /// pending deactivate for the same pad.
    fn flash(&mut self, signal: Signal) {
        if let Some(previous) = self.lit[signal.index()].take() {
            self.timeline.cancel(previous);
        }

        self.sink.activate(signal);
        let handle = self.timeline.schedule(self.now, self.timings.on_ms, Task::Deactivate(signal));
        self.lit[signal.index()] = Some(handle);
    }

    fn schedule_round(&mut self, delay: u64, task: Task) {
        self.round = Some(self.timeline.schedule(self.now, delay, task));
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> TurnPhase {
        self.session.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn sequence(&self) -> &[Signal] {
        &self.session.sequence
    }

    pub fn input(&self) -> &[Signal] {
        &self.session.input
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

use std::time::Instant;

use simon::color::{LIT, NUM_LIGHTS};
use simon::{Config, Game, ScoreDisplay, SequenceGenerator, Signal, SignalSink, TurnPhase};

use crate::controller::{Controller, Frame};
use crate::input::Command;

/// The four pads and the buzzer as the game left them.
#[derive(Debug, Default)]
pub struct Panel {
    lit: [bool; NUM_LIGHTS],
    // Only one buzzer, the latest activation owns it
    tone: Option<Signal>,
}

impl SignalSink for Panel {
    fn activate(&mut self, signal: Signal) {
        self.lit[signal.index()] = true;
        self.tone = Some(signal);
    }

    fn deactivate(&mut self, signal: Signal) {
        self.lit[signal.index()] = false;
        if self.tone == Some(signal) {
            self.tone = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct ScoreBoard {
    score: u32,
    game_over: bool,
}

impl ScoreDisplay for ScoreBoard {
    fn show_score(&mut self, score: u32) {
        self.score = score;
        self.game_over = false;
        log::info!("Score: {}", score);
    }

    fn game_over(&mut self, score: u32) {
        self.game_over = true;
        log::info!("Game over, final score {}", score);
    }
}

pub struct GameController {
    game: Game<Panel, ScoreBoard>,
    clock: Instant,
    started: bool,
}

impl GameController {
    pub fn new(config: &Config) -> Self {
        let generator = match config.seed {
            Some(seed) => SequenceGenerator::from_seed(seed),
            None => SequenceGenerator::from_time(),
        };

        GameController {
            game: Game::new(Panel::default(), ScoreBoard::default(), config.timings(), config.policy, generator),
            clock: Instant::now(),
            started: false,
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    fn frame(&self) -> Frame {
        let panel = self.game.sink();
        let board = self.game.display();

        let colors = Signal::ALL.map(|signal| {
            if panel.lit[signal.index()] {
                signal.color().lighten(LIT)
            } else {
                signal.color()
            }
        });

        let status = if board.game_over {
            format!("Score: {} - game over, 's' to play again", board.score)
        } else if self.game.phase() == TurnPhase::AwaitingInput {
            format!("Score: {} - your turn", board.score)
        } else {
            format!("Score: {}", board.score)
        };

        Frame {
            colors,
            tone: panel.tone.map(Signal::tone),
            status,
        }
    }
}

impl Controller for GameController {
    fn is_active(&self) -> bool {
        self.started
    }

    fn tick(&mut self) -> Frame {
        let now = self.elapsed_ms();
        self.game.tick(now);
        self.frame()
    }

    fn input(&mut self, command: Command) {
        match command {
            Command::Start => {
                // Bring the game clock up to date before anything new is scheduled
                let now = self.elapsed_ms();
                self.game.tick(now);

                self.started = true;
                self.game.start_game();
            }
            Command::Press(signal) if self.started => {
                let now = self.elapsed_ms();
                self.game.tick(now);
                self.game.submit(signal);
            }
            Command::Press(_) | Command::Quit => {}
        }
    }
}

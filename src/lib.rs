//! Simon memory game: the machine plays a growing sequence of four pads and
//! the operator has to repeat it.

pub mod color;
pub mod config;
pub mod game;
pub mod sequence;
pub mod signal;
pub mod sink;
pub mod timeline;

pub use color::{Color, NUM_LIGHTS, OFF};
pub use config::Config;
pub use game::{Game, Session, Timings, TurnPhase, ValidationPolicy};
pub use sequence::{Sequence, SequenceGenerator};
pub use signal::Signal;
pub use sink::{ScoreDisplay, SignalSink};
pub use timeline::{TaskHandle, Timeline};

use simon::color::{Color, NUM_LIGHTS};

use crate::input::Command;

pub mod blank;
pub mod game;

/// Everything the lights task needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub colors: [Color; NUM_LIGHTS],
    /// Buzzer frequency in Hz, `None` when silent
    pub tone: Option<f32>,
    pub status: String,
}

pub trait Controller {
    fn is_active(&self) -> bool;

    fn tick(&mut self) -> Frame;

    fn input(&mut self, _command: Command) {}
}

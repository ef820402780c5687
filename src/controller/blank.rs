use simon::color::OFF;

use crate::controller::{Controller, Frame};

/// Dark panel shown until the first game starts.
pub struct BlankController;

impl BlankController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller for BlankController {
    fn is_active(&self) -> bool {
        true
    }

    fn tick(&mut self) -> Frame {
        Frame {
            colors: OFF,
            tone: None,
            status: "Simon - type 's' and Enter to start".to_string(),
        }
    }
}

use anyhow::Result;
use std::io::{self, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use simon::Color;

use crate::controller::Frame;

pub fn start(mut rx: mpsc::Receiver<Frame>) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        log::info!("Starting Lights");

        let stdout = io::stdout();
        let mut last: Option<Frame> = None;

        log::trace!("Entering main loop");

        while let Some(frame) = rx.blocking_recv() {
            // Frames arrive every tick, only redraw on change
            if last.as_ref() == Some(&frame) {
                continue;
            }

            log::trace!("Received frame {:?}", frame);

            let mut out = stdout.lock();
            match out.write_all(render(&frame).as_bytes()).and_then(|_| out.flush()) {
                Ok(()) => log::trace!("Drew frame"),
                Err(e) => {
                    log::error!("Failed to draw frame: {}", e);
                    return Err(e.into());
                }
            }

            last = Some(frame);
        }

        log::info!("Lights stopping");

        Ok(())
    })
}

fn pad(color: &Color) -> String {
    format!("\x1b[48;2;{};{};{}m      \x1b[0m", color.r, color.g, color.b)
}

pub fn render(frame: &Frame) -> String {
    let pads: Vec<String> = frame.colors.iter().map(pad).collect();
    let tone = match frame.tone {
        Some(hz) => format!("♪ {:>4} Hz", hz),
        None => "          ".to_string(),
    };

    format!("\r{} {} {}\x1b[K\n", pads.join(" "), tone, frame.status)
}

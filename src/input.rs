use anyhow::{anyhow, Result};
use std::convert::TryFrom;
use std::io::{self, BufRead};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use simon::Signal;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Press(Signal),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim().to_ascii_lowercase();

        match line.as_str() {
            "s" | "start" => Ok(Command::Start),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "r" | "red" => Ok(Command::Press(Signal::Red)),
            "g" | "green" => Ok(Command::Press(Signal::Green)),
            "b" | "blue" => Ok(Command::Press(Signal::Blue)),
            "y" | "yellow" => Ok(Command::Press(Signal::Yellow)),
            other => {
                // Pads are numbered 1-4 on the keyboard
                let key: u8 = other.parse().map_err(|_| anyhow!("Unknown command {:?}", other))?;
                let id = key.checked_sub(1).ok_or_else(|| anyhow!("Pads are numbered 1 to 4, got {}", key))?;
                Ok(Command::Press(Signal::try_from(id)?))
            }
        }
    }
}

/// Reads commands from stdin until EOF or quit.
pub fn start(tx: mpsc::Sender<Command>) -> JoinHandle<Result<()>> {
    tokio::task::spawn_blocking(move || {
        log::info!("Reading commands from stdin");

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    log::trace!("Parsed {:?}", command);

                    if tx.blocking_send(command).is_err() || command == Command::Quit {
                        break;
                    }
                }
                Err(e) => log::warn!("Ignoring input: {}", e),
            }
        }

        log::info!("Input stopping");

        Ok(())
    })
}

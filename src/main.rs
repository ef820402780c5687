use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use simple_logger::SimpleLogger;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use simon::Config;

mod controller;
mod input;
mod lights;

use controller::blank::BlankController;
use controller::game::GameController;
use controller::Controller;
use input::Command;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    SimpleLogger::new()
        .with_level(config.level()?)
        .init()
        .map_err(|e| anyhow!("Failed to start logger: {}", e))?;

    let rt = Runtime::new().context("Failed to start tokio runtime")?;

    let _guard = rt.enter();

    let (lights_tx, lights_rx) = mpsc::channel(50);
    let lights = lights::start(lights_rx);

    let (input_tx, mut input_rx) = mpsc::channel(16);
    // Blocked on stdin until the process exits, never joined
    let _input = input::start(input_tx);

    let mut controllers: Vec<(&str, Box<dyn Controller>)> = Vec::new();

    // Added in priority order
    controllers.push(("Game", setup_game(&config)));
    controllers.push(("Blank", setup_blank()));

    let frame_duration = Duration::from_secs(1) / config.fps;

    let report_period = Duration::from_secs(5);
    let mut report_start = Instant::now();
    let mut report_sum = 0;
    let mut report_n = 0;

    let mut active_index: Option<usize> = None;

    'frames: loop {
        let frame_start = Instant::now();

        loop {
            match input_rx.try_recv() {
                Ok(Command::Quit) => break 'frames,
                Ok(command) => {
                    for (_, controller) in controllers.iter_mut() {
                        controller.input(command);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::info!("Input closed");
                    break 'frames;
                }
            }
        }

        // Iterate in priority order
        for (index, (name, controller)) in controllers.iter_mut().enumerate() {
            if controller.is_active() {
                if active_index.replace(index).map_or(true, |i| index != i) {
                    log::info!("Controller {} just took over", name);
                }

                let frame = controller.tick();

                lights_tx.blocking_send(frame).context("Lights task stopped")?;

                break;
            }
        }

        let frame_elapsed = frame_start.elapsed();
        report_sum += frame_elapsed.as_millis();
        report_n += 1;

        if report_start.elapsed() > report_period {
            log::debug!("Display stats [num frames in report: {}, avg frame time in ms: {:.3}]", report_n, report_sum as f64 / report_n as f64);
            report_start = Instant::now();
            report_sum = 0;
            report_n = 0;
        }

        if frame_elapsed < frame_duration {
            // Sleep until the end of the frame
            std::thread::sleep(frame_duration - frame_elapsed);
        }
    }

    drop(lights_tx);
    rt.block_on(lights).context("Lights task panicked")??;

    log::info!("Bye");

    // The input task is parked on a stdin read
    drop(_guard);
    rt.shutdown_background();

    Ok(())
}

fn setup_game(config: &Config) -> Box<dyn Controller> {
    Box::new(GameController::new(config))
}

fn setup_blank() -> Box<dyn Controller> {
    Box::new(BlankController::new())
}

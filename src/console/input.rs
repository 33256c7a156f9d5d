//! Stdin reader. A background thread forwards lines over a channel so the
//! schedule never blocks on the terminal.

use bevy::prelude::*;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Mutex;

use super::{parse_command, ConsoleCommandEvent};

#[derive(Resource)]
pub struct ConsoleInput {
    lines: Mutex<Receiver<String>>,
}

impl ConsoleInput {
    pub fn from_receiver(receiver: Receiver<String>) -> Self {
        Self {
            lines: Mutex::new(receiver),
        }
    }

    /// Spawns the stdin thread. End of input is treated as `quit`.
    pub fn spawn_stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    return;
                }
            }
            let _ = tx.send("quit".to_string());
        });
        Self::from_receiver(rx)
    }
}

pub fn read_console_input(
    input: Res<ConsoleInput>,
    mut command_writer: EventWriter<ConsoleCommandEvent>,
) {
    let Ok(lines) = input.lines.lock() else {
        warn!("[Console] Input channel poisoned; ignoring input.");
        return;
    };
    loop {
        match lines.try_recv() {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(command) => {
                        command_writer.send(ConsoleCommandEvent(command));
                    }
                    Err(msg) => println!("{}", msg),
                }
            }
            // The reader thread sends `quit` before hanging up.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
        }
    }
}

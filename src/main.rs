use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use chrono_harvester::config::ConfigPlugin;
use chrono_harvester::console::input::ConsoleInput;
use chrono_harvester::console::ConsolePlugin;
use chrono_harvester::GamePlugin;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        // Tuning must be in place before the ledger is built
        .add_plugins(ConfigPlugin::default())
        .add_plugins(GamePlugin)
        .add_plugins(ConsolePlugin)
        .insert_resource(ConsoleInput::spawn_stdin())
        .run();
}

//! Chrono Harvester library crate: re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the console entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can drive the session, economy and growth systems headlessly.

pub mod shared;
pub mod config;
pub mod session;
pub mod economy;
pub mod farming;
pub mod ui;
pub mod console;

use bevy::prelude::*;

/// Every gameplay domain. Needs `StatesPlugin` and a time source; add
/// `config::ConfigPlugin` first to load tuning from disk.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            shared::SharedPlugin,
            session::SessionPlugin,
            economy::EconomyPlugin,
            farming::FarmingPlugin,
            ui::UiPlugin,
        ));
    }
}

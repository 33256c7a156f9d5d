//! Loading-screen timeout. Fires `SessionEvent::AssetsReady` once.

use bevy::prelude::*;
use crate::shared::*;

/// Present only while in `GameMode::Loading`.
#[derive(Resource, Debug, Clone)]
pub struct LoadingTimer(pub Timer);

pub fn start_loading_timer(mut commands: Commands, tuning: Res<GameTuning>) {
    let secs = tuning.loading_secs.max(0.0);
    commands.insert_resource(LoadingTimer(Timer::from_seconds(secs, TimerMode::Once)));
    info!("[Session] Loading time streams ({:.1}s)…", secs);
}

pub fn tick_loading_timer(
    time: Res<Time>,
    mut timer: ResMut<LoadingTimer>,
    mut session_writer: EventWriter<SessionEvent>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        session_writer.send(SessionEvent::AssetsReady);
    }
}

/// Leaving the loading screen abandons the timer.
pub fn cancel_loading_timer(mut commands: Commands) {
    commands.remove_resource::<LoadingTimer>();
}

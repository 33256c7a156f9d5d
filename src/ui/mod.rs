//! UI-state domain: timed notices and the screen models front ends draw from.
//!
//! Nothing here draws. Front ends read `ActiveNotices` and the screen models
//! and render them however they like.

pub mod notices;
pub mod screens;

use bevy::prelude::*;
use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<notices::ActiveNotices>();

        // ─── CONTROLS REMINDER: shown on every arrival in an era ───
        app.add_systems(OnEnter(GameMode::Game), notices::post_controls_reminder);

        // ─── NOTICES: post, cancel on mode exit, expire ───
        app.add_systems(
            Update,
            (
                notices::collect_notices,
                notices::clear_notices_on_mode_change,
                notices::expire_notices,
            )
                .chain(),
        );
    }
}

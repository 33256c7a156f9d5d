//! Economy domain: ledger arithmetic and hub crop processing, plus energy tracking.
//!
//! All cross-domain communication goes through `crate::shared::*` events and resources.
//! No other domain module is imported here.

use bevy::prelude::*;
use crate::shared::*;

pub mod ledger;
pub mod energy;
pub mod liquidation;
pub mod stats;

use energy::{track_energy_flow, EconomyStats};
use liquidation::{handle_liquidation_requests, update_liquidation_preview, LiquidationPreview};
use stats::{track_trips, track_zone_activity, SessionStats};

// ─────────────────────────────────────────────────────────────────────────────
// Plugin
// ─────────────────────────────────────────────────────────────────────────────

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        // ── Resources ──────────────────────────────────────────────────────
        app.init_resource::<EconomyStats>()
            .init_resource::<LiquidationPreview>()
            .init_resource::<SessionStats>();

        // ── Systems: Hub ───────────────────────────────────────────────────
        app.add_systems(
            Update,
            handle_liquidation_requests.run_if(in_state(GameMode::Hub)),
        );

        // ── Systems: any mode ──────────────────────────────────────────────
        app.add_systems(
            Update,
            (
                // Preview is read by the hub screen; keep it fresh after every mutation.
                update_liquidation_preview.after(handle_liquidation_requests),
                track_energy_flow,
                track_zone_activity,
                track_trips,
            ),
        );

        info!("[Economy] EconomyPlugin registered.");
    }
}

//! SessionStats tracker: passive event listeners that increment play counters.
//!
//! No game logic is changed here; this module is purely observational.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::*;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub seeds_planted: u32,
    pub crops_harvested: EraCounts,
    pub trips: EraCounts,
}

/// Increments planting and harvest counters.
pub fn track_zone_activity(
    mut planted: EventReader<SeedPlantedEvent>,
    mut harvested: EventReader<CropHarvestedEvent>,
    mut stats: ResMut<SessionStats>,
) {
    for _ev in planted.read() {
        stats.seeds_planted = stats.seeds_planted.saturating_add(1);
    }
    for ev in harvested.read() {
        let count = stats.crops_harvested.get_mut(ev.era);
        *count = count.saturating_add(1);
    }
}

/// Counts trips: every entry into an era scene.
pub fn track_trips(
    mut mode_events: EventReader<ModeChangedEvent>,
    selected: Res<SelectedEra>,
    mut stats: ResMut<SessionStats>,
) {
    for ev in mode_events.read() {
        if ev.to != GameMode::Game {
            continue;
        }
        if let Some(era) = selected.0 {
            let trips = stats.trips.get_mut(era);
            *trips = trips.saturating_add(1);
        }
    }
}

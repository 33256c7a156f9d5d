//! Farming domain: planting zones and their growth timers.
//!
//! Communicates with other domains exclusively through crate::shared events/resources.

use bevy::prelude::*;
use crate::shared::*;

pub mod zone;
pub mod scene;
pub mod growth;

pub use scene::in_interaction_range;

pub struct FarmingPlugin;

impl Plugin for FarmingPlugin {
    fn build(&self, app: &mut App) {
        app
            // ------------------------------------------------------------------
            // Scene population: zones exist only inside an era scene
            // ------------------------------------------------------------------
            .add_systems(OnEnter(GameMode::Game), scene::spawn_era_zones)
            .add_systems(OnExit(GameMode::Game), scene::despawn_era_zones)
            // ------------------------------------------------------------------
            // Systems that run during Game
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                (growth::handle_zone_interact, growth::tick_zone_growth)
                    .chain()
                    .run_if(in_state(GameMode::Game)),
            );
    }
}

/// Zones of the current scene in list order, as `(entity, zone, label)`.
pub fn sorted_zones<'a>(
    zones: impl Iterator<Item = (Entity, &'a PlantingZone, &'a ZoneLabel)>,
) -> Vec<(Entity, &'a PlantingZone, &'a ZoneLabel)> {
    let mut list: Vec<_> = zones.collect();
    list.sort_by_key(|(_, _, label)| label.index);
    list
}

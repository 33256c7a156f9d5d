//! Scene population: planting zones live only as long as the era scene.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Random zone positions inside the square field, at planting height.
pub fn scatter_zone_positions<R: Rng>(count: usize, rng: &mut R) -> Vec<Vec3> {
    let half = ZONE_FIELD_SIZE / 2.0;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                ZONE_HEIGHT,
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Whether a player standing at `player` may interact with a zone at `zone`.
pub fn in_interaction_range(player: Vec3, zone: Vec3) -> bool {
    player.distance(zone) < INTERACTION_RANGE
}

/// Spawns the selected era's zones when a game scene starts.
pub fn spawn_era_zones(
    mut commands: Commands,
    selected: Res<SelectedEra>,
    tuning: Res<GameTuning>,
) {
    let Some(era) = selected.0 else {
        warn!("[Farming] Entered a game scene with no era selected; no zones spawned.");
        return;
    };

    let mut rng = rand::thread_rng();
    let positions = scatter_zone_positions(tuning.zones_per_era, &mut rng);
    for (index, position) in positions.into_iter().enumerate() {
        commands.spawn((
            PlantingZone::with_tuning(era, &tuning),
            ZoneLabel { index, position },
        ));
    }

    info!(
        "[Farming] Spawned {} planting zones in the {}.",
        tuning.zones_per_era,
        era.display_name()
    );
}

/// Zones are not persisted: leaving the scene discards them with their crops.
pub fn despawn_era_zones(mut commands: Commands, zones: Query<Entity, With<PlantingZone>>) {
    let mut count = 0;
    for entity in &zones {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("[Farming] Despawned {} planting zones.", count);
}

//! Per-frame growth and interact handling for planting zones.

use bevy::prelude::*;
use crate::shared::*;

/// Advances every zone by the frame delta.
pub fn tick_zone_growth(time: Res<Time>, mut zones: Query<(&mut PlantingZone, Option<&ZoneLabel>)>) {
    let delta = time.delta_secs();
    if delta <= 0.0 {
        return;
    }
    for (mut zone, label) in &mut zones {
        if zone.tick(delta) {
            debug!(
                "[Farming] Zone {} reached stage {} ({})",
                label.map(|l| l.index).unwrap_or_default(),
                zone.growth_stage,
                zone.display_state().stage_name()
            );
        }
    }
}

/// Resolves interact requests against the targeted zone.
pub fn handle_zone_interact(
    mut interact_events: EventReader<ZoneInteractEvent>,
    mut zones: Query<&mut PlantingZone>,
    mut ledger: ResMut<Ledger>,
    mut planted_writer: EventWriter<SeedPlantedEvent>,
    mut harvested_writer: EventWriter<CropHarvestedEvent>,
    mut refused_writer: EventWriter<PlantRefusedEvent>,
) {
    for ev in interact_events.read() {
        let Ok(mut zone) = zones.get_mut(ev.zone) else {
            warn!("[Farming] Interact target {:?} is not a planting zone.", ev.zone);
            continue;
        };
        let era = zone.era;

        match zone.interact(&mut ledger) {
            InteractOutcome::Planted => {
                planted_writer.send(SeedPlantedEvent { zone: ev.zone, era });
                info!(
                    "[Farming] Planted a {} seed. {} left.",
                    era.id(),
                    ledger.seeds(era)
                );
            }
            InteractOutcome::Harvested => {
                harvested_writer.send(CropHarvestedEvent { zone: ev.zone, era });
                info!(
                    "[Farming] Harvested a {} crop. Holding {}.",
                    era.id(),
                    ledger.crops(era)
                );
            }
            InteractOutcome::NoSeeds => {
                refused_writer.send(PlantRefusedEvent { zone: ev.zone, era });
                info!("[Farming] No {} seeds left to plant.", era.id());
            }
            InteractOutcome::StillGrowing => {}
        }
    }
}

use bevy::prelude::*;
use crate::shared::*;

/// Running totals of energy flow for the session.
#[derive(Resource, Debug, Clone, Default)]
pub struct EconomyStats {
    pub total_energy_earned: u64,
    pub total_energy_spent: u64,
    pub total_crops_liquidated: u64,
    pub total_liquidations: u64,
}

/// Folds liquidation and travel spending into `EconomyStats`.
pub fn track_energy_flow(
    mut liquidated: EventReader<CropsLiquidatedEvent>,
    mut spent: EventReader<EnergySpentEvent>,
    mut stats: ResMut<EconomyStats>,
) {
    for ev in liquidated.read() {
        stats.total_energy_earned = stats.total_energy_earned.saturating_add(ev.energy_gained as u64);
        stats.total_crops_liquidated = stats.total_crops_liquidated.saturating_add(ev.crops as u64);
        stats.total_liquidations += 1;
    }
    for ev in spent.read() {
        stats.total_energy_spent = stats.total_energy_spent.saturating_add(ev.amount as u64);
        info!(
            "[Economy] Spent {} energy travelling to the {}.",
            ev.amount,
            ev.era.display_name()
        );
    }
}

/// Energy as shown to the player, grouped by thousands: `1,234 TE`.
pub fn format_energy(amount: u32) -> String {
    let mut groups = Vec::new();
    let mut rest = amount;
    loop {
        groups.push(rest % 1000);
        rest /= 1000;
        if rest == 0 {
            break;
        }
    }
    // Highest group first; only the inner groups are zero-padded.
    let mut groups = groups.into_iter().rev();
    let mut text = groups.next().unwrap_or(0).to_string();
    for group in groups {
        text.push_str(&format!(",{:03}", group));
    }
    format!("{} TE", text)
}

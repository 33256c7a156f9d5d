use bevy::prelude::*;
use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Handles "Process Crops" in the hub: converts every held crop into energy,
/// reports the result and posts the timed result notice.
pub fn handle_liquidation_requests(
    mut requests: EventReader<LiquidateCropsRequest>,
    mut ledger: ResMut<Ledger>,
    tuning: Res<GameTuning>,
    mut liquidated_writer: EventWriter<CropsLiquidatedEvent>,
    mut notice_writer: EventWriter<NoticeEvent>,
) {
    for _ev in requests.read() {
        let crops = ledger.total_crops();
        let gained = ledger.liquidate_crops();

        if gained == 0 {
            info!("[Economy] Nothing to process: no crops held.");
            continue;
        }

        liquidated_writer.send(CropsLiquidatedEvent {
            crops,
            energy_gained: gained,
        });

        notice_writer.send(NoticeEvent {
            kind: NoticeKind::EnergyGained,
            message: format!("Gained {} Temporal Energy!", gained),
            duration_secs: tuning.sell_result_secs,
            scope: GameMode::Hub,
        });

        info!(
            "[Economy] Processed {} crops for {} energy. New balance: {}",
            crops,
            gained,
            ledger.temporal_energy()
        );
    }
}

/// What the hub screen shows next to the "Process Crops" button.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct LiquidationPreview {
    pub total_crops: u32,
    pub potential_energy: u32,
}

impl LiquidationPreview {
    /// The button is disabled when there is nothing to process.
    pub fn can_process(&self) -> bool {
        self.total_crops > 0
    }
}

pub fn update_liquidation_preview(
    ledger: Res<Ledger>,
    mut preview: ResMut<LiquidationPreview>,
) {
    if ledger.is_changed() {
        preview.total_crops = ledger.total_crops();
        preview.potential_energy = ledger.potential_energy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_default_cannot_process() {
        let preview = LiquidationPreview::default();
        assert!(!preview.can_process());
        assert_eq!(preview.potential_energy, 0);
    }
}

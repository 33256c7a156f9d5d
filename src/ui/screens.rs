//! Screen models: what each mode shows, independent of how it is drawn.

use serde::{Deserialize, Serialize};
use crate::shared::*;

/// One card on the era-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraChoice {
    pub era: Era,
    pub cost: u32,
    /// The "Travel to Era" button is disabled when false.
    pub affordable: bool,
}

pub fn era_choices(ledger: &Ledger, tuning: &GameTuning) -> Vec<EraChoice> {
    Era::ALL
        .into_iter()
        .map(|era| {
            let cost = tuning.era_travel_cost.cost(era);
            EraChoice {
                era,
                cost,
                affordable: ledger.can_afford(cost),
            }
        })
        .collect()
}

/// Serializable view of the whole session, for status output and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub selected_era: Option<Era>,
    pub inventory: Inventory,
    pub temporal_energy: u32,
    pub potential_energy: u32,
    pub zones: Vec<ZoneDisplayState>,
}

impl SessionSnapshot {
    pub fn capture(session: SessionState, ledger: &Ledger, zones: Vec<ZoneDisplayState>) -> Self {
        Self {
            mode: session.mode,
            selected_era: session.selected_era,
            inventory: *ledger.inventory(),
            temporal_energy: ledger.temporal_energy(),
            potential_energy: ledger.potential_energy(),
            zones,
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Serialization failed: {}", e))
    }
}

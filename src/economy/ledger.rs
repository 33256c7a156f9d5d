//! Ledger arithmetic: seeds, crops and temporal energy.
//!
//! All counts are unsigned, so no operation can drive a balance negative.
//! Operations that cannot apply return `false`/`0` and leave the ledger untouched.

use bevy::prelude::*;
use crate::shared::*;

impl Ledger {
    /// Starting ledger for a new session.
    pub fn new(tuning: &GameTuning) -> Self {
        Self {
            inventory: Inventory {
                seeds: EraCounts::splat(tuning.starting_seeds_per_era),
                crops: EraCounts::default(),
            },
            energy: tuning.starting_energy,
            crop_value: tuning.crop_to_energy_rate,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn temporal_energy(&self) -> u32 {
        self.energy
    }

    pub fn seeds(&self, era: Era) -> u32 {
        self.inventory.seeds.get(era)
    }

    pub fn crops(&self, era: Era) -> u32 {
        self.inventory.crops.get(era)
    }

    pub fn total_crops(&self) -> u32 {
        self.inventory.crops.total()
    }

    /// Energy that `liquidate_crops` would yield right now.
    pub fn potential_energy(&self) -> u32 {
        self.total_crops().saturating_mul(self.crop_value)
    }

    pub fn can_afford(&self, amount: u32) -> bool {
        self.energy >= amount
    }

    /// Consume one seed of `era`. Returns false when none are left.
    pub fn use_seed(&mut self, era: Era) -> bool {
        let seeds = self.inventory.seeds.get_mut(era);
        if *seeds == 0 {
            return false;
        }
        *seeds -= 1;
        true
    }

    pub fn add_crop(&mut self, era: Era) {
        let crops = self.inventory.crops.get_mut(era);
        *crops = crops.saturating_add(1);
    }

    /// Convert every held crop into energy. Returns the energy gained.
    pub fn liquidate_crops(&mut self) -> u32 {
        let gained = self.potential_energy();
        if self.total_crops() == 0 {
            return 0;
        }
        // Both halves happen here with no early return in between.
        self.energy = self.energy.saturating_add(gained);
        self.inventory.crops = EraCounts::default();
        gained
    }

    /// Spend `amount` if the balance covers it.
    pub fn spend_energy(&mut self, amount: u32) -> bool {
        if !self.can_afford(amount) {
            return false;
        }
        self.energy -= amount;
        true
    }
}

impl FromWorld for Ledger {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<GameTuning>() {
            Some(tuning) => Ledger::new(tuning),
            None => Ledger::new(&GameTuning::default()),
        }
    }
}

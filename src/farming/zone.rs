//! Planting-zone growth timer and plant/harvest rules.

use crate::shared::*;

impl PlantingZone {
    /// Unplanted zone with the default growth constants.
    pub fn new(era: Era) -> Self {
        Self::with_tuning(era, &GameTuning::default())
    }

    pub fn with_tuning(era: Era, tuning: &GameTuning) -> Self {
        Self {
            era,
            planted: false,
            growth_stage: 0,
            growth_progress: 0.0,
            growth_rate: tuning.growth_rate_per_second,
            max_stage: tuning.max_stage(),
        }
    }

    pub fn is_mature(&self) -> bool {
        self.planted && self.growth_stage >= self.max_stage
    }

    /// Advance growth by `delta_secs` of elapsed time.
    /// Returns true if the zone moved to a new stage during this tick.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if !self.planted || self.growth_stage >= self.max_stage {
            return false;
        }
        self.growth_progress += delta_secs.max(0.0) * self.growth_rate;
        if self.growth_progress >= 1.0 {
            // Overflow past 1.0 is dropped, not carried into the next stage.
            self.growth_stage += 1;
            self.growth_progress = 0.0;
            return true;
        }
        false
    }

    /// Plant a seed of this zone's era, drawing it from the ledger.
    pub fn plant(&mut self, ledger: &mut Ledger) -> bool {
        if self.planted {
            return false;
        }
        if !ledger.use_seed(self.era) {
            return false;
        }
        self.planted = true;
        self.growth_stage = 0;
        self.growth_progress = 0.0;
        true
    }

    /// Harvest a mature crop into the ledger and clear the zone.
    pub fn harvest(&mut self, ledger: &mut Ledger) -> bool {
        if !self.is_mature() {
            return false;
        }
        ledger.add_crop(self.era);
        self.planted = false;
        self.growth_stage = 0;
        self.growth_progress = 0.0;
        true
    }

    /// The single interact action: plant when empty, harvest when mature.
    pub fn interact(&mut self, ledger: &mut Ledger) -> InteractOutcome {
        if !self.planted {
            if self.plant(ledger) {
                InteractOutcome::Planted
            } else {
                InteractOutcome::NoSeeds
            }
        } else if self.harvest(ledger) {
            InteractOutcome::Harvested
        } else {
            InteractOutcome::StillGrowing
        }
    }

    pub fn display_state(&self) -> ZoneDisplayState {
        ZoneDisplayState {
            planted: self.planted,
            growth_stage: self.growth_stage,
            growth_progress: self.growth_progress,
            mature: self.is_mature(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planted_zone(era: Era) -> (PlantingZone, Ledger) {
        let mut ledger = Ledger::new(&GameTuning::default());
        let mut zone = PlantingZone::new(era);
        assert!(zone.plant(&mut ledger));
        (zone, ledger)
    }

    #[test]
    fn test_ten_second_tick_advances_exactly_one_stage() {
        let (mut zone, _) = planted_zone(Era::Prehistoric);
        assert!(zone.tick(10.0));
        assert_eq!(zone.growth_stage, 1);
        assert_eq!(zone.growth_progress, 0.0);
    }

    #[test]
    fn test_large_tick_discards_overflow() {
        let (mut zone, _) = planted_zone(Era::Prehistoric);
        // 25 seconds is 2.5 stages of progress, but only one stage is granted.
        zone.tick(25.0);
        assert_eq!(zone.growth_stage, 1);
        assert_eq!(zone.growth_progress, 0.0);
    }

    #[test]
    fn test_partial_progress_accumulates() {
        let (mut zone, _) = planted_zone(Era::Future);
        assert!(!zone.tick(4.0));
        assert!((zone.growth_progress - 0.4).abs() < 1e-5);
        assert_eq!(zone.growth_stage, 0);
    }

    #[test]
    fn test_unplanted_zone_does_not_grow() {
        let mut zone = PlantingZone::new(Era::Medieval);
        assert!(!zone.tick(100.0));
        assert_eq!(zone.growth_stage, 0);
        assert_eq!(zone.growth_progress, 0.0);
    }

    #[test]
    fn test_mature_zone_is_frozen() {
        let (mut zone, _) = planted_zone(Era::Medieval);
        for _ in 0..3 {
            zone.tick(10.0);
        }
        assert_eq!(zone.growth_stage, 3);
        for _ in 0..1000 {
            assert!(!zone.tick(1.0));
        }
        assert_eq!(zone.growth_stage, 3);
        assert!(zone.is_mature());
    }

    #[test]
    fn test_plant_consumes_seed() {
        let (zone, ledger) = planted_zone(Era::Medieval);
        assert!(zone.planted);
        assert_eq!(ledger.seeds(Era::Medieval), 4);
    }

    #[test]
    fn test_plant_without_seeds_leaves_zone_unplanted() {
        let tuning = GameTuning {
            starting_seeds_per_era: 0,
            ..GameTuning::default()
        };
        let mut ledger = Ledger::new(&tuning);
        let mut zone = PlantingZone::with_tuning(Era::Future, &tuning);
        assert!(!zone.plant(&mut ledger));
        assert!(!zone.planted);
        assert_eq!(zone.interact(&mut ledger), InteractOutcome::NoSeeds);
    }

    #[test]
    fn test_plant_on_planted_zone_is_refused() {
        let (mut zone, mut ledger) = planted_zone(Era::Prehistoric);
        assert!(!zone.plant(&mut ledger));
        assert_eq!(ledger.seeds(Era::Prehistoric), 4, "no second seed consumed");
    }

    #[test]
    fn test_harvest_immature_is_refused() {
        let (mut zone, mut ledger) = planted_zone(Era::Future);
        zone.tick(10.0);
        zone.tick(10.0);
        assert_eq!(zone.growth_stage, 2);
        assert!(!zone.harvest(&mut ledger));
        assert_eq!(ledger.crops(Era::Future), 0);
        assert!(zone.planted);
    }

    #[test]
    fn test_harvest_mature_adds_crop_and_resets() {
        let (mut zone, mut ledger) = planted_zone(Era::Future);
        for _ in 0..3 {
            zone.tick(10.0);
        }
        assert_eq!(zone.interact(&mut ledger), InteractOutcome::Harvested);
        assert_eq!(ledger.crops(Era::Future), 1);
        assert!(!zone.planted);
        assert_eq!(zone.growth_stage, 0);
    }

    #[test]
    fn test_interact_while_growing() {
        let (mut zone, mut ledger) = planted_zone(Era::Medieval);
        zone.tick(3.0);
        assert_eq!(zone.interact(&mut ledger), InteractOutcome::StillGrowing);
        assert!(zone.display_state().interaction_hint().is_none());
    }

    #[test]
    fn test_custom_stage_count() {
        let tuning = GameTuning {
            stage_count: 2,
            growth_rate_per_second: 0.5,
            ..GameTuning::default()
        };
        let mut ledger = Ledger::new(&tuning);
        let mut zone = PlantingZone::with_tuning(Era::Prehistoric, &tuning);
        assert!(zone.plant(&mut ledger));
        zone.tick(2.0);
        assert!(zone.is_mature());
        assert_eq!(
            zone.display_state().interaction_hint(),
            Some("Press E to Harvest")
        );
    }
}

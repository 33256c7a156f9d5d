//! Shared components, resources, events, and states for Chrono Harvester.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME MODE: top-level screen state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Loading,
    Menu,
    EraSelection,
    Game,
    Hub,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Loading => "loading",
            GameMode::Menu => "menu",
            GameMode::EraSelection => "era-selection",
            GameMode::Game => "game",
            GameMode::Hub => "hub",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ERAS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Prehistoric,
    Medieval,
    Future,
}

impl Era {
    pub const ALL: [Era; 3] = [Era::Prehistoric, Era::Medieval, Era::Future];

    pub fn id(self) -> &'static str {
        match self {
            Era::Prehistoric => "prehistoric",
            Era::Medieval => "medieval",
            Era::Future => "future",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Era::Prehistoric => "Prehistoric Era",
            Era::Medieval => "Medieval Era",
            Era::Future => "Future Era",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Era::Prehistoric => "Ancient lands with primitive plants. Slower growth, higher yield.",
            Era::Medieval => "Feudal farmlands with balanced crops. Medium growth and yield.",
            Era::Future => "Advanced biomes with high-tech crops. Faster growth, lower yield.",
        }
    }

    /// Parses an era id, ignoring case.
    pub fn from_id(id: &str) -> Option<Era> {
        Era::ALL
            .into_iter()
            .find(|era| era.id().eq_ignore_ascii_case(id.trim()))
    }
}

/// One non-negative counter per era. The key set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EraCounts {
    pub prehistoric: u32,
    pub medieval: u32,
    pub future: u32,
}

impl EraCounts {
    pub fn splat(value: u32) -> Self {
        Self {
            prehistoric: value,
            medieval: value,
            future: value,
        }
    }

    pub fn get(&self, era: Era) -> u32 {
        match era {
            Era::Prehistoric => self.prehistoric,
            Era::Medieval => self.medieval,
            Era::Future => self.future,
        }
    }

    pub fn get_mut(&mut self, era: Era) -> &mut u32 {
        match era {
            Era::Prehistoric => &mut self.prehistoric,
            Era::Medieval => &mut self.medieval,
            Era::Future => &mut self.future,
        }
    }

    /// Sum across eras, saturating.
    pub fn total(&self) -> u32 {
        Era::ALL
            .iter()
            .fold(0u32, |acc, era| acc.saturating_add(self.get(*era)))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SESSION
// ═══════════════════════════════════════════════════════════════════════

/// The screen the player is on plus the era they travelled to.
/// `selected_era` is `None` until the first era is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub mode: GameMode,
    pub selected_era: Option<Era>,
}

/// Inputs to the session state machine.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    AssetsReady,
    Start,
    ChooseEra(Era),
    ReturnToHub,
    ReturnToEraSelection,
}

/// Era bound to the current game scene. Only meaningful in `GameMode::Game`.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectedEra(pub Option<Era>);

// ═══════════════════════════════════════════════════════════════════════
// INVENTORY & LEDGER
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub seeds: EraCounts,
    pub crops: EraCounts,
}

/// Seeds, crops and temporal energy for the whole session.
/// Every mutation goes through the methods in `economy::ledger`.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub(crate) inventory: Inventory,
    pub(crate) energy: u32,
    pub(crate) crop_value: u32,
}

// ═══════════════════════════════════════════════════════════════════════
// PLANTING ZONES
// ═══════════════════════════════════════════════════════════════════════

pub const GROWTH_STAGES: [&str; 4] = ["seed", "sprout", "growing", "mature"];

/// Growth state of one plantable spot. Owned by exactly one zone entity.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantingZone {
    pub era: Era,
    pub planted: bool,
    pub growth_stage: u8,
    pub growth_progress: f32,
    pub growth_rate: f32,
    pub max_stage: u8,
}

/// Position and list index of a zone in its scene.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ZoneLabel {
    pub index: usize,
    pub position: Vec3,
}

/// What a renderer needs to draw a zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneDisplayState {
    pub planted: bool,
    pub growth_stage: u8,
    pub growth_progress: f32,
    pub mature: bool,
}

impl ZoneDisplayState {
    pub fn stage_name(&self) -> &'static str {
        if self.mature {
            return "mature";
        }
        GROWTH_STAGES
            .get(self.growth_stage as usize)
            .copied()
            .unwrap_or("mature")
    }

    /// Prompt shown when the player stands next to the zone.
    pub fn interaction_hint(&self) -> Option<&'static str> {
        if !self.planted {
            Some("Press E to Plant")
        } else if self.mature {
            Some("Press E to Harvest")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractOutcome {
    Planted,
    Harvested,
    NoSeeds,
    StillGrowing,
}

// ═══════════════════════════════════════════════════════════════════════
// TUNING
// ═══════════════════════════════════════════════════════════════════════

/// Per-era travel cost in temporal energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelCosts {
    pub prehistoric: u32,
    pub medieval: u32,
    pub future: u32,
}

impl TravelCosts {
    pub fn cost(&self, era: Era) -> u32 {
        match era {
            Era::Prehistoric => self.prehistoric,
            Era::Medieval => self.medieval,
            Era::Future => self.future,
        }
    }
}

impl Default for TravelCosts {
    fn default() -> Self {
        Self {
            prehistoric: 20,
            medieval: 30,
            future: 40,
        }
    }
}

/// Every balance constant of the game. Loaded by `config` at startup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub starting_seeds_per_era: u32,
    pub starting_energy: u32,
    pub crop_to_energy_rate: u32,
    pub growth_rate_per_second: f32,
    pub stage_count: u8,
    pub era_travel_cost: TravelCosts,
    /// When false, travel is gated by the cost but nothing is deducted.
    pub charge_travel_cost: bool,
    pub loading_secs: f32,
    pub controls_reminder_secs: f32,
    pub sell_result_secs: f32,
    pub zones_per_era: usize,
    pub interact_cooldown_ms: u64,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            starting_seeds_per_era: STARTING_SEEDS_PER_ERA,
            starting_energy: STARTING_ENERGY,
            crop_to_energy_rate: CROP_TO_ENERGY_RATE,
            growth_rate_per_second: GROWTH_RATE_PER_SECOND,
            stage_count: STAGE_COUNT,
            era_travel_cost: TravelCosts::default(),
            charge_travel_cost: false,
            loading_secs: LOADING_SECS,
            controls_reminder_secs: CONTROLS_REMINDER_SECS,
            sell_result_secs: SELL_RESULT_SECS,
            zones_per_era: ZONES_PER_ERA,
            interact_cooldown_ms: INTERACT_COOLDOWN_MS,
        }
    }
}

impl GameTuning {
    /// Highest growth stage index; reaching it means mature.
    pub fn max_stage(&self) -> u8 {
        self.stage_count.saturating_sub(1)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS: cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChangedEvent {
    pub from: GameMode,
    pub to: GameMode,
}

/// An era was chosen but the balance does not cover its travel cost.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelRefusedEvent {
    pub era: Era,
    pub cost: u32,
    pub balance: u32,
}

/// Temporal energy was spent on travel.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergySpentEvent {
    pub amount: u32,
    pub era: Era,
}

/// Player pressed interact on a zone.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneInteractEvent {
    pub zone: Entity,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlantedEvent {
    pub zone: Entity,
    pub era: Era,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropHarvestedEvent {
    pub zone: Entity,
    pub era: Era,
}

/// Interact on an unplanted zone with no seeds left for its era.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantRefusedEvent {
    pub zone: Entity,
    pub era: Era,
}

/// "Process Crops" pressed in the hub.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiquidateCropsRequest;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropsLiquidatedEvent {
    pub crops: u32,
    pub energy_gained: u32,
}

/// Short-lived message scoped to the mode it was posted in.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct NoticeEvent {
    pub kind: NoticeKind,
    pub message: String,
    pub duration_secs: f32,
    pub scope: GameMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    ControlsReminder,
    EnergyGained,
    TravelRefused,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const STARTING_SEEDS_PER_ERA: u32 = 5;
pub const STARTING_ENERGY: u32 = 100;
pub const CROP_TO_ENERGY_RATE: u32 = 10;
pub const GROWTH_RATE_PER_SECOND: f32 = 0.1;
pub const STAGE_COUNT: u8 = 4;

pub const LOADING_SECS: f32 = 3.0;
pub const CONTROLS_REMINDER_SECS: f32 = 5.0;
pub const SELL_RESULT_SECS: f32 = 3.0;

pub const ZONES_PER_ERA: usize = 10;
/// Zones are scattered inside a square of this side, centred on the origin.
pub const ZONE_FIELD_SIZE: f32 = 40.0;
pub const ZONE_HEIGHT: f32 = 0.05;
pub const INTERACTION_RANGE: f32 = 3.0;
pub const INTERACT_COOLDOWN_MS: u64 = 500;

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN: registers the shared contract
// ═══════════════════════════════════════════════════════════════════════

/// Registers the mode state, shared resources and shared events.
/// Domain plugins assume this has been added first.
pub struct SharedPlugin;

impl Plugin for SharedPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameMode>()
            .init_resource::<GameTuning>()
            .init_resource::<SelectedEra>()
            .init_resource::<Ledger>()
            .add_event::<SessionEvent>()
            .add_event::<ModeChangedEvent>()
            .add_event::<TravelRefusedEvent>()
            .add_event::<EnergySpentEvent>()
            .add_event::<ZoneInteractEvent>()
            .add_event::<SeedPlantedEvent>()
            .add_event::<CropHarvestedEvent>()
            .add_event::<PlantRefusedEvent>()
            .add_event::<LiquidateCropsRequest>()
            .add_event::<CropsLiquidatedEvent>()
            .add_event::<NoticeEvent>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_counts_total_and_get() {
        let mut counts = EraCounts::splat(2);
        *counts.get_mut(Era::Future) += 3;
        assert_eq!(counts.get(Era::Future), 5);
        assert_eq!(counts.total(), 9);
    }

    #[test]
    fn test_era_counts_total_saturates() {
        let counts = EraCounts {
            prehistoric: u32::MAX,
            medieval: 1,
            future: 0,
        };
        assert_eq!(counts.total(), u32::MAX);
    }

    #[test]
    fn test_era_from_id() {
        assert_eq!(Era::from_id("medieval"), Some(Era::Medieval));
        assert_eq!(Era::from_id(" FUTURE "), Some(Era::Future));
        assert_eq!(Era::from_id("present"), None);
    }

    #[test]
    fn test_default_tuning_matches_constants() {
        let tuning = GameTuning::default();
        assert_eq!(tuning.starting_seeds_per_era, 5);
        assert_eq!(tuning.starting_energy, 100);
        assert_eq!(tuning.crop_to_energy_rate, 10);
        assert_eq!(tuning.stage_count, 4);
        assert_eq!(tuning.max_stage(), 3);
        assert_eq!(tuning.era_travel_cost.cost(Era::Prehistoric), 20);
        assert_eq!(tuning.era_travel_cost.cost(Era::Medieval), 30);
        assert_eq!(tuning.era_travel_cost.cost(Era::Future), 40);
        assert!(!tuning.charge_travel_cost);
    }

    #[test]
    fn test_zone_display_hint() {
        let growing = ZoneDisplayState {
            planted: true,
            growth_stage: 1,
            growth_progress: 0.4,
            mature: false,
        };
        assert_eq!(growing.interaction_hint(), None);
        assert_eq!(growing.stage_name(), "sprout");

        let empty = ZoneDisplayState {
            planted: false,
            growth_stage: 0,
            growth_progress: 0.0,
            mature: false,
        };
        assert_eq!(empty.interaction_hint(), Some("Press E to Plant"));
    }
}

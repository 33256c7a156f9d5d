//! Session domain: the screen flow of Chrono Harvester.
//!
//! Responsible for:
//! - The pure transition function over `SessionState`
//! - Applying queued `SessionEvent`s to the Bevy `GameMode` state
//! - Gating (and optionally charging) era travel by its energy cost
//! - The loading-screen timeout that hands over to the menu
//!
//! Events that do not apply to the current mode are dropped silently, the
//! same way a disabled button does nothing.

pub mod loading;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use std::collections::VecDeque;

use crate::shared::*;
use loading::{cancel_loading_timer, start_loading_timer, tick_loading_timer, LoadingTimer};

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameMode::Loading), start_loading_timer)
            .add_systems(OnExit(GameMode::Loading), cancel_loading_timer)
            .add_systems(
                Update,
                tick_loading_timer
                    .run_if(in_state(GameMode::Loading))
                    .run_if(resource_exists::<LoadingTimer>)
                    .before(apply_session_events),
            )
            .add_systems(Update, apply_session_events);
    }
}

// ─── Pure state machine ──────────────────────────────────────────────────────

impl SessionState {
    /// Next state for `event`. Events that are not valid in the current mode
    /// return the state unchanged.
    pub fn transition(self, event: SessionEvent) -> SessionState {
        match (self.mode, event) {
            (GameMode::Loading, SessionEvent::AssetsReady) => SessionState {
                mode: GameMode::Menu,
                ..self
            },
            (GameMode::Menu, SessionEvent::Start) => SessionState {
                mode: GameMode::EraSelection,
                ..self
            },
            (GameMode::EraSelection, SessionEvent::ChooseEra(era)) => SessionState {
                mode: GameMode::Game,
                selected_era: Some(era),
            },
            (GameMode::Game, SessionEvent::ReturnToHub) => SessionState {
                mode: GameMode::Hub,
                ..self
            },
            (GameMode::Hub, SessionEvent::ReturnToEraSelection) => SessionState {
                mode: GameMode::EraSelection,
                ..self
            },
            _ => self,
        }
    }

    /// Era of the scene currently shown, if any.
    pub fn active_era(&self) -> Option<Era> {
        match self.mode {
            GameMode::Game => self.selected_era,
            _ => None,
        }
    }
}

/// Whether the balance covers the trip to `era`.
pub fn can_travel(ledger: &Ledger, tuning: &GameTuning, era: Era) -> bool {
    ledger.can_afford(tuning.era_travel_cost.cost(era))
}

// ─── ECS bridge ──────────────────────────────────────────────────────────────

/// Everything `apply_session_events` reports.
#[derive(SystemParam)]
pub struct SessionOutbox<'w> {
    mode_changed: EventWriter<'w, ModeChangedEvent>,
    travel_refused: EventWriter<'w, TravelRefusedEvent>,
    energy_spent: EventWriter<'w, EnergySpentEvent>,
    notices: EventWriter<'w, NoticeEvent>,
}

/// Applies queued session events in arrival order.
///
/// At most one mode change is committed per frame so every transition runs
/// its own `OnExit`/`OnEnter` hooks; the rest stay queued for later frames.
pub fn apply_session_events(
    mut events: EventReader<SessionEvent>,
    mut pending: Local<VecDeque<SessionEvent>>,
    state: Res<State<GameMode>>,
    mut next_state: ResMut<NextState<GameMode>>,
    mut selected: ResMut<SelectedEra>,
    mut ledger: ResMut<Ledger>,
    tuning: Res<GameTuning>,
    mut out: SessionOutbox,
) {
    pending.extend(events.read().copied());

    let current = SessionState {
        mode: *state.get(),
        selected_era: selected.0,
    };

    while let Some(event) = pending.pop_front() {
        let next = current.transition(event);
        if next == current {
            debug!("[Session] Ignoring {:?} in {}", event, current.mode.label());
            continue;
        }

        if let SessionEvent::ChooseEra(era) = event {
            let cost = tuning.era_travel_cost.cost(era);
            if !can_travel(&ledger, &tuning, era) {
                warn!(
                    "[Session] Cannot travel to the {}: costs {} energy, balance is {}.",
                    era.display_name(),
                    cost,
                    ledger.temporal_energy()
                );
                out.travel_refused.send(TravelRefusedEvent {
                    era,
                    cost,
                    balance: ledger.temporal_energy(),
                });
                out.notices.send(NoticeEvent {
                    kind: NoticeKind::TravelRefused,
                    message: format!("Not enough Temporal Energy for the {}", era.display_name()),
                    duration_secs: tuning.sell_result_secs,
                    scope: GameMode::EraSelection,
                });
                continue;
            }
            if tuning.charge_travel_cost && cost > 0 && ledger.spend_energy(cost) {
                out.energy_spent.send(EnergySpentEvent { amount: cost, era });
            }
        }

        selected.0 = next.selected_era;
        next_state.set(next.mode);
        out.mode_changed.send(ModeChangedEvent {
            from: current.mode,
            to: next.mode,
        });
        info!(
            "[Session] {} -> {}{}",
            current.mode.label(),
            next.mode.label(),
            next.active_era()
                .map(|era| format!(" ({})", era.display_name()))
                .unwrap_or_default()
        );
        break;
    }
}

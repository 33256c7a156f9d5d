//! Console front end: a line-oriented stand-in for the rendered scenes.
//!
//! Typed lines become `ConsoleCommandEvent`s, which are then mapped onto the
//! same session, zone and economy events a graphical front end would send.
//! Every screen change, notice and zone outcome is printed to stdout.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use crate::farming::sorted_zones;
use crate::shared::*;

pub mod input;
pub mod report;

pub const HELP_TEXT: &str = "\
Commands:
  start            leave the main menu
  travel <era>     travel to prehistoric, medieval or future
  hub              leave this era for the Temporal Hub
  portal           step through the hub portal to era selection
  zones            list planting zones in this era
  interact <n>     plant in or harvest zone n
  process          convert all crops into temporal energy (hub only)
  status [--json]  show inventory and energy
  help             show this text
  quit             exit";

pub struct ConsolePlugin;

impl Plugin for ConsolePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ConsoleCommandEvent>()
            .init_resource::<InteractCooldown>()
            .add_systems(
                Update,
                (
                    input::read_console_input.run_if(resource_exists::<input::ConsoleInput>),
                    dispatch_console_commands,
                )
                    .chain(),
            )
            .add_systems(OnEnter(GameMode::Loading), report::show_loading)
            .add_systems(OnEnter(GameMode::Menu), report::show_menu)
            .add_systems(OnEnter(GameMode::EraSelection), report::show_era_selection)
            .add_systems(
                OnEnter(GameMode::Game),
                (report::show_era_scene, reset_interact_cooldown),
            )
            .add_systems(OnEnter(GameMode::Hub), report::show_hub)
            .add_systems(
                Update,
                (
                    report::report_notices,
                    report::report_zone_outcomes,
                    report::report_liquidations,
                )
                    .after(dispatch_console_commands),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Start,
    Travel(Era),
    Hub,
    Portal,
    Zones,
    /// 1-based zone number as shown by `zones`.
    Interact(usize),
    Process,
    Status { json: bool },
    Help,
    Quit,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleCommandEvent(pub ConsoleCommand);

pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err("Type `help` for a list of commands.".to_string());
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("Too many arguments for `{}`.", head));
    }

    let command = match (head.to_ascii_lowercase().as_str(), arg) {
        ("start", None) => ConsoleCommand::Start,
        ("travel", Some(id)) => {
            let era = Era::from_id(id).ok_or_else(|| {
                format!("Unknown era `{}`. Try prehistoric, medieval or future.", id)
            })?;
            ConsoleCommand::Travel(era)
        }
        ("travel", None) => return Err("Usage: travel <era>".to_string()),
        ("hub", None) => ConsoleCommand::Hub,
        ("portal", None) => ConsoleCommand::Portal,
        ("zones", None) => ConsoleCommand::Zones,
        ("interact", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => ConsoleCommand::Interact(n),
            _ => return Err(format!("`{}` is not a zone number.", n)),
        },
        ("interact", None) => return Err("Usage: interact <zone number>".to_string()),
        ("process", None) => ConsoleCommand::Process,
        ("status", None) => ConsoleCommand::Status { json: false },
        ("status", Some("--json")) => ConsoleCommand::Status { json: true },
        ("help", None) => ConsoleCommand::Help,
        ("quit", None) | ("exit", None) => ConsoleCommand::Quit,
        (_, Some(_)) if is_known(head) => {
            return Err(format!("`{}` takes no arguments here.", head));
        }
        _ => return Err(format!("Unknown command `{}`. Type `help`.", head)),
    };
    Ok(command)
}

fn is_known(head: &str) -> bool {
    matches!(
        head.to_ascii_lowercase().as_str(),
        "start" | "hub" | "portal" | "zones" | "process" | "status" | "help" | "quit" | "exit"
    )
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACT DEBOUNCE
// ═══════════════════════════════════════════════════════════════════════

/// Swallows interact presses on a zone that arrive within the cooldown of
/// the last accepted press on that same zone.
#[derive(Resource, Debug, Clone, Default)]
pub struct InteractCooldown {
    last: HashMap<Entity, Duration>,
}

impl InteractCooldown {
    pub fn try_fire(&mut self, zone: Entity, now: Duration, cooldown: Duration) -> bool {
        if let Some(last) = self.last.get(&zone) {
            if now.saturating_sub(*last) < cooldown {
                return false;
            }
        }
        self.last.insert(zone, now);
        true
    }

    /// Zones are respawned on every visit, so old entries are dropped.
    pub fn clear(&mut self) {
        self.last.clear();
    }
}

fn reset_interact_cooldown(mut cooldown: ResMut<InteractCooldown>) {
    cooldown.clear();
}

// ═══════════════════════════════════════════════════════════════════════
// DISPATCH
// ═══════════════════════════════════════════════════════════════════════

/// Frames to wait after forwarding a command that changes game state.
/// An event sent in frame N has been handled, and any mode change it
/// caused has landed, by the start of frame N + 2.
pub const SETTLE_FRAMES: u8 = 2;

/// Everything the console forwards into the game.
#[derive(SystemParam)]
pub struct ConsoleOutbox<'w> {
    session: EventWriter<'w, SessionEvent>,
    interact: EventWriter<'w, ZoneInteractEvent>,
    liquidate: EventWriter<'w, LiquidateCropsRequest>,
    exit: EventWriter<'w, AppExit>,
}

/// Runs typed commands strictly in order. After a command that changes game
/// state, the rest of the stream waits until that change has been applied,
/// so each command is judged against the mode its predecessors left behind.
pub fn dispatch_console_commands(
    mut commands_in: EventReader<ConsoleCommandEvent>,
    mut pending: Local<VecDeque<ConsoleCommand>>,
    mut settling: Local<u8>,
    mode: Res<State<GameMode>>,
    selected: Res<SelectedEra>,
    ledger: Res<Ledger>,
    tuning: Res<GameTuning>,
    time: Res<Time>,
    zones: Query<(Entity, &PlantingZone, &ZoneLabel)>,
    mut cooldown: ResMut<InteractCooldown>,
    mut out: ConsoleOutbox,
) {
    pending.extend(commands_in.read().map(|ConsoleCommandEvent(command)| *command));

    if *settling > 0 {
        *settling -= 1;
        if *settling > 0 {
            return;
        }
    }

    let session = SessionState {
        mode: *mode.get(),
        selected_era: selected.0,
    };

    while let Some(command) = pending.pop_front() {
        let session_event = match command {
            ConsoleCommand::Start => Some(SessionEvent::Start),
            ConsoleCommand::Travel(era) => Some(SessionEvent::ChooseEra(era)),
            ConsoleCommand::Hub => Some(SessionEvent::ReturnToHub),
            ConsoleCommand::Portal => Some(SessionEvent::ReturnToEraSelection),
            _ => None,
        };
        if let Some(event) = session_event {
            out.session.send(event);
            if session.transition(event) == session {
                println!("That does nothing in the {}.", session.mode.label());
                continue;
            }
            // Unaffordable travel is refused downstream and reported by notice.
            *settling = SETTLE_FRAMES;
            return;
        }

        match command {
            ConsoleCommand::Zones => {
                if session.mode != GameMode::Game {
                    println!("There are no planting zones here.");
                    continue;
                }
                for (_, zone, label) in sorted_zones(zones.iter()) {
                    println!("{}", report::zone_line(zone, label));
                }
            }
            ConsoleCommand::Interact(n) => {
                if session.mode != GameMode::Game {
                    println!("There are no planting zones here.");
                    continue;
                }
                let list = sorted_zones(zones.iter());
                let Some((entity, _, _)) = n.checked_sub(1).and_then(|i| list.get(i)) else {
                    println!("There is no zone {}. This era has {}.", n, list.len());
                    continue;
                };
                let cooldown_len = Duration::from_millis(tuning.interact_cooldown_ms);
                if !cooldown.try_fire(*entity, time.elapsed(), cooldown_len) {
                    debug!("[Console] Interact on zone {} ignored: still cooling down.", n);
                    continue;
                }
                out.interact.send(ZoneInteractEvent { zone: *entity });
                *settling = SETTLE_FRAMES;
                return;
            }
            ConsoleCommand::Process => {
                if session.mode != GameMode::Hub {
                    println!("Crops can only be processed in the Temporal Hub.");
                    continue;
                }
                if ledger.total_crops() == 0 {
                    println!("No crops to process.");
                    continue;
                }
                out.liquidate.send(LiquidateCropsRequest);
                *settling = SETTLE_FRAMES;
                return;
            }
            ConsoleCommand::Status { json } => {
                let displays: Vec<ZoneDisplayState> = sorted_zones(zones.iter())
                    .into_iter()
                    .map(|(_, zone, _)| zone.display_state())
                    .collect();
                match report::render_status(session, &ledger, displays, json) {
                    Ok(text) => println!("{}", text),
                    Err(e) => warn!("[Console] {}", e),
                }
            }
            ConsoleCommand::Help => println!("{}", HELP_TEXT),
            ConsoleCommand::Quit => {
                info!("[Console] Quit requested.");
                out.exit.send(AppExit::Success);
                pending.clear();
                return;
            }
            ConsoleCommand::Start
            | ConsoleCommand::Travel(_)
            | ConsoleCommand::Hub
            | ConsoleCommand::Portal => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_commands() {
        assert_eq!(parse_command("start"), Ok(ConsoleCommand::Start));
        assert_eq!(
            parse_command("  travel Medieval "),
            Ok(ConsoleCommand::Travel(Era::Medieval))
        );
        assert_eq!(parse_command("HUB"), Ok(ConsoleCommand::Hub));
        assert_eq!(parse_command("portal"), Ok(ConsoleCommand::Portal));
        assert_eq!(parse_command("exit"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_command("interact 3"), Ok(ConsoleCommand::Interact(3)));
        assert_eq!(
            parse_command("status --json"),
            Ok(ConsoleCommand::Status { json: true })
        );
        assert_eq!(
            parse_command("status"),
            Ok(ConsoleCommand::Status { json: false })
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_command("").is_err());
        assert!(parse_command("travel atlantis").is_err());
        assert!(parse_command("travel").is_err());
        assert!(parse_command("interact 0").is_err());
        assert!(parse_command("interact two").is_err());
        assert!(parse_command("start now").is_err());
        assert!(parse_command("dance").is_err());
        assert!(parse_command("interact 1 2").is_err());
    }

    #[test]
    fn test_cooldown_swallows_rapid_presses() {
        let mut cooldown = InteractCooldown::default();
        let zone = Entity::from_raw(1);
        let window = Duration::from_millis(500);
        assert!(cooldown.try_fire(zone, Duration::from_millis(1000), window));
        assert!(!cooldown.try_fire(zone, Duration::from_millis(1200), window));
        assert!(!cooldown.try_fire(zone, Duration::from_millis(1499), window));
        assert!(cooldown.try_fire(zone, Duration::from_millis(1500), window));
    }

    #[test]
    fn test_cooldown_is_per_zone() {
        let mut cooldown = InteractCooldown::default();
        let window = Duration::from_millis(500);
        let now = Duration::from_millis(1000);
        assert!(cooldown.try_fire(Entity::from_raw(1), now, window));
        assert!(cooldown.try_fire(Entity::from_raw(2), now, window));
        assert!(!cooldown.try_fire(Entity::from_raw(1), now, window));

        cooldown.clear();
        assert!(cooldown.try_fire(Entity::from_raw(1), now, window));
    }

    #[test]
    fn test_zero_cooldown_never_blocks() {
        let mut cooldown = InteractCooldown::default();
        let zone = Entity::from_raw(3);
        assert!(cooldown.try_fire(zone, Duration::ZERO, Duration::ZERO));
        assert!(cooldown.try_fire(zone, Duration::ZERO, Duration::ZERO));
    }
}

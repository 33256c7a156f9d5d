//! Console output: one printer per screen plus event reporters.

use bevy::prelude::*;

use crate::economy::energy::format_energy;
use crate::economy::liquidation::LiquidationPreview;
use crate::shared::*;
use crate::ui::screens::{era_choices, SessionSnapshot};

// ─────────────────────────────────────────────────────────────────────────────
// Screens
// ─────────────────────────────────────────────────────────────────────────────

pub fn show_loading() {
    println!("Loading Chrono Harvester...");
}

pub fn show_menu() {
    println!();
    println!("=== CHRONO HARVESTER ===");
    println!("Farm across time. Type `start` to begin, `help` for commands.");
}

pub fn show_era_selection(ledger: Res<Ledger>, tuning: Res<GameTuning>) {
    println!();
    println!("=== SELECT AN ERA ===  ({})", format_energy(ledger.temporal_energy()));
    for choice in era_choices(&ledger, &tuning) {
        let button = if choice.affordable {
            format!("travel {}", choice.era.id())
        } else {
            "not enough energy".to_string()
        };
        println!(
            "  {:<12} {:>3} TE  {}  [{}]",
            choice.era.display_name(),
            choice.cost,
            choice.era.description(),
            button
        );
    }
}

pub fn show_era_scene(selected: Res<SelectedEra>, ledger: Res<Ledger>) {
    let Some(era) = selected.0 else {
        return;
    };
    println!();
    println!("=== {} ===", era.display_name().to_uppercase());
    println!(
        "Seeds: {}  Crops: {}. Type `zones` to look around, `hub` to leave.",
        ledger.seeds(era),
        ledger.crops(era)
    );
}

pub fn show_hub(ledger: Res<Ledger>, preview: Res<LiquidationPreview>) {
    println!();
    println!("=== TEMPORAL HUB ===");
    println!("Temporal Energy: {}", format_energy(ledger.temporal_energy()));
    println!(
        "Crops held: {} (worth {})",
        preview.total_crops,
        format_energy(preview.potential_energy)
    );
    if preview.can_process() {
        println!("Type `process` to convert your crops.");
    }
    println!("Type `portal` to choose another era.");
}

// ─────────────────────────────────────────────────────────────────────────────
// Event reporters
// ─────────────────────────────────────────────────────────────────────────────

pub fn report_notices(mut notices: EventReader<NoticeEvent>) {
    for notice in notices.read() {
        println!(">> {}", notice.message);
    }
}

pub fn report_zone_outcomes(
    mut planted: EventReader<SeedPlantedEvent>,
    mut harvested: EventReader<CropHarvestedEvent>,
    mut refused: EventReader<PlantRefusedEvent>,
    labels: Query<&ZoneLabel>,
    ledger: Res<Ledger>,
) {
    let number = |zone: Entity| labels.get(zone).map(|l| l.index + 1).unwrap_or(0);

    for ev in planted.read() {
        println!(
            "Planted a {} seed in zone {}. Seeds left: {}.",
            ev.era.display_name(),
            number(ev.zone),
            ledger.seeds(ev.era)
        );
    }
    for ev in harvested.read() {
        println!(
            "Harvested zone {}. {} crops: {}.",
            number(ev.zone),
            ev.era.display_name(),
            ledger.crops(ev.era)
        );
    }
    for ev in refused.read() {
        println!("No {} seeds left to plant.", ev.era.display_name());
    }
}

pub fn report_liquidations(mut events: EventReader<CropsLiquidatedEvent>, ledger: Res<Ledger>) {
    for ev in events.read() {
        println!(
            "Processed {} crops. Balance: {}.",
            ev.crops,
            format_energy(ledger.temporal_energy())
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

pub fn zone_line(zone: &PlantingZone, label: &ZoneLabel) -> String {
    let display = zone.display_state();
    let state = if display.planted {
        format!(
            "{} {:>3.0}%",
            display.stage_name(),
            display.growth_progress * 100.0
        )
    } else {
        "empty".to_string()
    };
    let hint = display
        .interaction_hint()
        .map(|h| format!("  ({})", h.replace("Press E", "interact")))
        .unwrap_or_default();
    format!(
        "  [{:>2}] at ({:>5.1}, {:>5.1})  {}{}",
        label.index + 1,
        label.position.x,
        label.position.z,
        state,
        hint
    )
}

pub fn status_text(session: SessionState, ledger: &Ledger) -> String {
    let mut lines = vec![format!(
        "Mode: {}{}",
        session.mode.label(),
        session
            .active_era()
            .map(|era| format!(" ({})", era.display_name()))
            .unwrap_or_default()
    )];
    lines.push(format!("Temporal Energy: {}", format_energy(ledger.temporal_energy())));
    for era in Era::ALL {
        lines.push(format!(
            "  {:<12} seeds {:>3}  crops {:>3}",
            era.display_name(),
            ledger.seeds(era),
            ledger.crops(era)
        ));
    }
    lines.join("\n")
}

/// Text for `status`, or the pretty JSON snapshot for `status --json`.
pub fn render_status(
    session: SessionState,
    ledger: &Ledger,
    zones: Vec<ZoneDisplayState>,
    json: bool,
) -> Result<String, String> {
    if json {
        SessionSnapshot::capture(session, ledger, zones).to_json()
    } else {
        Ok(status_text(session, ledger))
    }
}

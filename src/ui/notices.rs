use bevy::prelude::*;
use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub kind: NoticeKind,
    pub message: String,
    pub scope: GameMode,
    pub timer: Timer,
}

/// Notices currently on screen, oldest first.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveNotices {
    pub notices: Vec<ActiveNotice>,
}

impl ActiveNotices {
    pub fn contains(&self, kind: NoticeKind) -> bool {
        self.notices.iter().any(|n| n.kind == kind)
    }

    pub fn message(&self, kind: NoticeKind) -> Option<&str> {
        self.notices
            .iter()
            .find(|n| n.kind == kind)
            .map(|n| n.message.as_str())
    }

    /// A repeated kind replaces the old one and restarts its timer.
    pub fn post(&mut self, event: &NoticeEvent) {
        self.notices.retain(|n| n.kind != event.kind);
        self.notices.push(ActiveNotice {
            kind: event.kind,
            message: event.message.clone(),
            scope: event.scope,
            timer: Timer::from_seconds(event.duration_secs.max(0.0), TimerMode::Once),
        });
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        for notice in self.notices.iter_mut() {
            notice.timer.tick(delta);
        }
        self.notices.retain(|n| !n.timer.finished());
    }

    /// Drop every notice owned by a mode that was just left.
    pub fn clear_scope(&mut self, scope: GameMode) {
        self.notices.retain(|n| n.scope != scope);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

pub fn post_controls_reminder(
    tuning: Res<GameTuning>,
    mut notice_writer: EventWriter<NoticeEvent>,
) {
    notice_writer.send(NoticeEvent {
        kind: NoticeKind::ControlsReminder,
        message: "Interact with an empty zone to plant, and again once mature to harvest."
            .to_string(),
        duration_secs: tuning.controls_reminder_secs,
        scope: GameMode::Game,
    });
}

pub fn collect_notices(mut events: EventReader<NoticeEvent>, mut active: ResMut<ActiveNotices>) {
    for event in events.read() {
        active.post(event);
    }
}

pub fn clear_notices_on_mode_change(
    mut mode_events: EventReader<ModeChangedEvent>,
    mut active: ResMut<ActiveNotices>,
) {
    for ev in mode_events.read() {
        active.clear_scope(ev.from);
    }
}

pub fn expire_notices(time: Res<Time>, mut active: ResMut<ActiveNotices>) {
    if active.notices.is_empty() {
        return;
    }
    active.tick(time.delta());
}

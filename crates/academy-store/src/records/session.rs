use academy_core::entities::{Attendance, PlayerLoad, Session, SessionTask};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::drafts::session::{NewAttendance, NewPlayerLoad, NewSession, NewSessionTask};
use crate::record::Record;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::session::{
    AttendanceUpdate, PlayerLoadUpdate, SessionTaskUpdate, SessionUpdate,
};

/// Session-RPE training load: perceived exertion times minutes.
#[must_use]
pub fn session_load(rpe: u8, duration_minutes: u32) -> u32 {
    u32::from(rpe).saturating_mul(duration_minutes)
}

impl Record for Session {
    type Draft = NewSession;
    type Patch = SessionUpdate;

    const KIND: EntityKind = EntityKind::Session;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewSession, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            team_id: draft.team_id,
            date: draft.date,
            start_time: draft.start_time,
            duration_minutes: draft.duration_minutes,
            objective: draft.objective,
            location: draft.location,
            status: draft.status.unwrap_or_default(),
            responsible_user_id: ctx.user_or(draft.responsible_user_id),
        }
    }

    fn replace(&mut self, draft: NewSession, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.team_id = draft.team_id;
        self.date = draft.date;
        fill(&mut self.start_time, draft.start_time);
        fill(&mut self.duration_minutes, draft.duration_minutes);
        fill(&mut self.objective, draft.objective);
        fill(&mut self.location, draft.location);
        assign(&mut self.status, draft.status);
        fill(&mut self.responsible_user_id, draft.responsible_user_id);
    }

    fn apply(&mut self, patch: SessionUpdate) {
        assign(&mut self.team_id, patch.team_id);
        assign(&mut self.date, patch.date);
        assign(&mut self.start_time, patch.start_time);
        assign(&mut self.duration_minutes, patch.duration_minutes);
        assign(&mut self.objective, patch.objective);
        assign(&mut self.location, patch.location);
        assign(&mut self.status, patch.status);
        assign(&mut self.responsible_user_id, patch.responsible_user_id);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TeamId => Some(&self.team_id),
            _ => None,
        }
    }
}

impl Record for SessionTask {
    type Draft = NewSessionTask;
    type Patch = SessionTaskUpdate;

    const KIND: EntityKind = EntityKind::SessionTask;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewSessionTask, _ctx: &WriteContext) -> Self {
        Self {
            id,
            session_id: draft.session_id,
            task_id: draft.task_id,
            order: draft.order,
            duration_minutes: draft.duration_minutes,
            notes: draft.notes,
        }
    }

    fn replace(&mut self, draft: NewSessionTask, _ctx: &WriteContext) {
        self.session_id = draft.session_id;
        self.order = draft.order;
        fill(&mut self.task_id, draft.task_id);
        fill(&mut self.duration_minutes, draft.duration_minutes);
        fill(&mut self.notes, draft.notes);
    }

    fn apply(&mut self, patch: SessionTaskUpdate) {
        assign(&mut self.task_id, patch.task_id);
        assign(&mut self.order, patch.order);
        assign(&mut self.duration_minutes, patch.duration_minutes);
        assign(&mut self.notes, patch.notes);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::SessionId => Some(&self.session_id),
            ForeignKey::TaskId => self.task_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for Attendance {
    type Draft = NewAttendance;
    type Patch = AttendanceUpdate;

    const KIND: EntityKind = EntityKind::Attendance;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewAttendance, _ctx: &WriteContext) -> Self {
        Self {
            id,
            session_id: draft.session_id,
            player_id: draft.player_id,
            status: draft.status.unwrap_or_default(),
            notes: draft.notes,
        }
    }

    fn replace(&mut self, draft: NewAttendance, _ctx: &WriteContext) {
        self.session_id = draft.session_id;
        self.player_id = draft.player_id;
        assign(&mut self.status, draft.status);
        fill(&mut self.notes, draft.notes);
    }

    fn apply(&mut self, patch: AttendanceUpdate) {
        assign(&mut self.status, patch.status);
        assign(&mut self.notes, patch.notes);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::SessionId => Some(&self.session_id),
            ForeignKey::PlayerId => Some(&self.player_id),
            _ => None,
        }
    }
}

impl Record for PlayerLoad {
    type Draft = NewPlayerLoad;
    type Patch = PlayerLoadUpdate;

    const KIND: EntityKind = EntityKind::PlayerLoad;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewPlayerLoad, _ctx: &WriteContext) -> Self {
        Self {
            id,
            session_id: draft.session_id,
            player_id: draft.player_id,
            rpe: draft.rpe,
            duration_minutes: draft.duration_minutes,
            load: session_load(draft.rpe, draft.duration_minutes),
        }
    }

    fn replace(&mut self, draft: NewPlayerLoad, _ctx: &WriteContext) {
        self.session_id = draft.session_id;
        self.player_id = draft.player_id;
        self.rpe = draft.rpe;
        self.duration_minutes = draft.duration_minutes;
        self.load = session_load(self.rpe, self.duration_minutes);
    }

    fn apply(&mut self, patch: PlayerLoadUpdate) {
        assign(&mut self.rpe, patch.rpe);
        assign(&mut self.duration_minutes, patch.duration_minutes);
        self.load = session_load(self.rpe, self.duration_minutes);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::SessionId => Some(&self.session_id),
            ForeignKey::PlayerId => Some(&self.player_id),
            _ => None,
        }
    }
}

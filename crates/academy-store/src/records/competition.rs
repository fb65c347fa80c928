use academy_core::entities::{
    Competition, Lineup, LineupTemplate, Match, MatchEvent, PlayerMatchStats,
};
use academy_core::enums::{EntityKind, ForeignKey};

use crate::drafts::competition::{
    NewCompetition, NewLineup, NewLineupTemplate, NewMatch, NewMatchEvent, NewPlayerMatchStats,
};
use crate::record::Record;
use crate::seed;
use crate::tenant::WriteContext;
use crate::updates::{assign, fill};
use crate::updates::competition::{
    CompetitionUpdate, LineupTemplateUpdate, LineupUpdate, MatchEventUpdate, MatchUpdate,
    PlayerMatchStatsUpdate,
};

impl Record for Competition {
    type Draft = NewCompetition;
    type Patch = CompetitionUpdate;

    const KIND: EntityKind = EntityKind::Competition;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewCompetition, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            name: draft.name,
            season: draft.season,
            team_id: draft.team_id,
            is_active: draft.is_active.unwrap_or(true),
        }
    }

    fn replace(&mut self, draft: NewCompetition, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        fill(&mut self.season, draft.season);
        fill(&mut self.team_id, draft.team_id);
        assign(&mut self.is_active, draft.is_active);
    }

    fn apply(&mut self, patch: CompetitionUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.season, patch.season);
        assign(&mut self.team_id, patch.team_id);
        assign(&mut self.is_active, patch.is_active);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TeamId => self.team_id.as_deref(),
            _ => None,
        }
    }

    fn seed(ctx: &WriteContext) -> Vec<Self> {
        seed::competitions(ctx)
    }
}

impl Record for Match {
    type Draft = NewMatch;
    type Patch = MatchUpdate;

    const KIND: EntityKind = EntityKind::Match;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewMatch, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            competition_id: draft.competition_id,
            team_id: draft.team_id,
            opponent: draft.opponent,
            date: draft.date,
            venue: draft.venue,
            status: draft.status.unwrap_or_default(),
            goals_for: draft.goals_for,
            goals_against: draft.goals_against,
        }
    }

    fn replace(&mut self, draft: NewMatch, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.team_id = draft.team_id;
        self.opponent = draft.opponent;
        self.date = draft.date;
        self.venue = draft.venue;
        fill(&mut self.competition_id, draft.competition_id);
        assign(&mut self.status, draft.status);
        fill(&mut self.goals_for, draft.goals_for);
        fill(&mut self.goals_against, draft.goals_against);
    }

    fn apply(&mut self, patch: MatchUpdate) {
        assign(&mut self.competition_id, patch.competition_id);
        assign(&mut self.team_id, patch.team_id);
        assign(&mut self.opponent, patch.opponent);
        assign(&mut self.date, patch.date);
        assign(&mut self.venue, patch.venue);
        assign(&mut self.status, patch.status);
        assign(&mut self.goals_for, patch.goals_for);
        assign(&mut self.goals_against, patch.goals_against);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TeamId => Some(&self.team_id),
            ForeignKey::CompetitionId => self.competition_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for PlayerMatchStats {
    type Draft = NewPlayerMatchStats;
    type Patch = PlayerMatchStatsUpdate;

    const KIND: EntityKind = EntityKind::PlayerMatchStats;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewPlayerMatchStats, _ctx: &WriteContext) -> Self {
        Self {
            id,
            match_id: draft.match_id,
            player_id: draft.player_id,
            minutes_played: draft.minutes_played,
            goals: draft.goals,
            assists: draft.assists,
            yellow_cards: draft.yellow_cards,
            red_cards: draft.red_cards,
            is_starter: draft.is_starter,
        }
    }

    fn replace(&mut self, draft: NewPlayerMatchStats, _ctx: &WriteContext) {
        self.match_id = draft.match_id;
        self.player_id = draft.player_id;
        self.minutes_played = draft.minutes_played;
        self.goals = draft.goals;
        self.assists = draft.assists;
        self.yellow_cards = draft.yellow_cards;
        self.red_cards = draft.red_cards;
        self.is_starter = draft.is_starter;
    }

    fn apply(&mut self, patch: PlayerMatchStatsUpdate) {
        assign(&mut self.minutes_played, patch.minutes_played);
        assign(&mut self.goals, patch.goals);
        assign(&mut self.assists, patch.assists);
        assign(&mut self.yellow_cards, patch.yellow_cards);
        assign(&mut self.red_cards, patch.red_cards);
        assign(&mut self.is_starter, patch.is_starter);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::MatchId => Some(&self.match_id),
            ForeignKey::PlayerId => Some(&self.player_id),
            _ => None,
        }
    }
}

impl Record for MatchEvent {
    type Draft = NewMatchEvent;
    type Patch = MatchEventUpdate;

    const KIND: EntityKind = EntityKind::MatchEvent;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewMatchEvent, _ctx: &WriteContext) -> Self {
        Self {
            id,
            match_id: draft.match_id,
            player_id: draft.player_id,
            event_type: draft.event_type,
            minute: draft.minute,
            notes: draft.notes,
        }
    }

    fn replace(&mut self, draft: NewMatchEvent, _ctx: &WriteContext) {
        self.match_id = draft.match_id;
        self.event_type = draft.event_type;
        self.minute = draft.minute;
        fill(&mut self.player_id, draft.player_id);
        fill(&mut self.notes, draft.notes);
    }

    fn apply(&mut self, patch: MatchEventUpdate) {
        assign(&mut self.player_id, patch.player_id);
        assign(&mut self.event_type, patch.event_type);
        assign(&mut self.minute, patch.minute);
        assign(&mut self.notes, patch.notes);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::MatchId => Some(&self.match_id),
            ForeignKey::PlayerId => self.player_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for LineupTemplate {
    type Draft = NewLineupTemplate;
    type Patch = LineupTemplateUpdate;

    const KIND: EntityKind = EntityKind::LineupTemplate;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewLineupTemplate, ctx: &WriteContext) -> Self {
        Self {
            id,
            club_id: ctx.club_id.clone(),
            team_id: draft.team_id,
            name: draft.name,
            formation: draft.formation,
            created_by_user_id: ctx.user_or(draft.created_by_user_id),
        }
    }

    fn replace(&mut self, draft: NewLineupTemplate, ctx: &WriteContext) {
        self.club_id.clone_from(&ctx.club_id);
        self.name = draft.name;
        self.formation = draft.formation;
        fill(&mut self.team_id, draft.team_id);
        fill(&mut self.created_by_user_id, draft.created_by_user_id);
    }

    fn apply(&mut self, patch: LineupTemplateUpdate) {
        assign(&mut self.name, patch.name);
        assign(&mut self.formation, patch.formation);
        assign(&mut self.team_id, patch.team_id);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::TeamId => self.team_id.as_deref(),
            _ => None,
        }
    }
}

impl Record for Lineup {
    type Draft = NewLineup;
    type Patch = LineupUpdate;

    const KIND: EntityKind = EntityKind::Lineup;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, draft: NewLineup, _ctx: &WriteContext) -> Self {
        Self {
            id,
            match_id: draft.match_id,
            session_id: draft.session_id,
            player_id: draft.player_id,
            position_id: draft.position_id,
            is_starter: draft.is_starter,
            slot: draft.slot,
        }
    }

    fn replace(&mut self, draft: NewLineup, _ctx: &WriteContext) {
        self.player_id = draft.player_id;
        self.is_starter = draft.is_starter;
        fill(&mut self.match_id, draft.match_id);
        fill(&mut self.session_id, draft.session_id);
        fill(&mut self.position_id, draft.position_id);
        fill(&mut self.slot, draft.slot);
    }

    fn apply(&mut self, patch: LineupUpdate) {
        assign(&mut self.position_id, patch.position_id);
        assign(&mut self.is_starter, patch.is_starter);
        assign(&mut self.slot, patch.slot);
    }

    fn reference(&self, via: ForeignKey) -> Option<&str> {
        match via {
            ForeignKey::MatchId => self.match_id.as_deref(),
            ForeignKey::SessionId => self.session_id.as_deref(),
            ForeignKey::PlayerId => Some(&self.player_id),
            ForeignKey::PositionId => self.position_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::enums::{MatchStatus, Venue};
    use crate::updates::competition::MatchUpdateBuilder;
    use chrono::NaiveDate;

    #[test]
    fn match_defaults_to_scheduled_home_game() {
        let ctx = WriteContext::new("club-test", None);
        let fixture = Match::build(
            "mch-1".into(),
            NewMatch {
                team_id: "tem-1".into(),
                opponent: "CD Rival".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
                competition_id: None,
                venue: Venue::default(),
                status: None,
                goals_for: None,
                goals_against: None,
            },
            &ctx,
        );
        assert_eq!(fixture.status, MatchStatus::Scheduled);
        assert_eq!(fixture.venue, Venue::Home);
        assert_eq!(fixture.reference(ForeignKey::CompetitionId), None);
    }

    #[test]
    fn score_marks_match_played() {
        let ctx = WriteContext::new("club-test", None);
        let mut fixture = Match::build(
            "mch-1".into(),
            NewMatch {
                team_id: "tem-1".into(),
                opponent: "CD Rival".into(),
                date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
                competition_id: Some("cmp-league".into()),
                venue: Venue::Away,
                status: None,
                goals_for: None,
                goals_against: None,
            },
            &ctx,
        );
        fixture.apply(MatchUpdateBuilder::new().score(2, 1).build());
        assert_eq!(fixture.status, MatchStatus::Played);
        assert_eq!((fixture.goals_for, fixture.goals_against), (Some(2), Some(1)));
        assert_eq!(fixture.opponent, "CD Rival");
    }

    #[test]
    fn lineup_references_its_scope() {
        let ctx = WriteContext::new("club-test", None);
        let slot = Lineup::build(
            "lnp-1".into(),
            NewLineup {
                session_id: Some("ses-1".into()),
                player_id: "ply-1".into(),
                ..NewLineup::default()
            },
            &ctx,
        );
        assert!(slot.references(ForeignKey::SessionId, "ses-1"));
        assert!(!slot.references(ForeignKey::MatchId, "ses-1"));
    }
}

//! Record store consistency properties
//!
//! - Identity uniqueness and get-by-id round trip
//! - Cascade completeness and non-transitivity per policy
//! - Batch upsert idempotence and mixed create/update batches
//! - Lineup full-replace
//! - Team deletion leaves player references dangling

use std::collections::HashSet;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use academy_config::{AcademyConfig, StoreConfig, TenantConfig};
use academy_core::enums::{AttendanceStatus, CascadePolicy, EntityKind, ForeignKey, SessionStatus};
use academy_store::drafts::competition::{NewLineup, NewMatch, NewMatchEvent, NewPlayerMatchStats};
use academy_store::drafts::roster::NewPlayer;
use academy_store::drafts::session::{NewAttendance, NewPlayerLoad, NewSession, NewSessionTask};
use academy_store::drafts::team::NewTeam;
use academy_store::updates::session::SessionUpdateBuilder;
use academy_store::upsert::Upsert;
use academy_store::{AcademyService, LineupScope};

fn config(policy: CascadePolicy) -> AcademyConfig {
    let mut store = StoreConfig::ephemeral();
    store.cascade = policy;
    AcademyConfig {
        store,
        tenant: TenantConfig {
            club_id: "club-props".into(),
            default_user_id: Some("usr-coach".into()),
        },
    }
}

fn test_service() -> AcademyService {
    AcademyService::open(&config(CascadePolicy::default())).unwrap()
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
}

/// Session with `tasks` plan blocks, `marks` attendance rows, `loads` load rows.
async fn session_with_children(
    svc: &AcademyService,
    tasks: u32,
    marks: u32,
    loads: u32,
) -> String {
    let session = svc
        .sessions()
        .create(NewSession::new("tem-1", day(3)))
        .await
        .unwrap();
    for order in 0..tasks {
        svc.session_tasks()
            .create(NewSessionTask {
                session_id: session.id.clone(),
                order,
                ..NewSessionTask::default()
            })
            .await
            .unwrap();
    }
    let rows = (0..marks)
        .map(|i| {
            Upsert::new(NewAttendance {
                session_id: session.id.clone(),
                player_id: format!("ply-{i}"),
                ..NewAttendance::default()
            })
        })
        .collect();
    svc.save_attendance(rows).await.unwrap();
    let rows = (0..loads)
        .map(|i| {
            Upsert::new(NewPlayerLoad {
                session_id: session.id.clone(),
                player_id: format!("ply-{i}"),
                rpe: 5,
                duration_minutes: 60,
            })
        })
        .collect();
    svc.save_player_loads(rows).await.unwrap();
    session.id
}

// ---------------------------------------------------------------------------
// Identity and round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_identities_are_distinct() {
    let svc = test_service();
    let mut ids = HashSet::new();
    for i in 0..50 {
        let team = svc
            .teams()
            .create(NewTeam {
                name: format!("Equipo {i}"),
                ..NewTeam::default()
            })
            .await
            .unwrap();
        assert!(ids.insert(team.id.clone()), "duplicate identity {}", team.id);
    }
}

#[tokio::test]
async fn random_identities_are_distinct() {
    let mut config = config(CascadePolicy::Owned);
    config.store.ids = academy_config::IdStrategy::Random;
    let svc = AcademyService::open(&config).unwrap();
    let mut ids = HashSet::new();
    for _ in 0..50 {
        let player = svc
            .players()
            .create(NewPlayer {
                first_name: "Ana".into(),
                ..NewPlayer::default()
            })
            .await
            .unwrap();
        assert!(player.id.starts_with("ply-"));
        assert!(ids.insert(player.id));
    }
}

#[tokio::test]
async fn get_by_id_returns_created_record() {
    let svc = test_service();
    let session = svc
        .sessions()
        .create(NewSession {
            objective: Some("Salida de balón".into()),
            ..NewSession::new("tem-1", day(10))
        })
        .await
        .unwrap();
    let fetched = svc.sessions().get_by_id(&session.id).await.unwrap();
    assert_eq!(fetched, Some(session));
}

// ---------------------------------------------------------------------------
// Cascades
// ---------------------------------------------------------------------------

#[rstest]
#[case(CascadePolicy::Legacy)]
#[case(CascadePolicy::Owned)]
#[tokio::test]
async fn session_cascade_is_complete(#[case] policy: CascadePolicy) {
    let svc = AcademyService::open(&config(policy)).unwrap();
    let session_id = session_with_children(&svc, 4, 3, 2).await;

    let report = svc.delete_session(&session_id).await.unwrap();
    assert!(report.parent_removed);
    assert_eq!(report.removed(EntityKind::SessionTask), 4);
    assert_eq!(report.removed(EntityKind::Attendance), 3);
    assert_eq!(report.removed(EntityKind::PlayerLoad), 2);

    assert_eq!(svc.sessions().get_by_id(&session_id).await.unwrap(), None);
    assert!(svc.session_plan(&session_id).await.unwrap().is_empty());
    assert!(svc.attendance_for(&session_id).await.unwrap().is_empty());
    assert!(
        svc.player_loads()
            .find_by(ForeignKey::SessionId, &session_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn session_cascade_leaves_other_sessions_alone() {
    let svc = test_service();
    let doomed = session_with_children(&svc, 2, 2, 2).await;
    let kept = session_with_children(&svc, 3, 1, 4).await;

    svc.delete_session(&doomed).await.unwrap();

    assert_eq!(svc.session_plan(&kept).await.unwrap().len(), 3);
    assert_eq!(svc.attendance_for(&kept).await.unwrap().len(), 1);
    assert_eq!(
        svc.player_loads()
            .find_by(ForeignKey::SessionId, &kept)
            .await
            .unwrap()
            .len(),
        4
    );
}

#[tokio::test]
async fn cascade_is_not_transitive() {
    let svc = test_service();
    let session_id = session_with_children(&svc, 1, 0, 0).await;
    let block = &svc.session_plan(&session_id).await.unwrap()[0];

    // A record hanging off the plan block is out of reach of the session cascade.
    svc.lineups()
        .create(NewLineup {
            session_id: Some(block.id.clone()),
            player_id: "ply-1".into(),
            ..NewLineup::default()
        })
        .await
        .unwrap();

    svc.delete_session(&session_id).await.unwrap();
    assert_eq!(svc.lineups().list().await.unwrap().len(), 1);
}

#[rstest]
#[case(CascadePolicy::Legacy, 0)]
#[case(CascadePolicy::Owned, 1)]
#[tokio::test]
async fn match_children_follow_policy(#[case] policy: CascadePolicy, #[case] removed: usize) {
    let svc = AcademyService::open(&config(policy)).unwrap();
    let fixture = svc
        .matches()
        .create(NewMatch {
            team_id: "tem-1".into(),
            opponent: "UD Vecina".into(),
            date: day(15),
            competition_id: None,
            venue: academy_core::enums::Venue::Away,
            status: None,
            goals_for: None,
            goals_against: None,
        })
        .await
        .unwrap();
    svc.save_match_stats(vec![Upsert::new(NewPlayerMatchStats {
        match_id: fixture.id.clone(),
        player_id: "ply-1".into(),
        minutes_played: 90,
        ..NewPlayerMatchStats::default()
    })])
    .await
    .unwrap();
    svc.match_events_store()
        .create(NewMatchEvent {
            match_id: fixture.id.clone(),
            event_type: academy_core::enums::MatchEventType::Goal,
            minute: 33,
            player_id: Some("ply-1".into()),
            notes: None,
        })
        .await
        .unwrap();
    let scope = LineupScope::Match(fixture.id.clone());
    svc.replace_lineup(
        &scope,
        vec![NewLineup {
            player_id: "ply-1".into(),
            is_starter: true,
            ..NewLineup::default()
        }],
    )
    .await
    .unwrap();

    let report = svc.delete_match(&fixture.id).await.unwrap();
    assert!(report.parent_removed);

    assert_eq!(report.removed(EntityKind::PlayerMatchStats), removed);
    assert_eq!(report.removed(EntityKind::MatchEvent), removed);
    assert_eq!(report.removed(EntityKind::Lineup), removed);
    assert_eq!(svc.lineup_for(&scope).await.unwrap().len(), 1 - removed);
}

#[tokio::test]
async fn deleting_a_missing_parent_is_a_no_op() {
    let svc = test_service();
    let report = svc.delete(EntityKind::Session, "ses-ghost").await.unwrap();
    assert!(!report.parent_removed);
    assert_eq!(report.children_removed(), 0);
}

// ---------------------------------------------------------------------------
// Batch upsert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn batch_upsert_is_idempotent_on_identified_items() {
    let svc = test_service();
    let session_id = session_with_children(&svc, 0, 3, 0).await;
    let existing = svc.attendance_for(&session_id).await.unwrap();

    let batch = || {
        existing
            .iter()
            .map(|row| {
                Upsert::existing(
                    row.id.clone(),
                    NewAttendance {
                        session_id: row.session_id.clone(),
                        player_id: row.player_id.clone(),
                        status: Some(AttendanceStatus::Absent),
                        notes: Some("lluvia".into()),
                    },
                )
            })
            .collect::<Vec<_>>()
    };

    svc.save_attendance(batch()).await.unwrap();
    let once = svc.attendance().list().await.unwrap();
    svc.save_attendance(batch()).await.unwrap();
    let twice = svc.attendance().list().await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.len(), 3);
    assert!(once.iter().all(|r| r.status == AttendanceStatus::Absent));
}

#[tokio::test]
async fn attendance_batch_of_three_with_one_existing() {
    let svc = test_service();
    let session_id = session_with_children(&svc, 0, 1, 0).await;
    let existing = svc.attendance_for(&session_id).await.unwrap().remove(0);
    assert_eq!(existing.status, AttendanceStatus::Present);

    let mark = |player: &str, status: AttendanceStatus| NewAttendance {
        session_id: session_id.clone(),
        player_id: player.into(),
        status: Some(status),
        notes: None,
    };
    let saved = svc
        .save_attendance(vec![
            Upsert::existing(existing.id.clone(), mark(&existing.player_id, AttendanceStatus::Late)),
            Upsert::new(mark("ply-7", AttendanceStatus::Present)),
            Upsert::new(mark("ply-8", AttendanceStatus::Absent)),
        ])
        .await
        .unwrap();

    let ids: HashSet<_> = saved.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(saved[0].id, existing.id);
    assert_eq!(saved[0].status, AttendanceStatus::Late);
    assert_eq!(svc.attendance_for(&session_id).await.unwrap().len(), 3);
}

#[tokio::test]
async fn upsert_of_existing_session_behaves_like_update() {
    let svc = test_service();
    let session = svc
        .sessions()
        .create(NewSession {
            responsible_user_id: Some("usr-original".into()),
            ..NewSession::new("tem-1", day(3))
        })
        .await
        .unwrap();
    svc.sessions()
        .update(&session.id, SessionUpdateBuilder::new().status(SessionStatus::Completed).build())
        .await
        .unwrap();

    let saved = svc
        .sessions()
        .upsert_many(vec![Upsert::existing(
            session.id.clone(),
            NewSession {
                objective: Some("Transiciones".into()),
                ..NewSession::new("tem-1", day(3))
            },
        )])
        .await
        .unwrap();

    assert_eq!(saved[0].id, session.id);
    assert_eq!(saved[0].status, SessionStatus::Completed);
    assert_eq!(saved[0].responsible_user_id.as_deref(), Some("usr-original"));
    assert_eq!(saved[0].objective.as_deref(), Some("Transiciones"));
    assert_eq!(svc.sessions().get_by_id(&session.id).await.unwrap(), Some(saved[0].clone()));
}

// ---------------------------------------------------------------------------
// Lineup full-replace
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lineup_save_replaces_previous_lineup() {
    let svc = test_service();
    let scope = LineupScope::Match("mch-derby".into());
    let slot = |player: &str, n: u8| NewLineup {
        player_id: player.into(),
        is_starter: true,
        slot: Some(n),
        ..NewLineup::default()
    };

    svc.replace_lineup(&scope, vec![slot("ply-1", 1), slot("ply-2", 2), slot("ply-3", 3)])
        .await
        .unwrap();
    svc.replace_lineup(&LineupScope::Match("mch-other".into()), vec![slot("ply-9", 1)])
        .await
        .unwrap();
    svc.replace_lineup(&scope, vec![slot("ply-2", 1), slot("ply-4", 2)])
        .await
        .unwrap();

    let players: Vec<_> = svc
        .lineup_for(&scope)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.player_id)
        .collect();
    assert_eq!(players, vec!["ply-2", "ply-4"]);
    assert_eq!(svc.lineups().list().await.unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Team and player scenario
// ---------------------------------------------------------------------------

#[tokio::test]
async fn team_delete_keeps_player_with_dangling_reference() {
    let svc = test_service();
    let team = svc
        .teams()
        .create(NewTeam {
            name: "Sub-15 A".into(),
            ..NewTeam::default()
        })
        .await
        .unwrap();
    assert_eq!(team.name, "Sub-15 A");
    assert!(team.is_active);
    assert!(team.id.starts_with("tem-"));

    let player = svc
        .players()
        .create(NewPlayer {
            first_name: "Ana".into(),
            team_id: Some(team.id.clone()),
            ..NewPlayer::default()
        })
        .await
        .unwrap();

    svc.delete(EntityKind::Team, &team.id).await.unwrap();

    assert_eq!(svc.teams().get_by_id(&team.id).await.unwrap(), None);
    let orphan = svc.players().get_by_id(&player.id).await.unwrap().unwrap();
    assert_eq!(orphan.team_id, Some(team.id));
}

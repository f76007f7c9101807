use taskboard_core::{
    BoardConfig, ConfigError, FormRules, HoverState, InputValidationError, MoveOutcome,
    ProjectStatus, TaskBoard,
};
use uuid::Uuid;

fn board() -> TaskBoard {
    TaskBoard::new(BoardConfig::default()).unwrap()
}

#[test]
fn submitted_project_renders_in_active_lane() {
    let mut board = board();

    let id = board.submit_project("Site", "Build site", "3").unwrap();

    let active = board.lane_projects(ProjectStatus::Active);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, id);
    assert!(board.lane_projects(ProjectStatus::Finished).is_empty());
    assert_eq!(
        board.render(),
        "ACTIVE PROJECTS\n  Site\n  3 persons assigned\n  Build site\nFINISHED PROJECTS"
    );
    assert!(board.form().title.is_empty());
}

#[test]
fn invalid_submission_never_reaches_store() {
    let mut board = board();

    let err = board.submit_project("Site", "Build site", "9").unwrap_err();

    assert_eq!(err, InputValidationError::InvalidPeople);
    assert!(board.store().is_empty());
    assert_eq!(board.form().people, "9");
}

#[test]
fn full_drag_gesture_moves_card_between_lanes() {
    let mut board = board();
    let id = board.submit_project("Site", "Build site", "3").unwrap();

    let mut event = board.start_drag(id).unwrap();
    board.drag_over(ProjectStatus::Finished, &mut event);
    assert_eq!(board.hover_state(ProjectStatus::Finished), HoverState::HoverActive);
    assert!(board.render().contains("FINISHED PROJECTS *"));

    assert_eq!(board.drop_on(ProjectStatus::Finished, &event), MoveOutcome::Moved);
    board.end_drag(id, &event);

    assert!(board.lane_projects(ProjectStatus::Active).is_empty());
    assert_eq!(board.lane_projects(ProjectStatus::Finished)[0].id, id);
    assert_eq!(board.hover_state(ProjectStatus::Finished), HoverState::Idle);
    assert!(!board.render().contains('*'));
}

#[test]
fn drag_and_leave_without_drop_changes_nothing() {
    let mut board = board();
    let id = board.submit_project("Site", "Build site", "3").unwrap();

    let mut event = board.start_drag(id).unwrap();
    board.drag_over(ProjectStatus::Finished, &mut event);
    board.drag_leave(ProjectStatus::Finished, &event);
    board.end_drag(id, &event);

    assert_eq!(board.store().get(id).unwrap().status, ProjectStatus::Active);
    assert_eq!(board.hover_state(ProjectStatus::Finished), HoverState::Idle);
}

#[test]
fn start_drag_for_unknown_project_is_none() {
    let board = board();
    assert!(board.start_drag(Uuid::new_v4()).is_none());
}

#[test]
fn invalid_config_is_rejected() {
    let config = BoardConfig {
        form: FormRules {
            people_min: 3,
            people_max: 1,
            ..FormRules::default()
        },
        ..BoardConfig::default()
    };

    let err = TaskBoard::new(config).unwrap_err();
    assert_eq!(err, ConfigError::InvertedPeopleRange { min: 3, max: 1 });
}

#[test]
fn lane_views_subscribe_once_each() {
    let board = board();
    assert_eq!(board.store().listener_count(), 2);
}

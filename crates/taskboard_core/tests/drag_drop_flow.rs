use std::sync::{Arc, Mutex};
use taskboard_core::{
    DragDropCoordinator, DragEvent, Draggable, HoverState, MoveOutcome, ProjectItem, ProjectStatus,
    ProjectStore, PLAIN_TEXT,
};

fn drag_event_for(store: &ProjectStore, index: usize) -> DragEvent {
    let item = ProjectItem::new(store.snapshot()[index].clone());
    let mut event = DragEvent::new();
    item.drag_start(&mut event);
    event
}

#[test]
fn dropping_on_other_lane_moves_project() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Site", "Build site", 3);
    let mut coordinator = DragDropCoordinator::new();
    let mut event = drag_event_for(&store, 0);

    coordinator.drag_over(ProjectStatus::Finished, &mut event);
    assert!(event.default_prevented());
    assert_eq!(
        coordinator.hover_state(ProjectStatus::Finished),
        HoverState::HoverActive
    );
    assert_eq!(coordinator.hover_state(ProjectStatus::Active), HoverState::Idle);

    let outcome = coordinator.drop_on(ProjectStatus::Finished, &event, &mut store);

    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Finished);
    assert_eq!(coordinator.hover_state(ProjectStatus::Finished), HoverState::Idle);
}

#[test]
fn dropping_back_on_own_lane_does_not_notify() {
    let mut store = ProjectStore::new();
    store.add_project("Site", "Build site", 3);
    let notified = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&notified);
    store.add_listener(Box::new(move |_| *counter.lock().unwrap() += 1));
    let mut coordinator = DragDropCoordinator::new();
    let mut event = drag_event_for(&store, 0);

    coordinator.drag_over(ProjectStatus::Active, &mut event);
    let outcome = coordinator.drop_on(ProjectStatus::Active, &event, &mut store);

    assert_eq!(outcome, MoveOutcome::AlreadyInStatus);
    assert_eq!(*notified.lock().unwrap(), 0);
}

#[test]
fn unrecognized_payload_keeps_lane_idle() {
    let mut coordinator = DragDropCoordinator::new();
    let mut event = DragEvent::new();
    if let Some(transfer) = event.data_transfer.as_mut() {
        transfer.set_data("text/html", "<b>card</b>");
        transfer.set_data(PLAIN_TEXT, "ignored because not first");
    }

    coordinator.drag_over(ProjectStatus::Finished, &mut event);

    assert!(!event.default_prevented());
    assert_eq!(coordinator.hover_state(ProjectStatus::Finished), HoverState::Idle);
}

#[test]
fn leave_clears_hover_without_payload_check() {
    let mut store = ProjectStore::new();
    store.add_project("Site", "Build site", 3);
    let mut coordinator = DragDropCoordinator::new();
    let mut event = drag_event_for(&store, 0);
    coordinator.drag_over(ProjectStatus::Finished, &mut event);

    coordinator.drag_leave(ProjectStatus::Finished, &DragEvent::without_transfer());

    assert_eq!(coordinator.hover_state(ProjectStatus::Finished), HoverState::Idle);
}

#[test]
fn drop_resolves_id_even_after_card_rerender() {
    let mut store = ProjectStore::new();
    store.add_project("Site", "Build site", 3);
    let target = store.add_project("Docs", "Write docs", 1);
    let mut coordinator = DragDropCoordinator::new();
    let mut event = drag_event_for(&store, 1);

    // A later mutation re-renders every card before the drop lands.
    store.add_project("Later", "Created mid-drag", 2);

    coordinator.drag_over(ProjectStatus::Finished, &mut event);
    assert_eq!(
        coordinator.drop_on(ProjectStatus::Finished, &event, &mut store),
        MoveOutcome::Moved
    );
    let finished: Vec<_> = store
        .snapshot()
        .into_iter()
        .filter(|p| p.status == ProjectStatus::Finished)
        .map(|p| p.id)
        .collect();
    assert_eq!(finished, vec![target]);
}

#[test]
fn drop_without_transfer_is_rejected() {
    let mut store = ProjectStore::new();
    store.add_project("Site", "Build site", 3);
    let before = store.snapshot();
    let mut coordinator = DragDropCoordinator::new();

    let outcome = coordinator.drop_on(
        ProjectStatus::Finished,
        &DragEvent::without_transfer(),
        &mut store,
    );

    assert_eq!(outcome, MoveOutcome::DropRejected);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn drop_after_refused_drag_over_does_not_move() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Site", "Build site", 3);
    let notified = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&notified);
    store.add_listener(Box::new(move |_| *counter.lock().unwrap() += 1));
    let mut coordinator = DragDropCoordinator::new();
    let mut event = DragEvent::new();
    if let Some(transfer) = event.data_transfer.as_mut() {
        transfer.set_data("text/html", "<b>card</b>");
        transfer.set_data(PLAIN_TEXT, id.to_string());
    }

    coordinator.drag_over(ProjectStatus::Finished, &mut event);
    assert!(!event.default_prevented());
    let outcome = coordinator.drop_on(ProjectStatus::Finished, &event, &mut store);

    assert_eq!(outcome, MoveOutcome::DropRejected);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
    assert_eq!(*notified.lock().unwrap(), 0);
    assert_eq!(coordinator.hover_state(ProjectStatus::Finished), HoverState::Idle);
}

#[test]
fn drop_after_leave_on_fresh_event_is_rejected() {
    let mut store = ProjectStore::new();
    let id = store.add_project("Site", "Build site", 3);
    let mut coordinator = DragDropCoordinator::new();
    let mut event = drag_event_for(&store, 0);
    coordinator.drag_over(ProjectStatus::Finished, &mut event);
    coordinator.drag_leave(ProjectStatus::Finished, &event);

    let mut stale = DragEvent::new();
    if let Some(transfer) = stale.data_transfer.as_mut() {
        transfer.set_data(PLAIN_TEXT, id.to_string());
    }
    let outcome = coordinator.drop_on(ProjectStatus::Finished, &stale, &mut store);

    assert_eq!(outcome, MoveOutcome::DropRejected);
    assert_eq!(store.get(id).unwrap().status, ProjectStatus::Active);
}

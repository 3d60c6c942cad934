use barber_finder::app::LOAD_ERROR_MESSAGE;
use barber_finder::source::{BundledSource, JsonFileSource, StaticSource};
use barber_finder::ui::{DetailScreen, ListViewModel, NOT_FOUND_MESSAGE};
use barber_finder::{
    handle_event, initialize, Action, ActiveFilters, BarberId, BarberRecord, Config,
    DirectoryError, DirectoryState, Event,
};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

fn bundled() -> DirectoryState {
    let mut state = DirectoryState::new(Box::new(BundledSource));
    state.load();
    state
}

fn ids(state: &DirectoryState) -> Vec<BarberId> {
    state.derived_view().iter().map(|record| record.id.clone()).collect()
}

fn two_record_dataset() -> Vec<BarberRecord> {
    vec![
        BarberRecord {
            address: Some("Centro".to_string()),
            rating: Some(4.5),
            is_open: true,
            services: vec!["Barba".to_string()],
            ..BarberRecord::new(1, "Ana Cortes")
        },
        BarberRecord {
            address: Some("Jardins".to_string()),
            rating: Some(3.0),
            is_open: false,
            services: vec!["Corte Feminino".to_string()],
            ..BarberRecord::new(2, "Bela Hair")
        },
    ]
}

#[test]
fn default_criteria_show_whole_dataset() {
    let state = bundled();
    assert_eq!(state.derived_view(), state.dataset());
    assert_eq!(state.dataset().len(), 8);
}

#[test]
fn name_search_only_keeps_containing_records() {
    let mut state = bundled();
    state.set_search_terms("BAR", "");

    assert_eq!(ids(&state), vec![BarberId::Int(1), BarberId::Int(6)]);
    let contains_bar =
        |record: &BarberRecord| record.name.as_deref().unwrap_or_default().to_lowercase().contains("bar");

    assert!(state.derived_view().iter().all(contains_bar));
    for record in state.dataset().iter().filter(|&record| contains_bar(record)) {
        assert!(state.derived_view().contains(record), "{} should be listed", record.id);
    }
}

#[test]
fn region_search_matches_address() {
    let mut state = bundled();
    state.set_search_terms("", "  pinheiros ");
    assert_eq!(ids(&state), vec![BarberId::Int(3), BarberId::Int(6)]);
}

#[test]
fn open_filter_then_reset_restores_dataset() {
    let mut state = bundled();
    state.apply_filters(ActiveFilters::open_only());
    assert!(state.derived_view().iter().all(|record| record.is_open));
    assert!(state.derived_view().len() < state.dataset().len());

    state.reset_all();
    assert_eq!(state.derived_view(), state.dataset());
    assert!(state.criteria().is_default());
}

#[test]
fn service_filter_is_any_of() {
    let mut state = bundled();
    state.apply_filters(ActiveFilters::default().with_services(["Barba", "Relaxamento"]));

    assert_eq!(
        ids(&state),
        vec![
            BarberId::Int(1),
            BarberId::Int(2),
            BarberId::Int(4),
            BarberId::Int(5),
            BarberId::Int(6),
        ]
    );
}

#[test]
fn min_rating_excludes_unrated_and_lower() {
    let mut state = bundled();
    state.apply_filters(ActiveFilters::default().with_min_rating(4.0));

    assert_eq!(
        ids(&state),
        vec![
            BarberId::Int(1),
            BarberId::Int(2),
            BarberId::Int(3),
            BarberId::Int(6),
            BarberId::Int(7),
        ]
    );
    assert!(state.derived_view().iter().all(|r| r.rating.is_some_and(|v| v >= 4.0)));
}

#[test]
fn search_and_open_filter_combine() {
    let mut state = DirectoryState::new(Box::new(StaticSource::new(two_record_dataset())));
    state.load();

    state.set_search_terms("a", "");
    assert_eq!(state.derived_view().len(), 2);

    state.apply_filters(ActiveFilters::open_only());
    assert_eq!(ids(&state), vec![BarberId::Int(1)]);
}

#[test]
fn detail_lookup_follows_derived_view() {
    let mut state = DirectoryState::new(Box::new(StaticSource::new(two_record_dataset())));
    state.load();
    state.apply_filters(ActiveFilters::open_only());

    let hidden = BarberId::Int(2);
    assert!(matches!(state.lookup_detail(&hidden), Err(DirectoryError::NotFound(_))));
    assert!(state.lookup_in_dataset(&hidden).is_ok());
    assert_eq!(
        DetailScreen::lookup(&state, &hidden),
        DetailScreen::NotFound { message: NOT_FOUND_MESSAGE }
    );

    state.reset_all();
    assert!(matches!(DetailScreen::lookup(&state, &hidden), DetailScreen::Found(_)));
}

#[test]
fn observers_see_every_mutation() {
    let mut state = bundled();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = state.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.derived_view.len()));

    state.set_search_terms("", "pinheiros");
    state.apply_filters(ActiveFilters::open_only());
    state.reset_all();
    assert_eq!(*seen.borrow(), vec![2, 2, 8]);

    assert!(state.unsubscribe(id));
    state.set_search_terms("zzz", "");
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn events_drive_container_and_emit_actions() {
    let mut state = initialize(&Config::default());

    let (changed, actions) = handle_event(&mut state, &Event::ToggleService("Barba".to_string())).unwrap();
    assert!(changed);
    assert!(actions.is_empty());

    let (_, actions) = handle_event(&mut state, &Event::CallRecord(BarberId::Int(1))).unwrap();
    assert_eq!(actions, vec![Action::OpenUrl("tel:+55 11 3256-1020".to_string())]);

    let (_, actions) = handle_event(&mut state, &Event::SelectRecord(BarberId::Int(2))).unwrap();
    assert_eq!(actions, vec![Action::ShowNotFound(BarberId::Int(2))]);
}

#[test]
fn unreadable_file_sets_error_and_empties_view() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{ not a list").unwrap();

    let mut state = DirectoryState::new(Box::new(JsonFileSource::new(file.path())));
    state.load();

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some(LOAD_ERROR_MESSAGE));
    assert!(state.derived_view().is_empty());
    assert_eq!(ListViewModel::from_state(&state), ListViewModel::Error(LOAD_ERROR_MESSAGE.to_string()));
}

#[test]
fn reload_picks_up_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("barbers.json");
    std::fs::write(&path, r#"[{"id": 1, "name": "Ana Cortes", "isOpen": true}]"#).unwrap();

    let mut state = DirectoryState::new(Box::new(JsonFileSource::new(&path)));
    state.load();
    state.set_search_terms("ana", "");
    assert_eq!(state.derived_view().len(), 1);

    std::fs::write(
        &path,
        r#"[{"id": 1, "name": "Ana Cortes"}, {"id": "b-2", "name": "Anabela"}]"#,
    )
    .unwrap();
    state.reload();

    assert_eq!(state.search_name(), "ana");
    assert_eq!(ids(&state), vec![BarberId::Int(1), BarberId::from("b-2")]);
}

//! Tests for the tracker module.

use std::{collections::BTreeSet, error::Error as _};

use super::*;
use crate::models::{CodeExample, Completion, Task};

fn create_test_module(id: &str, step_count: u32) -> Module {
    Module {
        id: id.to_string(),
        title: format!("Module {id}"),
        intro: "Intro".to_string(),
        steps: (1..=step_count)
            .map(|index| Step {
                index,
                title: format!("Step {index}"),
                explanation: "Explanation".to_string(),
                snippet: Some(CodeExample {
                    title: "src/App.jsx".to_string(),
                    body: "const App = () => null;".to_string(),
                    highlighted_lines: Default::default(),
                }),
            })
            .collect(),
        tasks: (1..=step_count)
            .map(|index| Task::from(format!("Task {index}").as_str()))
            .collect(),
        completion: Some(Completion {
            summary: "Done".to_string(),
            next_module: None,
        }),
    }
}

fn create_test_registry() -> ContentRegistry {
    ContentRegistry::from_modules(vec![
        create_test_module("1-react-basics", 6),
        create_test_module("2-state", 3),
    ])
    .expect("Failed to build registry")
}

#[test]
fn test_fresh_tracker_has_nothing_complete() {
    let registry = create_test_registry();
    let tracker = ProgressTracker::new(&registry);

    for module in registry.modules() {
        assert!(!tracker.is_module_complete(&module.id));
        assert_eq!(tracker.module_status(&module.id), ModuleStatus::NotStarted);
    }
    assert!(tracker.current_step().is_none());
    assert_eq!(tracker.state(), &ProgressState::default());
}

#[test]
fn test_first_step_starts_and_final_step_completes() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);

    let status = tracker
        .advance_to("1-react-basics", 1)
        .expect("Failed to advance");
    assert_eq!(status, ModuleStatus::InProgress);
    assert!(!tracker.is_module_complete("1-react-basics"));

    let status = tracker
        .advance_to("1-react-basics", 6)
        .expect("Failed to advance");
    assert_eq!(status, ModuleStatus::Completed);
    assert!(tracker.is_module_complete("1-react-basics"));
    assert_eq!(tracker.state().position(), Some(("1-react-basics", 6)));
}

#[test]
fn test_middle_step_starts_module() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);

    tracker.advance_to("1-react-basics", 3).expect("advance");
    assert_eq!(tracker.module_status("1-react-basics"), ModuleStatus::InProgress);
    assert_eq!(tracker.module_status("2-state"), ModuleStatus::NotStarted);
}

#[test]
fn test_advance_to_is_idempotent() {
    let registry = create_test_registry();

    for step in 1..=6 {
        let mut once = ProgressTracker::new(&registry);
        once.advance_to("1-react-basics", step).expect("advance");

        let mut twice = ProgressTracker::new(&registry);
        twice.advance_to("1-react-basics", step).expect("advance");
        twice.advance_to("1-react-basics", step).expect("advance");

        assert_eq!(once.state(), twice.state(), "step {step}");
    }
}

#[test]
fn test_completed_module_never_regresses() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("1-react-basics", 6).expect("advance");

    for step in (1..=6).rev() {
        let status = tracker.advance_to("1-react-basics", step).expect("advance");
        assert_eq!(status, ModuleStatus::Completed);
    }
    tracker.advance_to("2-state", 1).expect("advance");
    assert!(tracker.is_module_complete("1-react-basics"));
}

#[test]
fn test_invalid_targets_leave_state_unchanged() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("1-react-basics", 2).expect("advance");
    let before = tracker.state().clone();

    let err = tracker
        .advance_to("does-not-exist", 1)
        .expect_err("unknown module should fail");
    assert!(matches!(err, TutorialError::InvalidTransition { .. }));
    assert_eq!(
        err.source().map(|source| source.to_string()),
        Some("Module 'does-not-exist' not found".to_string())
    );
    assert_eq!(tracker.state(), &before);

    let err = tracker
        .advance_to("1-react-basics", 7)
        .expect_err("out of range step should fail");
    assert!(matches!(err, TutorialError::InvalidTransition { .. }));
    assert_eq!(tracker.state(), &before);

    tracker
        .advance_to("1-react-basics", 0)
        .expect_err("step zero should fail");
    assert_eq!(tracker.state(), &before);
}

#[test]
fn test_completion_marks_every_task() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);

    tracker.advance_to("2-state", 2).expect("advance");
    let checklist = tracker.checklist("2-state").expect("checklist");
    assert_eq!(checklist.len(), 3);
    assert!(checklist.iter().all(|item| !item.completed));

    tracker.advance_to("2-state", 3).expect("advance");
    let checklist = tracker.checklist("2-state").expect("checklist");
    assert!(checklist.iter().all(|item| item.completed));
    assert_eq!(
        checklist.iter().map(|item| item.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        tracker.state().completed_tasks_by_module["2-state"],
        BTreeSet::from([1, 2, 3])
    );
}

#[test]
fn test_checklist_unknown_module() {
    let registry = create_test_registry();
    let tracker = ProgressTracker::new(&registry);
    assert!(matches!(
        tracker.checklist("missing"),
        Err(TutorialError::ModuleNotFound { .. })
    ));
}

#[test]
fn test_reset_module() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("2-state", 3).expect("advance");
    tracker.advance_to("1-react-basics", 6).expect("advance");

    tracker.reset_module("2-state").expect("reset");
    assert_eq!(tracker.module_status("2-state"), ModuleStatus::NotStarted);
    assert!(!tracker.state().completed_tasks_by_module.contains_key("2-state"));
    // Position was elsewhere and survives
    assert_eq!(tracker.state().position(), Some(("1-react-basics", 6)));

    tracker.reset_module("1-react-basics").expect("reset");
    assert_eq!(tracker.state().position(), None);
    assert_eq!(tracker.state(), &ProgressState::default());

    // After a reset the module can be completed again
    assert_eq!(
        tracker.advance_to("1-react-basics", 6).expect("advance"),
        ModuleStatus::Completed
    );
}

#[test]
fn test_reset_unknown_module() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    assert!(matches!(
        tracker.reset_module("missing"),
        Err(TutorialError::ModuleNotFound { .. })
    ));
}

#[test]
fn test_advance_next_walks_the_catalog() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);

    assert_eq!(tracker.advance_next().expect("start"), ModuleStatus::InProgress);
    assert_eq!(tracker.state().position(), Some(("1-react-basics", 1)));

    for _ in 2..=6 {
        tracker.advance_next().expect("next");
    }
    assert!(tracker.is_module_complete("1-react-basics"));

    tracker.advance_next().expect("next module");
    assert_eq!(tracker.state().position(), Some(("2-state", 1)));

    tracker.advance_next().expect("next");
    tracker.advance_next().expect("next");
    let before = tracker.state().clone();
    let err = tracker.advance_next().expect_err("end of catalog");
    assert!(matches!(err, TutorialError::InvalidTransition { .. }));
    assert_eq!(tracker.state(), &before);
}

#[test]
fn test_advance_back() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);

    assert!(tracker.advance_back().is_err());

    tracker.advance_to("1-react-basics", 2).expect("advance");
    tracker.advance_back().expect("back");
    assert_eq!(tracker.state().position(), Some(("1-react-basics", 1)));

    let err = tracker.advance_back().expect_err("first step");
    assert!(err.to_string().contains("first step"));
}

#[test]
fn test_current_step() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("2-state", 2).expect("advance");

    let (module, step) = tracker.current_step().expect("current step");
    assert_eq!(module.id, "2-state");
    assert_eq!(step.index, 2);
}

#[test]
fn test_overview_marks_current_module() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("1-react-basics", 6).expect("advance");
    tracker.advance_to("2-state", 1).expect("advance");

    let overview = tracker.overview();
    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].status, ModuleStatus::Completed);
    assert!(!overview[0].is_current);
    assert_eq!(overview[1].status, ModuleStatus::InProgress);
    assert!(overview[1].is_current);
}

#[test]
fn test_state_round_trip_through_json() {
    let registry = create_test_registry();
    let mut tracker = ProgressTracker::new(&registry);
    tracker.advance_to("1-react-basics", 6).expect("advance");
    tracker.advance_to("2-state", 2).expect("advance");

    let json = tracker.state().to_json().expect("serialize");
    let restored = ProgressState::from_json(&json).expect("deserialize");
    assert_eq!(&restored, tracker.state());

    let resumed = ProgressTracker::resume(&registry, restored);
    assert_eq!(resumed.state(), tracker.state());
}

#[test]
fn test_resume_discards_stale_entries() {
    let registry = create_test_registry();
    let mut state = ProgressState {
        current_module_id: Some("removed-module".to_string()),
        current_step_index: Some(1),
        ..Default::default()
    };
    state
        .module_statuses
        .insert("removed-module".to_string(), ModuleStatus::Completed);
    state
        .module_statuses
        .insert("2-state".to_string(), ModuleStatus::InProgress);
    state
        .completed_tasks_by_module
        .insert("removed-module".to_string(), [1].into());

    let tracker = ProgressTracker::resume(&registry, state);
    assert_eq!(tracker.state().position(), None);
    assert_eq!(tracker.module_status("2-state"), ModuleStatus::InProgress);
    assert!(!tracker.state().module_statuses.contains_key("removed-module"));
    assert!(!tracker
        .state()
        .completed_tasks_by_module
        .contains_key("removed-module"));
}

#[test]
fn test_resume_derives_task_ticks_from_status() {
    let registry = create_test_registry();
    let mut state = ProgressState::default();
    // Completed before the module gained tasks, so no ticks were saved
    state
        .module_statuses
        .insert("2-state".to_string(), ModuleStatus::Completed);
    // Ticks without a completed status
    state
        .completed_tasks_by_module
        .insert("1-react-basics".to_string(), [1, 2, 99].into());

    let tracker = ProgressTracker::resume(&registry, state);

    let completed = tracker.checklist("2-state").expect("checklist");
    assert_eq!(completed.completed_count(), 3);
    assert_eq!(
        tracker.state().completed_tasks_by_module["2-state"],
        BTreeSet::from([1, 2, 3])
    );

    let not_started = tracker.checklist("1-react-basics").expect("checklist");
    assert_eq!(not_started.completed_count(), 0);
    assert!(!tracker
        .state()
        .completed_tasks_by_module
        .contains_key("1-react-basics"));
}

#[test]
fn test_resume_ticks_tasks_added_after_completion() {
    let registry = create_test_registry();
    let mut state = ProgressState::default();
    state
        .module_statuses
        .insert("1-react-basics".to_string(), ModuleStatus::Completed);
    // Saved when the module had five tasks
    state
        .completed_tasks_by_module
        .insert("1-react-basics".to_string(), (1..=5).collect());

    let tracker = ProgressTracker::resume(&registry, state);
    let checklist = tracker.checklist("1-react-basics").expect("checklist");
    assert_eq!(checklist.len(), 6);
    assert!(checklist.iter().all(|item| item.completed));
}

#[test]
fn test_resume_clears_half_set_position() {
    let registry = create_test_registry();
    let state = ProgressState {
        current_module_id: Some("2-state".to_string()),
        current_step_index: None,
        ..Default::default()
    };

    let tracker = ProgressTracker::resume(&registry, state);
    assert_eq!(tracker.state().current_module_id, None);
}

#[test]
fn test_single_step_module_completes_immediately() {
    let registry = ContentRegistry::from_modules(vec![create_test_module("solo", 1)])
        .expect("registry");
    let mut tracker = ProgressTracker::new(&registry);

    assert_eq!(
        tracker.advance_to("solo", 1).expect("advance"),
        ModuleStatus::Completed
    );
}

#[test]
fn test_advance_next_on_empty_registry() {
    let registry = ContentRegistry::from_modules(Vec::new()).expect("registry");
    let mut tracker = ProgressTracker::new(&registry);
    assert!(matches!(
        tracker.advance_next(),
        Err(TutorialError::InvalidTransition { .. })
    ));
}

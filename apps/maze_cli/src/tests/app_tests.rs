use crossbeam_channel::{bounded, Receiver};
use maze_core::{CellCategory, MazeError, Operation};
use shared::{
    domain::{MazeId, PointId},
    protocol::MazeRecord,
};

use super::*;

fn p(name: &str) -> PointId {
    PointId::from_canonical(name)
}

fn record(maze_id: i64) -> MazeRecord {
    MazeRecord {
        maze_id: MazeId(maze_id),
        grid_size: GridSize::new(3, 3).expect("grid"),
        entrance: Some(p("A1")),
        walls: vec![p("C1")],
    }
}

fn app() -> (MazeApp, Receiver<BackendCommand>) {
    let (cmd_tx, cmd_rx) = bounded(16);
    let default_grid = GridSize::new(10, 10).expect("grid");
    (
        MazeApp::new(cmd_tx, Some("alice".to_string()), default_grid),
        cmd_rx,
    )
}

fn loaded_app() -> (MazeApp, Receiver<BackendCommand>) {
    let (mut app, cmd_rx) = app();
    app.handle_event(UiEvent::MazesLoaded(Ok(vec![record(5)])));
    (app, cmd_rx)
}

fn take_solve_ticket(cmd_rx: &Receiver<BackendCommand>) -> maze_core::SolveTicket {
    match cmd_rx.try_recv().expect("queued command") {
        BackendCommand::Solve { ticket } => ticket,
        other => panic!("unexpected command {other:?}"),
    }
}

fn alerts(outputs: &[Output]) -> Vec<&str> {
    outputs
        .iter()
        .filter_map(|output| match output {
            Output::Alert(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn start_requests_the_maze_list() {
    let (mut app, cmd_rx) = app();
    assert!(app.start().is_empty());
    assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::LoadMazes)));
}

#[test]
fn loaded_list_draws_header_and_every_slot() {
    let (mut app, _cmd_rx) = app();
    let outputs = app.handle_event(UiEvent::MazesLoaded(Ok(vec![record(5), record(6)])));
    assert_eq!(outputs[0], Output::Info("USER : alice".to_string()));
    let draws = outputs
        .iter()
        .filter(|output| matches!(output, Output::Draw(_)))
        .count();
    assert_eq!(draws, 3);
}

#[test]
fn create_without_size_prompts_and_uses_default() {
    let (mut app, _cmd_rx) = app();
    let prompt = app.handle_line("create 0");
    assert!(matches!(&prompt[0], Output::Info(text) if text.contains("such as 5x5")));

    let outputs = app.handle_line("");
    assert!(matches!(&outputs[0], Output::Draw(text) if text.starts_with("[0] new maze 10x10")));
}

#[test]
fn malformed_create_alerts_without_state_change() {
    let (mut app, _cmd_rx) = app();
    let outputs = app.handle_line("create 0 0x5");
    assert_eq!(
        alerts(&outputs),
        vec!["Grid Size does not have the proper format such as 10x10"]
    );
    assert!(app
        .board
        .slot(NEW_MAZE_SLOT)
        .expect("slot")
        .grid_size()
        .is_none());
}

#[test]
fn submit_without_entrance_alerts_and_sends_nothing() {
    let (mut app, cmd_rx) = app();
    app.handle_line("create 0 3x3");
    app.handle_line("click 0 B2");

    let outputs = app.handle_line("submit 0");
    assert!(alerts(&outputs)[0].starts_with("Maze entrance is not defined"));
    assert!(cmd_rx.try_recv().is_err());
}

#[test]
fn drawn_maze_is_queued_for_submission() {
    let (mut app, cmd_rx) = app();
    app.handle_line("create 0 3x3");
    app.handle_line("click 0 b2");
    app.handle_line("e");
    app.handle_line("click 0 A1");

    app.handle_line("submit 0");
    match cmd_rx.try_recv().expect("queued") {
        BackendCommand::Submit { slot, request } => {
            assert_eq!(slot, 0);
            assert_eq!(request.entrance, p("A1"));
            assert_eq!(request.walls, vec![p("B2")]);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn blur_drops_held_entrance_key() {
    let (mut app, _cmd_rx) = app();
    app.handle_line("create 0 3x3");
    app.handle_line("hold-entrance");
    app.handle_line("blur");
    app.handle_line("click 0 A1");

    let model = app.board.slot(NEW_MAZE_SLOT).expect("slot");
    assert!(model.entrance().is_none());
    assert!(model.is_wall(&p("A1")));
}

#[test]
fn successful_submit_rehydrates_every_slot() {
    let (mut app, _cmd_rx) = app();
    app.handle_line("create 0 3x3");

    let outputs = app.handle_event(UiEvent::Submitted {
        slot: 0,
        result: Ok((Some(MazeId(42)), vec![record(5), record(42)])),
    });
    assert_eq!(
        outputs.last(),
        Some(&Output::Info("maze #42 created".to_string()))
    );
    assert_eq!(app.board.len(), 3);
    assert!(app
        .board
        .slot(NEW_MAZE_SLOT)
        .expect("slot")
        .grid_size()
        .is_none());
}

#[test]
fn solve_completion_overlays_path() {
    let (mut app, cmd_rx) = loaded_app();
    app.handle_line("solve 1 min");
    let ticket = take_solve_ticket(&cmd_rx);

    let outputs = app.handle_event(UiEvent::Solved {
        ticket,
        result: Ok(vec![p("A1"), p("A2"), p("B2")]),
    });
    assert!(matches!(&outputs[0], Output::Draw(text) if text.contains("[CLEAR PATH]")));

    let view = app.board.view(1).expect("view");
    assert_eq!(view.category_of(&p("A2")), Some(CellCategory::Path));
    assert_eq!(view.category_of(&p("A1")), Some(CellCategory::Entrance));
}

#[test]
fn late_completion_of_superseded_solve_is_dropped() {
    let (mut app, cmd_rx) = loaded_app();
    app.handle_line("solve 1 min");
    let min_ticket = take_solve_ticket(&cmd_rx);
    app.handle_line("solve 1 max");
    let max_ticket = take_solve_ticket(&cmd_rx);

    app.handle_event(UiEvent::Solved {
        ticket: max_ticket,
        result: Ok(vec![p("C3")]),
    });
    let outputs = app.handle_event(UiEvent::Solved {
        ticket: min_ticket,
        result: Ok(vec![p("A2")]),
    });

    assert!(outputs.is_empty());
    let model = app.board.slot(1).expect("slot");
    assert!(model.max_path_set().is_some());
    assert!(model.min_path_set().is_none());
}

#[test]
fn failed_solve_alerts_with_status() {
    let (mut app, cmd_rx) = loaded_app();
    app.handle_line("solve 1 min");
    let ticket = take_solve_ticket(&cmd_rx);

    let outputs = app.handle_event(UiEvent::Solved {
        ticket,
        result: Err(MazeError::RemoteFailure {
            operation: Operation::Solve(PathKind::Min),
            status: 500,
        }),
    });
    assert_eq!(
        alerts(&outputs),
        vec!["Failure to solve min path for maze. Error = 500"]
    );
}

#[test]
fn solve_with_dead_backend_alerts_and_stays_solvable() {
    let (mut app, cmd_rx) = loaded_app();
    drop(cmd_rx);

    let outputs = app.handle_line("solve 1 min");
    assert_eq!(
        alerts(&outputs),
        vec!["Backend request worker is not running; restart the editor"]
    );
    let view = app.board.view(1).expect("view");
    assert!(!app.board.slot(1).expect("slot").has_overlay());
    assert_eq!(
        view.actions,
        vec![
            maze_core::Action::Solve(PathKind::Min),
            maze_core::Action::Solve(PathKind::Max)
        ]
    );
}

#[test]
fn second_solve_while_path_shown_is_refused() {
    let (mut app, cmd_rx) = loaded_app();
    app.handle_line("solve 1 max");
    let ticket = take_solve_ticket(&cmd_rx);
    app.handle_event(UiEvent::Solved {
        ticket,
        result: Ok(vec![p("B1")]),
    });

    let outputs = app.handle_line("solve 1 min");
    assert_eq!(
        alerts(&outputs),
        vec!["Clear the displayed path before solving again"]
    );
    assert!(cmd_rx.try_recv().is_err());
}

#[test]
fn submitted_slot_is_not_resubmitted_or_recreated() {
    let (mut app, cmd_rx) = loaded_app();

    assert_eq!(
        alerts(&app.handle_line("submit 1")),
        vec!["Maze is already submitted"]
    );
    assert!(cmd_rx.try_recv().is_err());

    assert_eq!(
        alerts(&app.handle_line("create 1 5x5")),
        vec!["Maze grid size is already defined"]
    );
    assert_eq!(
        alerts(&app.handle_line("create 1")),
        vec!["Maze grid size is already defined"]
    );
    assert_eq!(
        app.board.slot(1).expect("slot").grid_size(),
        Some(GridSize::new(3, 3).expect("grid"))
    );
}

#[test]
fn reload_cancels_an_open_size_prompt() {
    let (mut app, _cmd_rx) = app();
    app.handle_line("create 0");

    let outputs = app.handle_event(UiEvent::MazesLoaded(Ok(vec![record(5)])));
    assert!(matches!(&outputs[0], Output::Info(text) if text.contains("cancelled")));

    let outputs = app.handle_line("5x5");
    assert!(matches!(&outputs[0], Output::Info(text) if text.contains("unrecognised command")));
    assert!(app
        .board
        .slot(NEW_MAZE_SLOT)
        .expect("slot")
        .grid_size()
        .is_none());
    assert_eq!(
        app.board.slot(1).expect("slot").grid_size(),
        Some(GridSize::new(3, 3).expect("grid"))
    );
}

#[test]
fn clear_removes_overlay() {
    let (mut app, cmd_rx) = loaded_app();
    app.handle_line("solve 1 min");
    let ticket = take_solve_ticket(&cmd_rx);
    app.handle_event(UiEvent::Solved {
        ticket,
        result: Ok(vec![p("A2")]),
    });

    app.handle_line("clear 1");
    assert!(!app.board.slot(1).expect("slot").has_overlay());
}

#[test]
fn load_failure_is_alerted() {
    let (mut app, _cmd_rx) = app();
    let outputs = app.handle_event(UiEvent::MazesLoaded(Err(MazeError::RemoteFailure {
        operation: Operation::LoadMazes,
        status: 403,
    })));
    assert_eq!(alerts(&outputs), vec!["Failure to load mazes. Error = 403"]);
}

#[test]
fn unknown_slot_and_bad_input_are_reported() {
    let (mut app, _cmd_rx) = app();
    assert_eq!(
        alerts(&app.handle_line("create 9 3x3")),
        vec!["There is no maze in slot 9"]
    );
    assert!(matches!(
        &app.handle_line("fly away")[0],
        Output::Info(text) if text.contains("unrecognised command")
    ));
    assert_eq!(app.handle_line("quit"), vec![Output::Quit]);
}

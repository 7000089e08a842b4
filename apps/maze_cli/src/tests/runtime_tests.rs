use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maze_core::{MazeApi, MazeError, MazeResult, Operation};
use shared::{
    domain::{GridSize, MazeId, PathKind, PointId},
    protocol::{MazeCreation, MazeRecord, MazeSolution, PostMazeRequest},
};

use super::*;

#[derive(Default)]
struct FakeMazeApi {
    mazes: Mutex<Vec<MazeRecord>>,
    solutions: Mutex<Vec<(MazeId, PathKind)>>,
}

#[async_trait]
impl MazeApi for FakeMazeApi {
    async fn list_mazes(&self) -> MazeResult<Vec<MazeRecord>> {
        Ok(self.mazes.lock().expect("lock").clone())
    }

    async fn fetch_maze(&self, maze_id: MazeId) -> MazeResult<MazeRecord> {
        self.mazes
            .lock()
            .expect("lock")
            .iter()
            .find(|record| record.maze_id == maze_id)
            .cloned()
            .ok_or(MazeError::RemoteFailure {
                operation: Operation::FetchMaze,
                status: 404,
            })
    }

    async fn post_maze(&self, request: &PostMazeRequest) -> MazeResult<MazeCreation> {
        let mut mazes = self.mazes.lock().expect("lock");
        let maze_id = MazeId(mazes.len() as i64 + 1);
        mazes.push(MazeRecord {
            maze_id,
            grid_size: request.grid_size,
            entrance: Some(request.entrance.clone()),
            walls: request.walls.clone(),
        });
        Ok(MazeCreation {
            maze_id: Some(maze_id),
            error: None,
        })
    }

    async fn solve(&self, maze_id: MazeId, kind: PathKind) -> MazeResult<MazeSolution> {
        self.solutions.lock().expect("lock").push((maze_id, kind));
        Ok(MazeSolution::with_path(vec![PointId::from_canonical("A1")]))
    }
}

fn gateway() -> (RemoteGateway, Arc<FakeMazeApi>) {
    let api = Arc::new(FakeMazeApi::default());
    (RemoteGateway::new(api.clone()), api)
}

#[tokio::test]
async fn submit_command_reports_new_id_and_fresh_list() {
    let (gateway, api) = gateway();
    let request = PostMazeRequest {
        entrance: PointId::from_canonical("A1"),
        grid_size: GridSize::new(2, 2).expect("grid"),
        walls: vec![PointId::from_canonical("B2")],
    };

    match run_command(&gateway, BackendCommand::Submit { slot: 0, request }).await {
        UiEvent::Submitted {
            slot,
            result: Ok((maze_id, records)),
        } => {
            assert_eq!(slot, 0);
            assert_eq!(maze_id, Some(MazeId(1)));
            assert_eq!(records.len(), 1);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(api.mazes.lock().expect("lock").len(), 1);
}

#[tokio::test]
async fn solve_command_carries_its_ticket_back() {
    let (gateway, api) = gateway();
    api.mazes.lock().expect("lock").push(MazeRecord {
        maze_id: MazeId(3),
        grid_size: GridSize::new(2, 2).expect("grid"),
        entrance: Some(PointId::from_canonical("A1")),
        walls: Vec::new(),
    });
    let mut board = gateway.load_board(None).await.expect("load");
    let ticket = board.begin_solve(1, PathKind::Max).expect("ticket");

    match run_command(&gateway, BackendCommand::Solve { ticket: ticket.clone() }).await {
        UiEvent::Solved {
            ticket: returned,
            result: Ok(path),
        } => {
            assert_eq!(returned, ticket);
            assert_eq!(path, vec![PointId::from_canonical("A1")]);
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        api.solutions.lock().expect("lock").clone(),
        vec![(MazeId(3), PathKind::Max)]
    );
}

#[tokio::test]
async fn fetch_command_reports_missing_maze() {
    let (gateway, _api) = gateway();
    match run_command(&gateway, BackendCommand::FetchMaze { maze_id: MazeId(9) }).await {
        UiEvent::MazeFetched {
            maze_id,
            result: Err(err),
        } => {
            assert_eq!(maze_id, MazeId(9));
            assert!(matches!(err, MazeError::RemoteFailure { status: 404, .. }));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn load_command_lists_mazes() {
    let (gateway, _api) = gateway();
    let event = run_command(&gateway, BackendCommand::LoadMazes).await;
    assert!(matches!(event, UiEvent::MazesLoaded(Ok(records)) if records.is_empty()));
}

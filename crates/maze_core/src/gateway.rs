//! Boundary to the remote maze service.
//!
//! [`MazeApi`] is the raw request/response contract; [`RemoteGateway`] translates its results
//! into board mutations or user-visible errors.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use shared::{
    domain::{MazeId, PathKind, PointId, UserToken},
    protocol::{MazeCreation, MazeRecord, MazeSolution, PostMazeRequest},
};
use tracing::{info, warn};
use url::Url;

use crate::{
    board::{SessionBoard, SolveOutcome},
    error::{MazeError, MazeResult, Operation},
    geometry,
};

const JSON_MEDIA_TYPE: &str = "application/json";
const JSON_UTF8_MEDIA_TYPE: &str = "application/json;charset=UTF-8";
const USER_TOKEN_HEADER: &str = "User-Token";

#[async_trait]
pub trait MazeApi: Send + Sync {
    async fn list_mazes(&self) -> MazeResult<Vec<MazeRecord>>;
    async fn fetch_maze(&self, maze_id: MazeId) -> MazeResult<MazeRecord>;
    async fn post_maze(&self, request: &PostMazeRequest) -> MazeResult<MazeCreation>;
    async fn solve(&self, maze_id: MazeId, kind: PathKind) -> MazeResult<MazeSolution>;
}

pub struct HttpMazeApi {
    http: Client,
    base_url: Url,
    user_token: Option<UserToken>,
}

impl HttpMazeApi {
    pub fn new(base_url: Url, user_token: Option<UserToken>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            user_token,
        }
    }

    fn endpoint(&self, operation: Operation, segments: &[&str]) -> MazeResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MazeError::Transport {
                operation,
                message: format!("server url {} cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn with_headers(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, JSON_MEDIA_TYPE);
        match self.user_token {
            Some(token) => request.header(USER_TOKEN_HEADER, token.to_string()),
            None => request,
        }
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> MazeResult<Response> {
        let response = self
            .with_headers(request)
            .send()
            .await
            .map_err(|err| MazeError::Transport {
                operation,
                message: err.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            warn!(%operation, status = status.as_u16(), "gateway: request failed");
            return Err(MazeError::RemoteFailure {
                operation,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> MazeResult<T> {
        response.json::<T>().await.map_err(|err| MazeError::Transport {
            operation,
            message: format!("invalid response body: {err}"),
        })
    }
}

#[async_trait]
impl MazeApi for HttpMazeApi {
    async fn list_mazes(&self) -> MazeResult<Vec<MazeRecord>> {
        let operation = Operation::LoadMazes;
        let url = self.endpoint(operation, &["maze"])?;
        let response = self.send(operation, self.http.get(url)).await?;
        Self::decode(operation, response).await
    }

    async fn fetch_maze(&self, maze_id: MazeId) -> MazeResult<MazeRecord> {
        let operation = Operation::FetchMaze;
        let url = self.endpoint(operation, &["maze", &maze_id.to_string()])?;
        let response = self.send(operation, self.http.get(url)).await?;
        Self::decode(operation, response).await
    }

    async fn post_maze(&self, request: &PostMazeRequest) -> MazeResult<MazeCreation> {
        let operation = Operation::Submit;
        let url = self.endpoint(operation, &["maze"])?;
        let body = serde_json::to_vec(request).map_err(|err| MazeError::Transport {
            operation,
            message: err.to_string(),
        })?;
        let builder = self
            .http
            .post(url)
            .header(CONTENT_TYPE, JSON_UTF8_MEDIA_TYPE)
            .body(body);
        let response = self.send(operation, builder).await?;
        Self::decode(operation, response).await
    }

    async fn solve(&self, maze_id: MazeId, kind: PathKind) -> MazeResult<MazeSolution> {
        let operation = Operation::Solve(kind);
        let url = self.endpoint(operation, &["maze", &maze_id.to_string(), "solution"])?;
        let builder = self.http.get(url).query(&[("steps", kind.steps())]);
        let response = self.send(operation, builder).await?;
        response
            .json::<MazeSolution>()
            .await
            .map_err(|_| MazeError::MalformedSolution)
    }
}

/// Interprets a `POST /maze` payload: an explicit error field wins over any id.
pub fn creation_result(creation: MazeCreation) -> MazeResult<Option<MazeId>> {
    if let Some(message) = creation.error {
        return Err(MazeError::RemoteRejected {
            operation: Operation::Submit,
            message,
        });
    }
    Ok(creation.maze_id)
}

/// Interprets a solution payload into the path to overlay.
pub fn solution_path(kind: PathKind, solution: MazeSolution) -> MazeResult<Vec<PointId>> {
    if let Some(message) = solution.error {
        return Err(MazeError::RemoteRejected {
            operation: Operation::Solve(kind),
            message,
        });
    }
    let path = solution.path.ok_or(MazeError::MalformedSolution)?;
    if path
        .iter()
        .any(|point| geometry::parse_point(point.as_str()).is_err())
    {
        return Err(MazeError::MalformedSolution);
    }
    Ok(path)
}

#[derive(Clone)]
pub struct RemoteGateway {
    api: Arc<dyn MazeApi>,
}

impl RemoteGateway {
    pub fn new(api: Arc<dyn MazeApi>) -> Self {
        Self { api }
    }

    pub fn http(base_url: Url, user_token: Option<UserToken>) -> Self {
        Self::new(Arc::new(HttpMazeApi::new(base_url, user_token)))
    }

    pub async fn list_mazes(&self) -> MazeResult<Vec<MazeRecord>> {
        self.api.list_mazes().await
    }

    pub async fn fetch_maze(&self, maze_id: MazeId) -> MazeResult<MazeRecord> {
        self.api.fetch_maze(maze_id).await
    }

    /// Posts a maze and, on success, returns the authoritative list to rehydrate from.
    pub async fn submit_and_reload(
        &self,
        request: &PostMazeRequest,
    ) -> MazeResult<(Option<MazeId>, Vec<MazeRecord>)> {
        let creation = self.api.post_maze(request).await?;
        let maze_id = creation_result(creation)?;
        info!(maze_id = ?maze_id.map(|id| id.0), "gateway: maze submitted");
        let records = self.api.list_mazes().await?;
        Ok((maze_id, records))
    }

    pub async fn fetch_solution(&self, maze_id: MazeId, kind: PathKind) -> MazeResult<Vec<PointId>> {
        let solution = self.api.solve(maze_id, kind).await?;
        let path = solution_path(kind, solution)?;
        info!(maze_id = maze_id.0, %kind, steps = path.len(), "gateway: solution received");
        Ok(path)
    }

    pub async fn load_board(&self, user_id: Option<String>) -> MazeResult<SessionBoard> {
        let board = SessionBoard::from_records(self.list_mazes().await?);
        Ok(match user_id {
            Some(user_id) => board.with_user_id(user_id),
            None => board,
        })
    }

    pub async fn reload(&self, board: &mut SessionBoard) -> MazeResult<()> {
        let records = self.list_mazes().await?;
        board.replace_all(records);
        Ok(())
    }

    /// Submit action for `slot`. Validation failures never reach the network.
    pub async fn submit(&self, board: &mut SessionBoard, slot: usize) -> MazeResult<Option<MazeId>> {
        let request = board.begin_submit(slot)?;
        let (maze_id, records) = self.submit_and_reload(&request).await?;
        board.replace_all(records);
        Ok(maze_id)
    }

    /// Solve action for `slot`, run to completion.
    pub async fn solve(
        &self,
        board: &mut SessionBoard,
        slot: usize,
        kind: PathKind,
    ) -> MazeResult<SolveOutcome> {
        let ticket = board.begin_solve(slot, kind)?;
        let outcome = self.fetch_solution(ticket.maze_id, kind).await;
        board.finish_solve(ticket, outcome)
    }

    pub async fn refresh_slot(&self, board: &mut SessionBoard, maze_id: MazeId) -> MazeResult<usize> {
        let record = self.fetch_maze(maze_id).await?;
        Ok(board.replace_slot(record))
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;

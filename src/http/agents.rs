//! Agent route handlers: query, plan, task status, and the real-time
//! WebSocket channel.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AppState;
use crate::agent;
use crate::identity::require_identity;
use crate::types::{AgentPlan, AgentQuery, AgentResponse, AgentTask, ScalarMap};

pub(super) fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/query", post(query))
        .route("/plan", post(plan))
        .route("/tasks/{task_id}", get(task_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    // The channel takes no identity
    Router::new()
        .merge(protected)
        .route("/ws", get(ws_upgrade))
        .with_state(state)
}

// -- /query --

async fn query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgentQuery>,
) -> Json<AgentResponse> {
    tokio::time::sleep(state.config.agent.query_delay()).await;
    Json(agent::synthesize(&request.query, request.context.as_ref()))
}

// -- /plan --

async fn plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AgentQuery>,
) -> Json<AgentPlan> {
    tokio::time::sleep(state.config.agent.plan_delay()).await;
    Json(agent::create_plan(&request.query))
}

// -- /tasks/{task_id} --

async fn task_status(Path(task_id): Path<String>) -> Json<AgentTask> {
    Json(agent::task_status(&task_id))
}

// -- /ws --

/// An inbound channel frame. Both fields default so sparse objects work.
#[derive(Deserialize)]
struct ChannelQuery {
    #[serde(default)]
    query: String,
    #[serde(default)]
    context: ScalarMap,
}

/// An outbound channel frame: a response or an error envelope.
#[derive(Serialize)]
#[serde(untagged)]
enum ChannelReply {
    Response(AgentResponse),
    Error { error: String },
}

async fn ws_upgrade(State(state): State<Arc<AppState>>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_channel(socket, state))
}

/// Per-connection loop: one JSON reply frame per inbound text frame.
///
/// Malformed frames get an error frame and the channel stays open; the loop
/// ends only on peer disconnect or a socket error, after which nothing more
/// is sent.
async fn handle_channel(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    while let Some(message) = receiver.next().await {
        let message = match message {
            Ok(message) => message,
            Err(err) => {
                debug!("Channel receive error: {}", err);
                break;
            }
        };

        match message {
            Message::Text(text) => {
                let reply = channel_reply(&state, text.as_str()).await;
                let frame = serde_json::to_string(&reply).unwrap_or_else(|err| {
                    format!(r#"{{"error": "Error processing request: {err}"}}"#)
                });
                if sender.send(Message::Text(frame.into())).await.is_err() {
                    break;
                }
            }
            Message::Close(_) => break,
            // Binary frames are not part of the protocol; pings are answered
            // by the library
            _ => {}
        }
    }
}

async fn channel_reply(state: &AppState, text: &str) -> ChannelReply {
    match serde_json::from_str::<ChannelQuery>(text) {
        Ok(incoming) => {
            tokio::time::sleep(state.config.agent.query_delay()).await;
            ChannelReply::Response(agent::synthesize(&incoming.query, Some(&incoming.context)))
        }
        Err(_) => ChannelReply::Error {
            error: "Invalid JSON format".to_string(),
        },
    }
}

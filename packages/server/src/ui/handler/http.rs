//! HTTP API endpoint handlers.
//!
//! Every response uses the `{status, message, content}` envelope. Mutating
//! and reading requests are recorded in the activity log.

use std::{collections::BTreeMap, sync::Arc};

use axum::{Json, body::Bytes, extract::State};
use serde_json::json;

use crate::{
    domain::{GameId, GameTableError},
    infrastructure::{
        activity_log::{ActivityLog, Severity},
        dto::http::{
            ActivityEntryDto, ApiResponse, GameCollectionRequest, GameDto, GameEntryPost,
            GameServersDto,
        },
    },
    ui::{error::ApiError, state::AppState},
    usecase::{RefreshCallback, UpsertMode},
};

type ApiResult = Result<Json<ApiResponse>, ApiError>;

/// Parse the request body; an empty body is an empty request.
fn parse_request(body: &Bytes) -> Result<GameCollectionRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(GameCollectionRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid request: {e}")))
}

/// Parse the body and check its password.
fn authorized(state: &AppState, body: &Bytes) -> Result<GameCollectionRequest, ApiError> {
    let request = parse_request(body).map_err(|e| reject(state, e))?;
    state
        .authorize(&request.password)
        .map_err(|e| reject(state, e))?;
    Ok(request)
}

fn reject(state: &AppState, e: ApiError) -> ApiError {
    state
        .activity_log
        .record(e.status_code().as_u16(), e.to_string(), Severity::Major);
    e
}

fn respond(
    state: &AppState,
    message: String,
    content: serde_json::Value,
    severity: Severity,
) -> Json<ApiResponse> {
    state.activity_log.record(200, message.clone(), severity);
    Json(ApiResponse::new(200, message, content))
}

fn render_outcome(
    outcome: &BTreeMap<String, Result<(), GameTableError>>,
    ok_text: &str,
) -> BTreeMap<String, String> {
    outcome
        .iter()
        .map(|(id, result)| {
            let text = match result {
                Ok(()) => ok_text.to_string(),
                Err(e) => e.to_string(),
            };
            (id.clone(), text)
        })
        .collect()
}

fn joined_ids<'a>(ids: impl Iterator<Item = &'a String>) -> String {
    ids.map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Liveness check, no authentication
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.activity_log.record(200, "Ping.", Severity::Minor);
    Json(ApiResponse::empty(200, "Ping."))
}

pub async fn logs(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    authorized(&state, &body)?;
    let logs: Vec<ActivityEntryDto> = state
        .activity_log
        .entries()
        .iter()
        .map(ActivityEntryDto::from)
        .collect();
    Ok(Json(ApiResponse::new(200, "OK.", json!({ "logs": logs }))))
}

pub async fn quit(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    authorized(&state, &body)?;
    let response = respond(
        &state,
        "Server shutting down".to_string(),
        json!({}),
        Severity::Major,
    );
    state.shutdown.notify_one();
    Ok(response)
}

pub async fn create_games(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    upsert_games(&state, &body, UpsertMode::Create).await
}

pub async fn update_games(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    upsert_games(&state, &body, UpsertMode::Update).await
}

async fn upsert_games(state: &AppState, body: &Bytes, mode: UpsertMode) -> ApiResult {
    let request = authorized(state, body)?;
    let drafts = request
        .games
        .into_iter()
        .filter_map(GameEntryPost::into_draft)
        .collect();

    let outcome = state
        .upsert_games_usecase
        .execute(mode, drafts)
        .await
        .map_err(|e| reject(state, e.into()))?;

    Ok(respond(
        state,
        format!("Processed entries with IDs: {}", joined_ids(outcome.keys())),
        json!({ "input_log": render_outcome(&outcome, "OK.") }),
        Severity::Major,
    ))
}

pub async fn read_games(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    authorized(&state, &body)?;
    let games: Vec<GameDto> = state
        .list_games_usecase
        .execute()
        .await
        .iter()
        .map(|(id, entry)| GameDto::from_entry(id, entry))
        .collect();

    Ok(respond(
        &state,
        "Games read from Game Table successful.".to_string(),
        json!({ "games": games }),
        Severity::Minor,
    ))
}

pub async fn delete_games(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    let request = authorized(&state, &body)?;
    let outcome = state
        .delete_games_usecase
        .execute(request.ids.unwrap_or_default())
        .await
        .map_err(|e| reject(&state, e.into()))?;

    Ok(respond(
        &state,
        format!("Processed entries with IDs: {}", joined_ids(outcome.keys())),
        json!({ "delete_log": render_outcome(&outcome, "OK") }),
        Severity::Major,
    ))
}

/// Start refreshes and return at once. Outcomes land in the activity log.
pub async fn refresh_games(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    let request = authorized(&state, &body)?;
    let activity_log = state.activity_log.clone();
    let outcome = state
        .refresh_game_usecase
        .execute_batch(request.ids.unwrap_or_default(), |id| {
            refresh_callback(activity_log.clone(), id.clone())
        })
        .await
        .map_err(|e| reject(&state, e.into()))?;

    Ok(respond(
        &state,
        format!("Requested refresh of IDs: {}", joined_ids(outcome.keys())),
        json!({ "refresh_log": render_outcome(&outcome, "Refresh requested.") }),
        Severity::Major,
    ))
}

fn refresh_callback(activity_log: Arc<ActivityLog>, id: GameId) -> RefreshCallback {
    Box::new(move |result| match result {
        Ok(records) => activity_log.record(
            200,
            format!("Refreshed game '{}': {} servers", id, records.len()),
            Severity::Major,
        ),
        Err(e) => activity_log.record(
            500,
            format!("Refresh of game '{}' failed: {}", id, e),
            Severity::Major,
        ),
    })
}

pub async fn game_servers(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    let request = authorized(&state, &body)?;
    let servers = state
        .get_game_servers_usecase
        .execute(request.ids.unwrap_or_default())
        .await
        .map_err(|e| reject(&state, e.into()))?;

    let games: BTreeMap<String, serde_json::Value> = servers
        .into_iter()
        .map(|(id, result)| {
            let value = match result {
                Ok(entry) => json!(GameServersDto::from(&entry)),
                Err(e) => json!({ "error": e.to_string() }),
            };
            (id, value)
        })
        .collect();

    Ok(respond(
        &state,
        format!("Servers read for IDs: {}", joined_ids(games.keys())),
        json!({ "games": games }),
        Severity::Minor,
    ))
}

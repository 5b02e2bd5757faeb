//! Privileged admin endpoints.
//!
//! Each handler is the same three steps: the [`AdminAccess`] extractor runs
//! the gate, the route's typed parameters go through the procedure mapping
//! table, and the relay performs the single remote call. The caller's bearer
//! token (if any) rides along on the call.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::Value;

use notebook_bridge_core::procedures::{self, AdminProcedure};
use notebook_bridge_types::admin::{
    GrowthParams, NoteListParams, UserListParams, validate_note_id,
};

use crate::http::error::AppError;
use crate::http::extractors::auth::{AdminAccess, CallerToken};
use crate::http::extractors::query::ValidQuery;
use crate::state::AppState;

/// GET /api/admin/stats - Dashboard aggregate (single record).
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
) -> Result<Json<Value>, AppError> {
    let call = procedures::stats_call()?.with_credential(token);
    let payload = state.relay.call(call).await?;
    Ok(Json(procedures::first_record(payload)))
}

/// GET /api/admin/users - Paged user profiles.
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
    ValidQuery(params): ValidQuery<UserListParams>,
) -> Result<Json<Value>, AppError> {
    params.validate()?;
    let call = procedures::list_users_call(&params)?.with_credential(token);
    Ok(Json(state.relay.call(call).await?))
}

/// GET /api/admin/notes - Paged notes, optionally filtered by text or owner.
pub async fn list_notes(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
    ValidQuery(params): ValidQuery<NoteListParams>,
) -> Result<Json<Value>, AppError> {
    params.validate()?;
    let call = procedures::list_notes_call(&params)?.with_credential(token);
    Ok(Json(state.relay.call(call).await?))
}

/// GET /api/admin/growth - Daily signup and note counts.
pub async fn get_growth(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
    ValidQuery(params): ValidQuery<GrowthParams>,
) -> Result<Json<Value>, AppError> {
    params.validate()?;
    let call = procedures::growth_call(&params)?.with_credential(token);
    Ok(Json(state.relay.call(call).await?))
}

/// POST /api/admin/notes/{note_id}/archive
pub async fn archive_note(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
    Path(note_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    mutate_note(&state, AdminProcedure::ArchiveNote, &note_id, token).await
}

/// POST /api/admin/notes/{note_id}/restore
pub async fn restore_note(
    State(state): State<AppState>,
    _admin: AdminAccess,
    CallerToken(token): CallerToken,
    Path(note_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    mutate_note(&state, AdminProcedure::RestoreNote, &note_id, token).await
}

async fn mutate_note(
    state: &AppState,
    procedure: AdminProcedure,
    note_id: &str,
    token: Option<secrecy::SecretString>,
) -> Result<Json<Value>, AppError> {
    let note_id = validate_note_id(note_id)?;
    let call = procedures::note_mutation_call(procedure, note_id)?.with_credential(token);
    let result = state.relay.call(call).await?;
    tracing::info!(operation = procedure.operation(), note_id, "Note moderation applied");
    Ok(Json(procedures::mutation_envelope(result)))
}

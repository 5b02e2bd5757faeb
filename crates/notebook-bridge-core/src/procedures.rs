//! Admin procedure mapping table.
//!
//! One entry per privileged route: the remote operation it calls and how its
//! typed parameters map onto the remote's `p_`-prefixed argument names.

use serde_json::{Map, Value, json};

use notebook_bridge_types::admin::{GrowthParams, NoteListParams, UserListParams};
use notebook_bridge_types::error::RelayError;
use notebook_bridge_types::rpc::RpcCall;

/// Remote stored procedures reachable through the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminProcedure {
    Stats,
    ListUsers,
    ListNotes,
    Growth,
    ArchiveNote,
    RestoreNote,
}

impl AdminProcedure {
    pub const fn operation(self) -> &'static str {
        match self {
            AdminProcedure::Stats => "get_admin_stats",
            AdminProcedure::ListUsers => "get_all_profiles",
            AdminProcedure::ListNotes => "get_all_notes_admin",
            AdminProcedure::Growth => "get_growth_stats",
            AdminProcedure::ArchiveNote => "admin_archive_note",
            AdminProcedure::RestoreNote => "admin_restore_note",
        }
    }

    fn call(self) -> Result<RpcCall, RelayError> {
        RpcCall::new(self.operation())
    }
}

pub fn stats_call() -> Result<RpcCall, RelayError> {
    AdminProcedure::Stats.call()
}

pub fn list_users_call(params: &UserListParams) -> Result<RpcCall, RelayError> {
    Ok(AdminProcedure::ListUsers
        .call()?
        .param("p_limit", params.limit)
        .param("p_offset", params.offset)
        .param_if_present("p_search", params.search.as_deref()))
}

pub fn list_notes_call(params: &NoteListParams) -> Result<RpcCall, RelayError> {
    Ok(AdminProcedure::ListNotes
        .call()?
        .param("p_limit", params.limit)
        .param("p_offset", params.offset)
        .param_if_present("p_search", params.search.as_deref())
        .param_if_present("p_user_id", params.user_id.as_deref()))
}

pub fn growth_call(params: &GrowthParams) -> Result<RpcCall, RelayError> {
    Ok(AdminProcedure::Growth.call()?.param("p_days", params.days))
}

/// Archive or restore call for one note.
pub fn note_mutation_call(procedure: AdminProcedure, note_id: &str) -> Result<RpcCall, RelayError> {
    Ok(procedure.call()?.param("p_note_id", note_id))
}

/// Reduce an aggregate payload to a single record.
///
/// The stats procedure returns a one-row table, i.e. an array. Its first
/// element is the aggregate; an empty array yields an empty object. Other
/// payloads pass through.
pub fn first_record(payload: Value) -> Value {
    match payload {
        Value::Array(rows) => rows
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Object(Map::new())),
        other => other,
    }
}

/// Envelope returned by the archive/restore routes.
pub fn mutation_envelope(result: Value) -> Value {
    json!({ "success": true, "result": result })
}

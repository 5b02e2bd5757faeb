//! Span attribute names for outbound RPC calls.
//!
//! Names follow the OTel RPC semantic conventions where one exists
//! (`rpc.system`, `rpc.method`); the remaining two are bridge-specific. All
//! constants are string slices usable with `Span::record`.

/// Span name for one relayed remote procedure call.
pub const RPC_CALL_SPAN: &str = "rpc.call";

/// Transport that carried the call (e.g., "supabase").
pub const RPC_SYSTEM: &str = "rpc.system";

/// Remote procedure name (e.g., "get_all_profiles").
pub const RPC_METHOD: &str = "rpc.method";

/// Where the bearer came from: "caller" or "default".
pub const RPC_CREDENTIAL: &str = "rpc.credential";

/// HTTP status of the remote reply, recorded once it arrives.
pub const RPC_STATUS: &str = "rpc.status";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_are_stable() {
        assert_eq!(RPC_CALL_SPAN, "rpc.call");
        assert_eq!(
            [RPC_SYSTEM, RPC_METHOD, RPC_CREDENTIAL, RPC_STATUS],
            ["rpc.system", "rpc.method", "rpc.credential", "rpc.status"]
        );
    }
}

//! Application state shared by every request.
//!
//! Built once at startup from the validated [`BridgeConfig`] and never
//! mutated afterwards. Cloning is cheap: everything sits behind `Arc`.

use std::sync::Arc;

use notebook_bridge_core::credential::CredentialPolicy;
use notebook_bridge_core::gate::AdminGate;
use notebook_bridge_core::relay::Relay;
use notebook_bridge_core::rpc::box_transport::BoxRpcTransport;
use notebook_bridge_infra::supabase::SupabaseRpcTransport;
use notebook_bridge_types::config::BridgeConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BridgeConfig>,
    pub gate: Arc<AdminGate>,
    pub relay: Arc<Relay>,
}

impl AppState {
    /// Wire the Supabase transport, credential policy and gate.
    pub fn init(config: BridgeConfig) -> anyhow::Result<Self> {
        let transport = SupabaseRpcTransport::from_config(&config)?;
        Ok(Self::with_transport(config, BoxRpcTransport::new(transport)))
    }

    /// Wire the state around an arbitrary transport.
    pub fn with_transport(config: BridgeConfig, transport: BoxRpcTransport) -> Self {
        let relay = Relay::new(
            transport,
            CredentialPolicy::from_config(&config),
            config.request_timeout,
        );
        let gate = AdminGate::new(&config.admin_secret);

        Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            relay: Arc::new(relay),
        }
    }
}

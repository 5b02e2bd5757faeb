//! The RPC transport port and its type-erased wrapper.

pub mod box_transport;
pub mod transport;

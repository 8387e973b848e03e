//! Infrastructure layer - adapters implementing the domain ports.

mod artifacts;
mod plan;
mod rpc;

pub use artifacts::FsArtifactRegistry;
pub use plan::PlanDeployer;
pub use rpc::RpcDeployer;

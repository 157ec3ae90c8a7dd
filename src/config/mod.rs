//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod simulation;

// Re-export commonly used items
pub use api::{API_CONFIG, ApiDescriptor, ApiStatus, ContractConfig, ContractFact, SPX_CONTRACT};
pub use debug::{DF, LogFlags};
pub use simulation::{LendingSimConfig, SIMULATION, SimulationConfig, VolatilityProfile};

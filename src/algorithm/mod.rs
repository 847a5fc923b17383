/// Generation run orchestration
pub mod executor;
/// Post-walk obstacle, freeze, room and platform synthesis
pub mod finishing;
/// Inner and outer carve kernels with stochastic mutation
pub mod kernel_generator;
/// Distance-biased move distribution
pub mod moves;
/// Seeded random source and weighted selection
pub mod random;
/// Walker state machine over ordered waypoints
pub mod walker;

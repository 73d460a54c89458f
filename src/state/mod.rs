// ============================================================================
// STATE MODULE - Slices puros + contenedor reducible
// ============================================================================

pub mod filters_state;
pub mod favorites_state;
pub mod app_state;

pub use filters_state::*;
pub use favorites_state::*;
pub use app_state::*;

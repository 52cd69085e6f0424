// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell> + change notification
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod requests;
pub mod app_state;

pub use reactivity::*;
pub use auth_state::*;
pub use requests::*;
pub use app_state::*;

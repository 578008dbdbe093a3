// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod session_state;

pub use session_state::*;

//! Game action definitions

/// Everything the player can ask for
///
/// Mappings:
/// - Advance: left mouse button / any touch / Space / Right arrow (held)
/// - Confirm: left click / tap / Enter / Space (pressed) - dismisses messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Primary pointer: walk toward the treasure while held
    Advance,
    /// Acknowledge the end-of-round message
    Confirm,
}

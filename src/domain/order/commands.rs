// ============================================================================
// Order Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum OrderCommand {
    SetQuantity(i32),
    SetFlavor(String),
    SetDate(String),
    /// Discard the in-progress order and start over with defaults
    Reset,
}

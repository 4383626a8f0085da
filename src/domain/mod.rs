// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Domain-specific aggregates live here, one subdirectory each, separate
// from the generic change-event infrastructure in src/events/.
//
// ============================================================================

pub mod order;

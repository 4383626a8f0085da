// ============================================================================
// Aggregate - command in, events out
// ============================================================================
//
// Key Principles:
// 1. Commands are turned into events without touching state
// 2. State only changes by applying events
// 3. Every event of a command is applied before anyone is told about it
//
// ============================================================================

/// Generic aggregate trait for in-memory state that changes through events
///
/// Type Parameters:
/// - `Event`: what changed
/// - `Command`: what the caller asked for
pub trait Aggregate {
    type Event;
    type Command;

    /// Decide which events a command produces (pure)
    fn handle_command(&self, command: &Self::Command) -> Vec<Self::Event>;

    /// Apply one event to the state
    fn apply_event(&mut self, event: &Self::Event);

    /// Handle a command and apply all resulting events
    fn execute(&mut self, command: &Self::Command) -> Vec<Self::Event> {
        let events = self.handle_command(command);
        for event in &events {
            self.apply_event(event);
        }
        events
    }
}

// Ports define what the application needs from the outside world, without implementing it.
//
// Purpose
// - Describe the three simulated side-effect capabilities and the console line sink as traits.
//
// Responsibilities
// - Keep the application independent of any mail system, CRM or terminal by coding against traits.
//
// Boundaries
// - The side-effect ports are synchronous: every operation blocks its calling execution
//   context for its simulated duration. The execution strategies decide where that
//   blocking happens. Do not make these async.
// - Operations have no return value and no failure path.
//
// Testing guidance
// - Drive the simulated adapters through a MemorySink and assert on the recorded lines.

/// Delivers the welcome mail for a fresh registration.
pub trait Mailer: Send + Sync {
    fn send_welcome(&self, email: &str);
}

/// Maintains the marketing and customer-care group memberships.
pub trait GroupDirectory: Send + Sync {
    fn add_to_marketing(&self, email: &str);
    fn add_to_customer_care(&self, name: &str, email: &str);
}

/// Sink for user-facing console lines.
///
/// Implementations must serialize whole lines: concurrent operations may write at any
/// time during the parallel phase, and lines must never tear.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: String);
}

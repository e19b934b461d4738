// The execution-strategy port: one way of driving the three side-effect operations.
//
// Purpose
// - Let the register handler treat sequential, serial-async and parallel-async
//   execution uniformly.
//
// Boundaries
// - A strategy invokes every operation exactly once and returns only after all of
//   them have completed. It decides the execution context, never the effects.

use async_trait::async_trait;

use crate::application::errors::ApplicationError;
use crate::core::registrant::Registrant;

#[async_trait]
pub trait RegistrationStrategy: Send + Sync {
    /// Stable name used in reports and diagnostics.
    fn name(&self) -> &'static str;

    /// Run all three operations for the registrant under this strategy.
    async fn run(&self, registrant: &Registrant) -> Result<(), ApplicationError>;
}

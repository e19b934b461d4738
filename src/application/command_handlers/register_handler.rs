// Registration handler: drives the whole demonstration for one registrant.
//
// Responsibilities
// - Run every configured execution strategy, in order, against the same registrant,
//   so the side effects are observably triggered once per strategy per operation.
// - Time each strategy and hand the reports back to the caller. The handler never
//   interprets the timings; presentation is the composition root's concern.
//
// Boundaries
// - Strategy N+1 must not start before strategy N has fully completed.

use std::sync::Arc;
use std::time::Instant;

use crate::application::errors::ApplicationError;
use crate::application::report::StrategyReport;
use crate::application::strategy::RegistrationStrategy;
use crate::core::registrant::Registrant;

pub struct RegisterUserHandler {
    strategies: Vec<Arc<dyn RegistrationStrategy>>,
}

impl RegisterUserHandler {
    pub fn new(strategies: Vec<Arc<dyn RegistrationStrategy>>) -> Self {
        Self { strategies }
    }

    pub async fn handle(
        &self,
        registrant: &Registrant,
    ) -> Result<Vec<StrategyReport>, ApplicationError> {
        let mut reports = Vec::with_capacity(self.strategies.len());
        for strategy in &self.strategies {
            let started = Instant::now();
            strategy.run(registrant).await?;
            reports.push(StrategyReport {
                strategy: strategy.name().to_string(),
                duration: started.elapsed(),
            });
        }
        Ok(reports)
    }
}

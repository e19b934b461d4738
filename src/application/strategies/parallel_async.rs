// Parallel-async execution strategy: fan-out, then fan-in.
//
// Responsibilities
// - Submit all three operations to the blocking pool without awaiting in between,
//   join all three handles, then emit the all-completed line. Total wall-clock cost
//   is roughly the largest delay, not the sum.
//
// Boundaries
// - No ordering is promised between the three operations' lines. The all-completed
//   line is promised to come after every completion line.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;

use crate::application::errors::ApplicationError;
use crate::application::strategy::RegistrationStrategy;
use crate::core::ports::{ConsoleSink, GroupDirectory, Mailer};
use crate::core::registrant::Registrant;

/// Line emitted once every dispatched operation has completed.
pub const ALL_TASKS_COMPLETED: &str = "All tasks completed!";

pub struct ParallelAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    mailer: Arc<TMailer>,
    directory: Arc<TDirectory>,
    out: Arc<dyn ConsoleSink>,
}

impl<TMailer, TDirectory> ParallelAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    pub fn new(
        mailer: Arc<TMailer>,
        directory: Arc<TDirectory>,
        out: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self {
            mailer,
            directory,
            out,
        }
    }
}

#[async_trait]
impl<TMailer, TDirectory> RegistrationStrategy for ParallelAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "parallel-async"
    }

    async fn run(&self, registrant: &Registrant) -> Result<(), ApplicationError> {
        let send = {
            let mailer = Arc::clone(&self.mailer);
            let email = registrant.email.clone();
            task::spawn_blocking(move || mailer.send_welcome(&email))
        };
        let marketing = {
            let directory = Arc::clone(&self.directory);
            let email = registrant.email.clone();
            task::spawn_blocking(move || directory.add_to_marketing(&email))
        };
        let customer_care = {
            let directory = Arc::clone(&self.directory);
            let name = registrant.name.clone();
            let email = registrant.email.clone();
            task::spawn_blocking(move || directory.add_to_customer_care(&name, &email))
        };

        // Fan-in: wait for every worker unconditionally before continuing.
        let (send, marketing, customer_care) = tokio::join!(send, marketing, customer_care);
        send?;
        marketing?;
        customer_care?;

        self.out.write_line(ALL_TASKS_COMPLETED.to_string());
        Ok(())
    }
}

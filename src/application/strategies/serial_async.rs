// Serial-async execution strategy.
//
// Responsibilities
// - Submit each operation to the blocking pool with spawn_blocking, await its handle,
//   then submit the next. Observable output is identical to the sequential strategy;
//   only the execution context doing the blocking differs.
//
// Boundaries
// - Do not batch or overlap the dispatches. Dispatch-then-await-each-time yielding no
//   concurrency is the behavior this strategy exists to demonstrate.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;

use crate::application::errors::ApplicationError;
use crate::application::strategy::RegistrationStrategy;
use crate::core::ports::{GroupDirectory, Mailer};
use crate::core::registrant::Registrant;

pub struct SerialAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    mailer: Arc<TMailer>,
    directory: Arc<TDirectory>,
}

impl<TMailer, TDirectory> SerialAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    pub fn new(mailer: Arc<TMailer>, directory: Arc<TDirectory>) -> Self {
        Self { mailer, directory }
    }
}

#[async_trait]
impl<TMailer, TDirectory> RegistrationStrategy for SerialAsync<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "serial-async"
    }

    async fn run(&self, registrant: &Registrant) -> Result<(), ApplicationError> {
        let mailer = Arc::clone(&self.mailer);
        let email = registrant.email.clone();
        task::spawn_blocking(move || mailer.send_welcome(&email)).await?;

        let directory = Arc::clone(&self.directory);
        let email = registrant.email.clone();
        task::spawn_blocking(move || directory.add_to_marketing(&email)).await?;

        let directory = Arc::clone(&self.directory);
        let name = registrant.name.clone();
        let email = registrant.email.clone();
        task::spawn_blocking(move || directory.add_to_customer_care(&name, &email)).await?;

        Ok(())
    }
}

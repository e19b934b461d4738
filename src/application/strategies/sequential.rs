// Sequential execution strategy: the baseline every other strategy is contrasted with.
//
// Responsibilities
// - Invoke the three operations one after another on the calling task, blocking it
//   for the full duration of each. Total wall-clock cost is the sum of the delays.
// - Guarantee strict ordering: an operation's completion line is emitted before the
//   next operation's start line.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::errors::ApplicationError;
use crate::application::strategy::RegistrationStrategy;
use crate::core::ports::{GroupDirectory, Mailer};
use crate::core::registrant::Registrant;

pub struct Sequential<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    mailer: Arc<TMailer>,
    directory: Arc<TDirectory>,
}

impl<TMailer, TDirectory> Sequential<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    pub fn new(mailer: Arc<TMailer>, directory: Arc<TDirectory>) -> Self {
        Self { mailer, directory }
    }
}

#[async_trait]
impl<TMailer, TDirectory> RegistrationStrategy for Sequential<TMailer, TDirectory>
where
    TMailer: Mailer + Send + Sync + 'static,
    TDirectory: GroupDirectory + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "sequential"
    }

    async fn run(&self, registrant: &Registrant) -> Result<(), ApplicationError> {
        // All three calls stay on the calling task and block it.
        self.mailer.send_welcome(&registrant.email);
        self.directory.add_to_marketing(&registrant.email);
        self.directory
            .add_to_customer_care(&registrant.name, &registrant.email);
        Ok(())
    }
}

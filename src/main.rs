use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use registration_console::adapters::console::stdout_sink::StdoutSink;
use registration_console::adapters::simulated::simulated_directory::{
    DEFAULT_CUSTOMER_CARE_DELAY, DEFAULT_MARKETING_DELAY, SimulatedDirectory,
};
use registration_console::adapters::simulated::simulated_mailer::{
    DEFAULT_EMAIL_DELAY, SimulatedMailer,
};
use registration_console::application::command_handlers::register_handler::RegisterUserHandler;
use registration_console::application::strategies::parallel_async::ParallelAsync;
use registration_console::application::strategies::sequential::Sequential;
use registration_console::application::strategies::serial_async::SerialAsync;
use registration_console::application::strategy::RegistrationStrategy;
use registration_console::core::ports::ConsoleSink;
use registration_console::shell::console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let out: Arc<dyn ConsoleSink> = Arc::new(StdoutSink::new());
    let mailer = Arc::new(SimulatedMailer::new(DEFAULT_EMAIL_DELAY, Arc::clone(&out)));
    let directory = Arc::new(SimulatedDirectory::new(
        DEFAULT_MARKETING_DELAY,
        DEFAULT_CUSTOMER_CARE_DELAY,
        Arc::clone(&out),
    ));

    // The demo runs every strategy, in this order, on the same registrant.
    let strategies: Vec<Arc<dyn RegistrationStrategy>> = vec![
        Arc::new(Sequential::new(mailer.clone(), directory.clone())),
        Arc::new(SerialAsync::new(mailer.clone(), directory.clone())),
        Arc::new(ParallelAsync::new(mailer, directory, Arc::clone(&out))),
    ];
    let handler = RegisterUserHandler::new(strategies);

    console::print_welcome();
    let registrant = console::read_registrant()?;

    let reports = handler.handle(&registrant).await?;
    for report in &reports {
        tracing::info!(
            strategy = %report.strategy,
            elapsed_ms = report.duration.as_millis() as u64,
            "strategy completed"
        );
    }

    console::print_thanks_and_wait()?;
    Ok(())
}

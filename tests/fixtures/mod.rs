// Shared fixtures for the integration tests.
//
// Wires the real simulated adapters to the in-memory sink with short delays so
// whole-flow ordering and timing can be asserted without parsing real stdout.

use std::sync::Arc;
use std::time::Duration;

use registration_console::adapters::in_memory::memory_sink::MemorySink;
use registration_console::adapters::simulated::simulated_directory::SimulatedDirectory;
use registration_console::adapters::simulated::simulated_mailer::SimulatedMailer;
use registration_console::application::command_handlers::register_handler::RegisterUserHandler;
use registration_console::application::strategies::parallel_async::ParallelAsync;
use registration_console::application::strategies::sequential::Sequential;
use registration_console::application::strategies::serial_async::SerialAsync;
use registration_console::application::strategy::RegistrationStrategy;
use registration_console::core::ports::ConsoleSink;
use registration_console::core::registrant::Registrant;

/// Canonical registrant from the spec's examples.
#[allow(dead_code)]
pub fn make_registrant() -> Registrant {
    Registrant {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
    }
}

/// Full production wiring (all three strategies, in demo order) against an
/// in-memory sink, with injectable delays.
#[allow(dead_code)]
pub fn make_harness(
    email_delay: Duration,
    marketing_delay: Duration,
    customer_care_delay: Duration,
) -> (Arc<MemorySink>, RegisterUserHandler) {
    let sink = Arc::new(MemorySink::new());
    let mailer = Arc::new(SimulatedMailer::new(email_delay, sink.clone()));
    let directory = Arc::new(SimulatedDirectory::new(
        marketing_delay,
        customer_care_delay,
        sink.clone(),
    ));
    let strategies: Vec<Arc<dyn RegistrationStrategy>> = vec![
        Arc::new(Sequential::new(mailer.clone(), directory.clone())),
        Arc::new(SerialAsync::new(mailer.clone(), directory.clone())),
        Arc::new(ParallelAsync::new(
            mailer,
            directory,
            sink.clone() as Arc<dyn ConsoleSink>,
        )),
    ];
    (sink, RegisterUserHandler::new(strategies))
}

/// The six operation lines one strategy emits, in the strict (serial) order.
#[allow(dead_code)]
pub fn operation_block(name: &str, email: &str) -> Vec<String> {
    vec![
        format!("Sending email to {email}..."),
        format!("Email sent to {email}!"),
        format!("Adding {email} to the marketing group..."),
        format!("{email} added to the marketing group!"),
        format!("Adding {name} ({email}) to the customer care group..."),
        format!("{name} ({email}) added to the customer care group!"),
    ]
}

#[allow(dead_code)]
pub fn position(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line == needle)
        .unwrap_or_else(|| panic!("line not found: {needle}"))
}

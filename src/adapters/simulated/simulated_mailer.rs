// Simulated implementation of the Mailer port.
//
// Purpose
// - Stand in for a real mail system: announce the send, block for the simulated
//   duration, announce completion. Nothing is delivered anywhere.
//
// Responsibilities
// - Block the calling thread with std::thread::sleep. The strategies rely on the
//   operation genuinely occupying its execution context.
// - The delay is injectable so tests can run the same adapter in milliseconds.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::ports::{ConsoleSink, Mailer};

/// Welcome-mail delay used by the demo binary.
pub const DEFAULT_EMAIL_DELAY: Duration = Duration::from_millis(3000);

pub struct SimulatedMailer {
    delay: Duration,
    out: Arc<dyn ConsoleSink>,
}

impl SimulatedMailer {
    pub fn new(delay: Duration, out: Arc<dyn ConsoleSink>) -> Self {
        Self { delay, out }
    }
}

impl Mailer for SimulatedMailer {
    fn send_welcome(&self, email: &str) {
        self.out.write_line(format!("Sending email to {email}..."));
        thread::sleep(self.delay);
        self.out.write_line(format!("Email sent to {email}!"));
    }
}

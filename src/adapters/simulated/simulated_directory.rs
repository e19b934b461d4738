// Simulated implementation of the GroupDirectory port.
//
// Purpose
// - Stand in for the CRM group memberships: announce the add, block for the
//   simulated duration, announce completion. No membership exists anywhere.
//
// Responsibilities
// - Block the calling thread with std::thread::sleep, like the mailer.
// - Delays are injectable so tests can run the same adapter in milliseconds.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::ports::{ConsoleSink, GroupDirectory};

/// Marketing-group delay used by the demo binary.
pub const DEFAULT_MARKETING_DELAY: Duration = Duration::from_millis(2000);
/// Customer-care delay used by the demo binary.
pub const DEFAULT_CUSTOMER_CARE_DELAY: Duration = Duration::from_millis(1000);

pub struct SimulatedDirectory {
    marketing_delay: Duration,
    customer_care_delay: Duration,
    out: Arc<dyn ConsoleSink>,
}

impl SimulatedDirectory {
    pub fn new(
        marketing_delay: Duration,
        customer_care_delay: Duration,
        out: Arc<dyn ConsoleSink>,
    ) -> Self {
        Self {
            marketing_delay,
            customer_care_delay,
            out,
        }
    }
}

impl GroupDirectory for SimulatedDirectory {
    fn add_to_marketing(&self, email: &str) {
        self.out
            .write_line(format!("Adding {email} to the marketing group..."));
        thread::sleep(self.marketing_delay);
        self.out
            .write_line(format!("{email} added to the marketing group!"));
    }

    fn add_to_customer_care(&self, name: &str, email: &str) {
        self.out.write_line(format!(
            "Adding {name} ({email}) to the customer care group..."
        ));
        thread::sleep(self.customer_care_delay);
        self.out.write_line(format!(
            "{name} ({email}) added to the customer care group!"
        ));
    }
}

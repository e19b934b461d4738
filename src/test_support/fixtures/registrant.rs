// Shared test fixture for the registrant captured from console input.
// Compiled into the crate only during tests via the cfg(test) test_support
// module in src/lib.rs.

use crate::core::registrant::Registrant;

/// Canonical registrant used across unit tests.
pub fn make_registrant() -> Registrant {
    Registrant {
        name: "Alice".to_string(),
        email: "a@x.com".to_string(),
    }
}

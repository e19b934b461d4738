// Crate entry point. Re-export modules so tests and the binary can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - The binary wires adapters into the application layer through this root.
// - Tests import modules from this crate root to reach the code under test.

pub mod core {
    pub mod ports;
    pub mod registrant;
}

pub mod application {
    pub mod errors;
    pub mod report;
    pub mod strategy;
    pub mod command_handlers {
        pub mod register_handler;
    }
    pub mod strategies {
        pub mod parallel_async;
        pub mod sequential;
        pub mod serial_async;
    }
}

pub mod adapters {
    pub mod console {
        pub mod stdout_sink;
    }
    pub mod in_memory {
        pub mod memory_sink;
    }
    pub mod simulated {
        pub mod simulated_directory;
        pub mod simulated_mailer;
    }
}

pub mod shell {
    pub mod console;
}

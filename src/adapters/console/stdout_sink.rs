// Production implementation of the ConsoleSink port.
//
// `println!` takes the stdout lock per call, so whole lines from concurrent
// operations never tear; no ordering beyond that is promised or needed.

use crate::core::ports::ConsoleSink;

#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutSink {
    fn write_line(&self, line: String) {
        println!("{line}");
    }
}

#[cfg(test)]
mod registration_stdout_sink_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_accept_a_line() {
        let sink = StdoutSink::new();
        sink.write_line("smoke".to_string());
    }
}

// Ordering guarantees per execution strategy, asserted positionally on the
// captured transcript rather than by whole-block equality.

mod fixtures;

use std::time::Duration;

use registration_console::application::strategies::parallel_async::ALL_TASKS_COMPLETED;
use rstest::rstest;

use crate::fixtures::{make_harness, make_registrant, operation_block, position};

async fn transcript() -> (Vec<String>, Vec<String>) {
    let (sink, handler) = make_harness(
        Duration::from_millis(20),
        Duration::from_millis(12),
        Duration::from_millis(6),
    );
    let registrant = make_registrant();
    handler
        .handle(&registrant)
        .await
        .expect("registration flow should succeed");
    let block = operation_block(&registrant.name, &registrant.email);
    (sink.lines(), block)
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_finish_each_operation_before_starting_the_next_in_the_serial_phases() {
    let (lines, block) = transcript().await;

    for phase in [&lines[0..6], &lines[6..12]] {
        // Email completion precedes the marketing start, and marketing
        // completion precedes the customer care start.
        assert!(position(phase, &block[1]) < position(phase, &block[2]));
        assert!(position(phase, &block[3]) < position(phase, &block[4]));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_start_each_parallel_operation_before_its_completion_line() {
    let (lines, block) = transcript().await;
    let phase = &lines[12..];

    for pair in block.chunks(2) {
        assert!(position(phase, &pair[0]) < position(phase, &pair[1]));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn it_should_print_the_summary_after_every_parallel_completion() {
    let (lines, block) = transcript().await;
    let phase = &lines[12..];

    let summary = position(phase, ALL_TASKS_COMPLETED);
    assert_eq!(summary, phase.len() - 1);
    for pair in block.chunks(2) {
        assert!(position(phase, &pair[1]) < summary);
    }
}

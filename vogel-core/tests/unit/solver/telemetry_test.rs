use super::*;
use crate::helpers::models::*;
use crate::models::Line;
use std::sync::{Arc, Mutex};

fn create_logging_mode(log_steps: bool) -> (TelemetryMode, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let sink = messages.clone();
    let logger: InfoLogger = Arc::new(move |msg: &str| sink.lock().unwrap().push(msg.to_string()));

    (TelemetryMode::OnlyLogging { logger, log_steps }, messages)
}

#[test]
fn can_log_balancing_decision() {
    let (mode, messages) = create_logging_mode(false);
    let problem = create_problem(vec![vec![2.], vec![3.]], vec![20., 30.], vec![25.]);

    Telemetry::new(mode).on_balanced(&BalancedProblem::new(&problem));

    assert_eq!(messages.lock().unwrap().as_slice(), &["supply exceeds demand, added dummy destination with 25 units"]);
}

parameterized_test! {can_log_steps_only_when_requested, (log_steps, expected), {
    let (mode, messages) = create_logging_mode(log_steps);
    let step = AllocationStep { line: Line::Row(1), penalty: 2., cell: (1, 0), quantity: 5. };

    Telemetry::new(mode).on_step(0, &step);

    assert_eq!(messages.lock().unwrap().len(), expected);
}}

can_log_steps_only_when_requested! {
    case01_enabled: (true, 1),
    case02_disabled: (false, 0),
}

#[test]
fn can_format_step_message() {
    let (mode, messages) = create_logging_mode(true);
    let step = AllocationStep { line: Line::Column(2), penalty: 3., cell: (0, 2), quantity: 10. };

    Telemetry::new(mode).on_step(4, &step);

    assert_eq!(messages.lock().unwrap()[0], "step 5: column 2 with penalty 3, allocate 10 to cell (0, 2)");
}

#[test]
fn can_keep_silence_without_logging_mode() {
    let telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_degenerate();
    telemetry.on_result(&Solution::empty(&create_balanced_problem()));
}

/// Integration tests for the application layer
mod test_utilities;

use test_utilities::mocks::*;
use twotrack::prelude::*;

fn evaluate(
    input: &str,
    steps: Vec<Step>,
) -> (PipelineRequest, PipelineResponse, MockStepReporter) {
    let reporter = MockStepReporter::new();
    let use_case = EvaluatePipelineUseCase::new(reporter.clone());
    let request = PipelineRequest::new(input, steps);
    let response = use_case.execute(&request);
    (request, response, reporter)
}

#[test]
fn test_default_pipeline_happy_path() {
    let (request, response, reporter) = evaluate("10", Pipeline::default_steps());

    assert_eq!(response.outcome, Outcome::Success(20));
    assert_eq!(response.applied_steps, 2);

    let messages = reporter.get_messages();
    assert_eq!(reporter.message_count(), 4);
    assert_eq!(messages[0], "📥 Input '10' with 2 step(s)");
    assert_eq!(messages[1], "Step 0: positive applied -> Success");
    assert_eq!(messages[2], "Step 1: mul:2 applied -> Success");
    assert_eq!(messages[3], "Completed: Success");

    let report = PipelineReport::build(&request, &response);
    assert_eq!(report.exit_code().as_i32(), 0);
}

#[test]
fn test_failure_passes_through_success_steps() {
    let (_, response, reporter) = evaluate("-5", vec![Step::Positive, Step::Mul(2), Step::Add(1)]);

    assert_eq!(
        response.outcome,
        Outcome::Failure(StepFailure::NotPositive { value: -5 })
    );
    assert_eq!(response.applied_steps, 1);

    let messages = reporter.get_messages();
    assert_eq!(messages[2], "Step 1: mul:2 skipped -> Failure");
    assert_eq!(messages[3], "Step 2: add:1 skipped -> Failure");
}

#[test]
fn test_recover_switches_back_to_success_track() {
    let (_, response, _) = evaluate(
        "7",
        vec![
            Step::Div(0),
            Step::Label("ratio".to_string()),
            Step::Recover(1),
            Step::Add(2),
        ],
    );
    assert_eq!(response.outcome, Outcome::Success(3));
    assert_eq!(response.applied_steps, 4);
}

#[test]
fn test_overflow_is_a_failure_not_a_panic() {
    let (_, response, _) = evaluate(&i64::MAX.to_string(), vec![Step::Add(1)]);
    assert_eq!(
        response.outcome.unwrap_err().to_string(),
        format!("{} + 1 overflows a 64-bit integer", i64::MAX)
    );
}

#[test]
fn test_invalid_input_reports_warning() {
    let (_, response, reporter) = evaluate("twelve", vec![Step::Positive]);
    assert!(response.outcome.is_failure());
    assert_eq!(response.applied_steps, 0);

    let messages = reporter.get_messages();
    assert!(messages[1].starts_with("Warning: ⚠️  Starting on the failure track"));
    assert!(messages[1].contains("'twelve' is not an integer"));
}

#[test]
fn test_json_report_through_presenter() {
    let (request, response, _) = evaluate("4", vec![Step::Mul(3)]);
    let report = PipelineReport::build(&request, &response);

    let formatter = JsonFormatter::new();
    let presenter = MockOutputPresenter::new();
    presenter.present(&formatter.format(&report).unwrap()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&presenter.last().unwrap()).unwrap();
    assert_eq!(json["input"], "4");
    assert_eq!(json["steps"][0], "mul:3");
    assert_eq!(json["applied_steps"], 1);
    assert_eq!(json["outcome"]["success"], "12");
}

#[test]
fn test_text_report_of_failure() {
    let (request, response, _) = evaluate(
        "0",
        vec![Step::Positive, Step::Label("check".to_string())],
    );
    let report = PipelineReport::build(&request, &response);

    let output = TextFormatter::new().format(&report).unwrap();
    assert_eq!(output, "Failure: check: 0 is not positive\n");
    assert_eq!(report.exit_code().as_i32(), 1);
}

#[test]
fn test_lift_and_combinators_compose() {
    let result = lift(|| 10)
        .map_err(|fault| fault.to_string())
        .and_then(|v| {
            if v > 0 {
                Outcome::Success(v * 2)
            } else {
                Outcome::Failure("not positive".to_string())
            }
        })
        .map(|v| v.to_string());
    assert_eq!(result, Outcome::Success("20".to_string()));
}

#[test]
fn test_join_of_pipeline_results() {
    let left = Pipeline::default().run(parse_input("3"));
    let right = Pipeline::default().run(parse_input("-3"));

    let joined = join(left.clone(), left);
    assert_eq!(joined, Outcome::Success((6, 6)));

    let mixed = join(Outcome::Success(6), right);
    assert!(matches!(mixed, Outcome::Failure(JoinError::Right(_))));
}

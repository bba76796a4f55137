use chemxplore::{Calculator, DisplayState, Form, ResultPanel, default_constants};

pub struct TestCase<'a> {
    pub name: &'a str,
    pub fields: Vec<(&'a str, &'a str)>,
    pub expected: &'a str,
}

pub fn form_of(fields: &[(&str, &str)]) -> Form {
    fields
        .iter()
        .fold(Form::new(), |form, (name, value)| form.with(*name, *value))
}

/// Runs `calculator` on `fields` and returns the result area text and state.
pub fn run_calculator(calculator: Calculator, fields: &[(&str, &str)]) -> (String, DisplayState) {
    let mut panel = ResultPanel::new();
    let state = calculator.run(&form_of(fields), default_constants(), &mut panel);
    (panel.text(), state)
}

pub fn run_group_test(calculator: Calculator, cases: Vec<TestCase>, expected_state: DisplayState) {
    println!("\nRunning Group Test: {}", calculator.title());
    println!("{:-<80}", "");

    let mut failures = Vec::new();
    for case in &cases {
        let (text, state) = run_calculator(calculator, &case.fields);
        println!("{:<28} | {}", case.name, text.replace('\n', " / "));

        if text != case.expected || state != expected_state {
            failures.push(format!(
                "{}: expected {:?} ({:?}), got {:?} ({:?})",
                case.name, case.expected, expected_state, text, state
            ));
        }
    }
    println!("{:-<80}\n", "");

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

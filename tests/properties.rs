mod common;

use chemxplore::{
    Calculator, Constants, DisplayState, ResultPanel, format_scientific, validate_number,
};
use common::{form_of, run_calculator};

#[test]
fn test_validate_number_contract() {
    for accepted in ["5", "0.001", "1e10"] {
        assert!(validate_number(accepted), "{accepted:?} should be valid");
    }
    for rejected in ["0", "-3", "abc", "", "NaN"] {
        assert!(!validate_number(rejected), "{rejected:?} should be invalid");
    }
}

#[test]
fn test_format_scientific_contract() {
    assert_eq!(format_scientific(1_234_567.0), "1.235e+6");
    assert_eq!(format_scientific(0.5), "0.500");
    assert_eq!(format_scientific(0.0001), "1.000e-4");
}

#[test]
fn test_format_scientific_rounds_ties_up() {
    assert_eq!(format_scientific(0.0625), "0.063");
    assert_eq!(format_scientific(1_234_500.0), "1.235e+6");
}

#[test]
fn test_every_calculator_is_idempotent() {
    let sample = [
        ("mass", "18"),
        ("molar_mass", "18"),
        ("moles", "2"),
        ("particles", "1e24"),
        ("volume", "5"),
        ("molarity", "0.1"),
        ("v1", "2"),
        ("m2", "1"),
        ("v2", "4"),
        ("elements", "C,H"),
        ("masses", "12,4"),
        ("equation", "N2 + 3H2 -> 2NH3"),
        ("reactant1", "N2"),
        ("amount1", "1"),
        ("reactant2", "3H2"),
        ("amount2", "2"),
        ("temperature", "300"),
    ];

    for calculator in Calculator::ALL {
        let first = run_calculator(calculator, &sample);
        let second = run_calculator(calculator, &sample);
        assert_eq!(first, second, "{} is not idempotent", calculator);
    }
}

#[test]
fn test_failed_calculation_replaces_previous_result() {
    let constants = Constants::default();
    let mut panel = ResultPanel::new();

    Calculator::MolesToVolume.run(&form_of(&[("moles", "1")]), &constants, &mut panel);
    assert_eq!(panel.text(), "Result: 22.400 liters (at STP)");

    Calculator::MolesToVolume.run(&form_of(&[("moles", "0")]), &constants, &mut panel);
    assert_eq!(panel.state(), Some(DisplayState::Error));
    assert!(!panel.text().contains("Result"));
}

#[test]
fn test_custom_constants_flow_through_calculators() {
    let constants = Constants::load_from_str("gas_constant = 0.08206").unwrap();
    let mut panel = ResultPanel::new();
    Calculator::IdealGas.run(
        &form_of(&[("pressure", "1"), ("volume", "22.4"), ("moles", "1")]),
        &constants,
        &mut panel,
    );
    assert_eq!(panel.text(), "Result: 272.971 K");
}

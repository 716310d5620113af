//! Property-based tests for the keypad calculator
//!
//! Proptest explores key sequences a hand-written test would not think of.

use deskcalc::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Modulo),
    ]
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => digit_strategy().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        1 => operator_strategy().prop_map(Input::Operator),
        1 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::Backspace),
    ]
}

/// Typed number text: 1-6 digits, optionally a fraction of 1-3 digits
fn operand_strategy() -> impl Strategy<Value = String> {
    ("[1-9][0-9]{0,5}", proptest::option::of("[0-9]{0,2}[1-9]")).prop_map(|(int, frac)| {
        match frac {
            Some(frac) => format!("{int}.{frac}"),
            None => int,
        }
    })
}

fn type_number(calc: &mut Calculator, text: &str) {
    for c in text.chars() {
        match c {
            '.' => calc.input_decimal(),
            d => calc.input_digit(d.to_digit(10).unwrap() as u8),
        }
    }
}

fn press_all(calc: &mut Calculator, inputs: &[Input]) {
    for input in inputs {
        // Errors leave the state alone; keep going
        let _ = calc.press(*input);
    }
}

proptest! {
    /// Digits from a cleared state concatenate, with only a leading zero
    /// suppressed
    #[test]
    fn prop_digits_concatenate(ds in proptest::collection::vec(digit_strategy(), 1..12)) {
        let mut calc = Calculator::new();
        for d in &ds {
            calc.input_digit(*d);
        }
        let typed: String = ds.iter().map(|d| d.to_string()).collect();
        let expected = match typed.trim_start_matches('0') {
            "" => "0".to_string(),
            rest => rest.to_string(),
        };
        prop_assert_eq!(calc.display(), expected);
    }

    /// The display never holds more than one decimal point and is never empty
    #[test]
    fn prop_display_well_formed(inputs in proptest::collection::vec(input_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &inputs);
        prop_assert!(!calc.display().is_empty());
        prop_assert!(calc.display().matches('.').count() <= 1);
    }

    /// Pressing `.` twice in a row is the same as pressing it once
    #[test]
    fn prop_decimal_idempotent(inputs in proptest::collection::vec(input_strategy(), 0..20)) {
        let mut once = Calculator::new();
        press_all(&mut once, &inputs);
        let mut twice = once.clone();
        once.input_decimal();
        twice.input_decimal();
        twice.input_decimal();
        prop_assert_eq!(once.display(), twice.display());
    }

    /// Clear always returns to the initial state and keeps history
    #[test]
    fn prop_clear_resets(inputs in proptest::collection::vec(input_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &inputs);
        let history = calc.history().clone();
        calc.clear();
        prop_assert_eq!(calc.display(), "0");
        prop_assert_eq!(calc.pending_operator(), None);
        prop_assert_eq!(calc.operand(), 0.0);
        prop_assert!(!calc.is_waiting_for_operand());
        prop_assert_eq!(calc.history(), &history);
    }

    /// Backspace never yields an empty display
    #[test]
    fn prop_backspace_never_empty(
        inputs in proptest::collection::vec(input_strategy(), 0..20),
        presses in 1usize..20,
    ) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &inputs);
        for _ in 0..presses {
            calc.backspace();
            prop_assert!(!calc.display().is_empty());
        }
    }

    /// `a op b =` shows the formatted result and logs exactly one entry
    #[test]
    fn prop_binary_round_trip(
        a in operand_strategy(),
        b in operand_strategy(),
        op in prop_oneof![
            Just(Operator::Add),
            Just(Operator::Subtract),
            Just(Operator::Multiply),
            Just(Operator::Divide),
        ],
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, &a);
        calc.input_operator(op).unwrap();
        type_number(&mut calc, &b);
        calc.calculate().unwrap();

        let x: f64 = a.parse().unwrap();
        let y: f64 = b.parse().unwrap();
        let expected = format_result(op.apply(x, y).unwrap());
        prop_assert_eq!(calc.display(), expected.as_str());
        prop_assert_eq!(calc.history().len(), 1);
        let entry = format!("{} {} {} = {}", format_result(x), op, b, expected);
        prop_assert_eq!(calc.history().last(), Some(entry.as_str()));
    }

    /// Division or modulo by zero fails and changes nothing
    #[test]
    fn prop_division_by_zero_leaves_state(
        a in operand_strategy(),
        op in prop_oneof![Just(Operator::Divide), Just(Operator::Modulo)],
    ) {
        let mut calc = Calculator::new();
        type_number(&mut calc, &a);
        calc.input_operator(op).unwrap();
        calc.input_digit(0);

        let before = (
            calc.display().to_string(),
            calc.operand(),
            calc.pending_operator(),
        );
        prop_assert_eq!(calc.calculate(), Err(CalcError::DivisionByZero));
        prop_assert_eq!(calc.clone().input_operator(Operator::Add), Err(CalcError::DivisionByZero));
        let after = (
            calc.display().to_string(),
            calc.operand(),
            calc.pending_operator(),
        );
        prop_assert_eq!(before, after);
        prop_assert!(calc.history().is_empty());
    }

    /// Clearing the history always empties it
    #[test]
    fn prop_clear_history(inputs in proptest::collection::vec(input_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        press_all(&mut calc, &inputs);
        calc.clear_history();
        prop_assert!(calc.history().is_empty());
    }
}

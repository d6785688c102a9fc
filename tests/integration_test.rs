use serde::Deserialize;
use std::path::Path;

use bijoy_rs::converter::BijoyConverter;

#[derive(Debug, Deserialize)]
struct TestCase {
    id: usize,
    input: String,
    description: String,
    expected: String,
}

fn load_cases() -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/test_cases.json");
    let json = std::fs::read_to_string(&path).expect("Failed to read test cases");
    serde_json::from_str(&json).expect("Failed to parse test cases")
}

#[test]
fn test_all_cases_match_expected() {
    let converter = BijoyConverter::default();
    let test_cases = load_cases();
    assert!(!test_cases.is_empty());

    let mut failures = Vec::new();
    for tc in &test_cases {
        let result = converter.convert(&tc.input);
        if result != tc.expected {
            failures.push(format!(
                "[{}] {}\n  Input: {}\n  Expected: {:?}\n  Actual: {:?}",
                tc.id, tc.description, tc.input, tc.expected, result
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "{}/{} test cases failed:\n{}",
            failures.len(),
            test_cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_batch_matches_sequential() {
    let converter = BijoyConverter::default();
    let test_cases = load_cases();
    let inputs: Vec<&str> = test_cases.iter().map(|tc| tc.input.as_str()).collect();

    let batch = converter.convert_batch(&inputs);
    let sequential: Vec<String> = inputs.iter().map(|s| converter.convert(s)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn test_cases_as_one_document() {
    let converter = BijoyConverter::default();
    let test_cases = load_cases();

    let document: Vec<&str> = test_cases.iter().map(|tc| tc.input.as_str()).collect();
    let expected: Vec<&str> = test_cases.iter().map(|tc| tc.expected.as_str()).collect();

    assert_eq!(converter.convert(&document.join("\n")), expected.join("\n"));
}

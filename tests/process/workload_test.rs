/*!
 * Workload Characterization Tests
 * Capability modifier properties
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use terminal_os_kernel::{capabilities, Capabilities, ProcessError, WorkloadCharacterization};

const NAMES: [&str; 4] = ["computing", "graphics", "storage", "network"];

fn workload(needs: &[(usize, f64)]) -> WorkloadCharacterization {
    let mut w = WorkloadCharacterization::default();
    for &(i, magnitude) in needs {
        w.require(NAMES[i], magnitude).unwrap();
    }
    w
}

#[test]
fn test_text_rendering_on_reference_cpu() {
    let offered = capabilities([("computing", 1.0), ("graphics", 2.0)]);
    assert_eq!(WorkloadCharacterization::text_rendering().modifier(&offered), 1.0);
}

#[test]
fn test_faster_hardware_exceeds_baseline() {
    let w = workload(&[(0, 1.0)]);
    assert_eq!(w.modifier(&capabilities([("computing", 4.0)])), 4.0);
}

#[test]
fn test_zero_offer_is_zero_modifier() {
    let w = workload(&[(0, 1.0)]);
    assert_eq!(w.modifier(&capabilities([("computing", 0.0)])), 0.0);
}

#[test]
fn test_rejects_non_positive_requirement() {
    let err = WorkloadCharacterization::default()
        .with_need("computing", 0.0)
        .unwrap_err();
    assert!(matches!(err, ProcessError::InvalidRequirement { .. }));
}

#[test]
fn test_deserializes_with_defaults() {
    let w: WorkloadCharacterization =
        serde_json::from_str(r#"{"io": 0.5, "memory": 0.1}"#).unwrap();
    assert_eq!(w.max_threads, 1);
    assert!(w.additional_needs().is_empty());
    assert_eq!(w.modifier(&Capabilities::default()), 1.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn no_needs_is_exactly_one(offered in proptest::collection::vec((0usize..4, 0.0f64..10.0), 0..4)) {
        let offered = capabilities(offered.into_iter().map(|(i, m)| (NAMES[i], m)));
        prop_assert_eq!(WorkloadCharacterization::default().modifier(&offered), 1.0);
    }

    #[test]
    fn modifier_is_product_of_ratios(
        required in proptest::collection::vec(0.1f64..10.0, 4),
        available in proptest::collection::vec(0.1f64..10.0, 4),
        count in 1usize..=4,
    ) {
        let needs: Vec<(usize, f64)> = (0..count).map(|i| (i, required[i])).collect();
        let offered = capabilities((0..4).map(|i| (NAMES[i], available[i])));

        let expected: f64 = (0..count).map(|i| available[i] / required[i]).product();
        let actual = workload(&needs).modifier(&offered);
        prop_assert!((actual - expected).abs() <= expected * 1e-12);
    }

    #[test]
    fn missing_capability_is_exactly_zero(
        available in proptest::collection::vec(0.1f64..1000.0, 4),
        missing in 0usize..4,
    ) {
        let needs: Vec<(usize, f64)> = (0..4).map(|i| (i, 1.0)).collect();
        let offered = capabilities(
            (0..4)
                .filter(|&i| i != missing)
                .map(|i| (NAMES[i], available[i])),
        );
        prop_assert_eq!(workload(&needs).modifier(&offered), 0.0);
    }
}

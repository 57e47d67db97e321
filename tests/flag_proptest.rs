#![cfg(not(feature = "loom"))]

use beacon::AtomicFlag;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Get,
    Set(bool),
    LazySet(bool),
    CompareAndSet(bool, bool),
    WeakCompareAndSet(bool, bool),
    GetAndSet(bool),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Get),
        any::<bool>().prop_map(Operation::Set),
        any::<bool>().prop_map(Operation::LazySet),
        (any::<bool>(), any::<bool>()).prop_map(|(e, u)| Operation::CompareAndSet(e, u)),
        (any::<bool>(), any::<bool>()).prop_map(|(e, u)| Operation::WeakCompareAndSet(e, u)),
        any::<bool>().prop_map(Operation::GetAndSet),
    ]
}

proptest! {
    #[test]
    fn matches_a_plain_bool_model(init in any::<bool>(), ops in proptest::collection::vec(operation(), 1..64)) {
        let flag = AtomicFlag::new(init);
        let mut model = init;

        for op in ops {
            match op {
                Operation::Get => prop_assert_eq!(flag.get(), model),
                Operation::Set(v) => {
                    flag.set(v);
                    model = v;
                }
                Operation::LazySet(v) => {
                    flag.lazy_set(v);
                    model = v;
                }
                Operation::CompareAndSet(e, u) => {
                    let swapped = flag.compare_and_set(e, u);
                    prop_assert_eq!(swapped, model == e);
                    if swapped {
                        model = u;
                    }
                }
                Operation::WeakCompareAndSet(e, u) => {
                    // Spurious failure is legal, so only the success case and
                    // the no-mutation-on-failure rule are checkable.
                    if flag.weak_compare_and_set(e, u) {
                        prop_assert_eq!(model, e);
                        model = u;
                    } else {
                        prop_assert_eq!(flag.get(), model);
                    }
                }
                Operation::GetAndSet(v) => {
                    prop_assert_eq!(flag.get_and_set(v), model);
                    model = v;
                }
            }
            prop_assert_eq!(flag.get(), model);
        }
    }

    #[test]
    fn new_get_set_round_trip(init in any::<bool>(), next in any::<bool>()) {
        let flag = AtomicFlag::new(init);
        prop_assert_eq!(flag.get(), init);

        flag.set(next);
        prop_assert_eq!(flag.get(), next);
    }

    #[test]
    fn display_matches_get(value in any::<bool>()) {
        let flag = AtomicFlag::new(value);
        prop_assert_eq!(flag.to_string(), value.to_string());
    }

    #[test]
    fn serde_round_trip(value in any::<bool>()) {
        let flag = AtomicFlag::new(value);
        let encoded = serde_json::to_string(&flag).unwrap();
        prop_assert_eq!(encoded.as_str(), if value { "true" } else { "false" });

        let decoded: AtomicFlag = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded.get(), value);
    }
}

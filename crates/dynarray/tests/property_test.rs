//! Model-based property tests: every operation sequence must leave a
//! `DynamicArray` agreeing with a plain `Vec` driven by the same operations,
//! and the capacity must follow the growth and removal rules.

use dynarray::{ArrayConfig, DynamicArray, Error, RemovalPolicy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Set(usize, u8),
    RemoveAt(usize),
    Remove(u8),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<u8>().prop_map(Op::Add),
        2 => (0usize..40, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        3 => (0usize..40).prop_map(Op::RemoveAt),
        2 => any::<u8>().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn arb_policy() -> impl Strategy<Value = RemovalPolicy> {
    prop_oneof![Just(RemovalPolicy::Rebuild), Just(RemovalPolicy::Shift)]
}

fn expected_growth(len: usize, capacity: usize) -> usize {
    if len + 1 >= capacity {
        if capacity == 0 { 1 } else { capacity * 2 }
    } else {
        capacity
    }
}

proptest! {
    #[test]
    fn agrees_with_vec_model(
        initial in 0isize..20,
        policy in arb_policy(),
        ops in prop::collection::vec(arb_op(), 0..120),
    ) {
        let config = ArrayConfig::new(initial).with_removal(policy);
        let mut array = DynamicArray::with_config(config).unwrap();
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            let capacity = array.capacity();
            match op {
                Op::Add(v) => {
                    array.add(v);
                    model.push(v);
                    prop_assert_eq!(array.capacity(), expected_growth(model.len() - 1, capacity));
                }
                Op::Set(i, v) => {
                    let result = array.set(i, v);
                    if i < model.len() {
                        prop_assert_eq!(result, Ok(()));
                        model[i] = v;
                    } else {
                        prop_assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len: model.len() }));
                    }
                    prop_assert_eq!(array.capacity(), capacity);
                }
                Op::RemoveAt(i) => {
                    let result = array.remove_at(i);
                    if i < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(i)));
                        let expected = match policy {
                            RemovalPolicy::Rebuild => model.len(),
                            RemovalPolicy::Shift => capacity,
                        };
                        prop_assert_eq!(array.capacity(), expected);
                    } else {
                        prop_assert_eq!(result, Err(Error::IndexOutOfRange { index: i, len: model.len() }));
                        prop_assert_eq!(array.capacity(), capacity);
                    }
                }
                Op::Remove(v) => {
                    let position = model.iter().position(|&x| x == v);
                    prop_assert_eq!(array.index_of(&v), position);
                    prop_assert_eq!(array.remove(&v), position.is_some());
                    if let Some(i) = position {
                        model.remove(i);
                    }
                }
                Op::Clear => {
                    array.clear();
                    model.clear();
                    prop_assert!(array.is_empty());
                    prop_assert_eq!(array.capacity(), capacity);
                }
            }

            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.size(), model.len());
        }

        prop_assert_eq!(array.to_vec(), model.clone());
        prop_assert_eq!(array.iter().len(), model.len());
        prop_assert_eq!(array.into_iter().collect::<Vec<_>>(), model);
    }

    #[test]
    fn adds_are_readable_in_order(values in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut array = DynamicArray::new(0).unwrap();
        for &v in &values {
            array.add(v);
        }
        prop_assert_eq!(array.size(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i), Ok(v));
            prop_assert_eq!(array[i], *v);
        }
    }

    #[test]
    fn add_then_remove_last_restores_size(
        values in prop::collection::vec(any::<u16>(), 0..50),
        extra in any::<u16>(),
        policy in arb_policy(),
    ) {
        let config = ArrayConfig::default().with_removal(policy);
        let mut array = DynamicArray::with_config(config).unwrap();
        array.extend(values.iter().copied());
        let size = array.size();

        array.add(extra);
        prop_assert_eq!(array.remove_at(array.size() - 1), Ok(extra));
        prop_assert_eq!(array.size(), size);
        prop_assert_eq!(array.to_vec(), values);
    }

    #[test]
    fn out_of_range_remove_changes_nothing(
        values in prop::collection::vec(any::<u8>(), 0..30),
        past_end in 0usize..1000,
        policy in arb_policy(),
    ) {
        let config = ArrayConfig::default().with_removal(policy);
        let mut array = DynamicArray::with_config(config).unwrap();
        array.extend(values.iter().copied());
        let before = array.stats();

        let index = values.len() + past_end;
        prop_assert_eq!(
            array.remove_at(index),
            Err(Error::IndexOutOfRange { index, len: values.len() })
        );
        prop_assert_eq!(array.stats(), before);
        prop_assert_eq!(array.to_vec(), values);
    }

    #[test]
    fn negative_capacity_always_rejected(capacity in isize::MIN..0) {
        prop_assert_eq!(
            DynamicArray::<u8>::new(capacity).err(),
            Some(Error::InvalidArgument { capacity })
        );
    }

    #[test]
    fn display_matches_vec_layout(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let array: DynamicArray<i32> = values.iter().copied().collect();
        let expected = format!(
            "[{}]",
            values.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(array.to_string(), expected);
    }
}

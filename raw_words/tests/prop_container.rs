//! Property-based tests for the word container.

use proptest::prelude::*;
use raw_words::Container;

proptest! {
    #[test]
    fn prop_push_then_read(values: Vec<u64>) {
        let mut c = Container::<u64>::new();
        for &v in &values {
            c.push(v);
        }

        prop_assert_eq!(c.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(c.get(i).copied(), Ok(v));
        }
        prop_assert!(c.get(values.len()).is_err());
    }
}

proptest! {
    #[test]
    fn prop_resize_keeps_prefix_and_zeroes_tail(
        values in prop::collection::vec(any::<u32>(), 0..200),
        new_len in 0usize..400,
    ) {
        let mut c = Container::from_slice(&values);
        c.resize(new_len);

        prop_assert_eq!(c.len(), new_len);
        for i in 0..new_len {
            let expected = values.get(i).copied().unwrap_or(0);
            prop_assert_eq!(c[i], expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_random_write(values in prop::collection::vec(any::<u64>(), 1..100), index in 0usize..100, new_val: u64) {
        let mut c = Container::from_slice(&values);
        let index = index % values.len();
        c.write(index, new_val).unwrap();

        for (i, &v) in values.iter().enumerate() {
            let expected = if i == index { new_val } else { v };
            prop_assert_eq!(c[i], expected);
        }
    }
}

proptest! {
    #[test]
    fn prop_byte_view_length(values in prop::collection::vec(any::<u16>(), 0..300)) {
        let c = Container::from_slice(&values);
        prop_assert_eq!(c.as_bytes().len(), values.len() * 2);
        prop_assert_eq!(c.size_in_bytes(), values.len() * 2);
    }
}

//! Property-based tests for length and content synthesis.

use proptest::prelude::*;
use stringwrite_generator::{
    generate_lengths, generate_values, generate_values_parallel, BitGenerator,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: Two generators from the same seed emit the same stream.
    #[test]
    fn prop_same_seed_same_stream(seed in any::<u8>(), steps in 1usize..2000) {
        let mut a = BitGenerator::new(seed);
        let mut b = BitGenerator::new(seed);
        for _ in 0..steps {
            prop_assert_eq!(a.next_byte(), b.next_byte());
        }
    }

    /// Property: Every length lies in `min..min + mask + 1`.
    #[test]
    fn prop_lengths_in_bounds(
        amount in 0usize..500,
        min in 0u32..10_000,
        mask in 0u32..1024,
    ) {
        let lengths = generate_lengths(amount, min, mask).unwrap();
        prop_assert_eq!(lengths.lengths.len(), amount);
        for &len in &lengths.lengths {
            prop_assert!(len as u64 >= min as u64);
            prop_assert!((len as u64) < min as u64 + mask as u64 + 1);
        }
    }

    /// Property: Values are printable and sized to the sum of lengths.
    #[test]
    fn prop_values_printable_and_sized(
        amount in 0usize..200,
        min in 0u32..80,
        mask in prop::sample::select(vec![0u32, 1, 3, 15, 63, 255]),
    ) {
        let lengths = generate_lengths(amount, min, mask).unwrap();
        let values = generate_values(&lengths.lengths).unwrap();
        prop_assert_eq!(values.len(), lengths.total);
        prop_assert!(values.iter().all(|&b| (32..=126).contains(&b) && b != 127));
    }

    /// Property: Worker count never changes the output.
    #[test]
    fn prop_parallel_is_bit_exact(
        lengths in prop::collection::vec(0i32..300, 0..120),
        workers in 1usize..12,
    ) {
        let sequential = generate_values(&lengths).unwrap();
        let parallel = generate_values_parallel(&lengths, workers).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

use dyn_bitset::DynamicBitset;

#[test]
fn test_new() {
    let bits = DynamicBitset::<u64>::new();
    assert_eq!(bits.len(), 0);
    assert_eq!(bits.num_blocks(), 0);
    assert!(bits.is_empty());
    assert_eq!(bits.capacity(), 0);
    assert_eq!(DynamicBitset::<u64>::BITS_PER_BLOCK, 64);
}

#[test]
fn test_basic_operations() {
    let mut bits = DynamicBitset::<u32>::with_len(50);

    // Initially all zero
    assert_eq!(bits.count(), 0);
    assert!(bits.none());

    bits.set(10, true);
    bits.set(42, true);

    assert!(bits.test(10));
    assert!(bits.test(42));
    assert!(!bits.test(11));
    assert!(!bits.test(41));
    assert_eq!(bits.get(42), Some(true));
    assert_eq!(bits.get(50), None);

    assert_eq!(bits.count(), 2);
    assert_eq!(bits.len(), 50);

    bits.reset(10).flip(11);
    assert!(!bits.test(10));
    assert!(bits.test(11));
}

#[test]
fn test_parse_matches_value_constructor() {
    let parsed: DynamicBitset<u8> = "1101".parse().unwrap();
    let built = DynamicBitset::<u8>::with_value(4, 13);
    assert_eq!(parsed, built);
    assert!(parsed.test(0));
    assert!(!parsed.test(1));
    assert!(parsed.test(2));
    assert!(parsed.test(3));
}

#[test]
fn test_reset_range_then_scan() {
    let mut bits = DynamicBitset::<u64>::with_len(10);
    bits.set_all();
    bits.reset_range(3, 4);

    assert_eq!(bits.count(), 6);
    assert_eq!(bits.find_first(), Some(0));
    assert_eq!(bits.find_next(2), Some(7));
    assert_eq!(bits.to_string(), "1110000111");
}

#[test]
fn test_scan_visits_each_set_bit_once() {
    let mut bits = DynamicBitset::<u16>::with_len(200);
    let expected = [0, 1, 15, 16, 17, 63, 64, 150, 199];
    for &pos in &expected {
        bits.set(pos, true);
    }

    let mut seen = Vec::new();
    let mut next = bits.find_first();
    while let Some(pos) = next {
        seen.push(pos);
        next = bits.find_next(pos);
    }
    assert_eq!(seen, expected);
    assert_eq!(bits.ones().collect::<Vec<_>>(), expected);
}

#[test]
fn test_whole_vector_operations() {
    let mut bits = DynamicBitset::<u8>::with_len(13);
    bits.set_all();
    assert!(bits.all());
    assert_eq!(bits.count(), 13);
    assert_eq!(bits.as_blocks(), &[0xff, 0x1f]);

    bits.flip_all();
    assert!(bits.none());
    assert_eq!(bits.as_blocks(), &[0, 0]);

    bits.flip(12);
    bits.flip_all();
    assert_eq!(bits.count(), 12);
    assert!(!bits.test(12));

    bits.reset_all();
    assert!(bits.none());
    assert_eq!(bits.len(), 13);
}

#[test]
fn test_test_set_returns_previous() {
    let mut bits = DynamicBitset::<u64>::with_len(3);
    assert!(!bits.test_set(1, true));
    assert!(bits.test_set(1, true));
    assert!(bits.test_set(1, false));
    assert!(!bits.test(1));
}

#[test]
fn test_clone_and_swap() {
    let mut a: DynamicBitset<u16> = "1011".parse().unwrap();
    let mut b = DynamicBitset::<u16>::with_len(40);
    let original_a = a.clone();

    a.swap(&mut b);
    assert_eq!(b, original_a);
    assert_eq!(a.len(), 40);

    let mut c = DynamicBitset::<u16>::with_len(100);
    c.clone_from(&b);
    assert_eq!(c, b);
}

#[test]
fn test_max_len() {
    assert!(DynamicBitset::<u8>::max_len() >= isize::MAX as usize);
    assert!(DynamicBitset::<u64>::max_len() >= DynamicBitset::<u8>::max_len());
}

#[test]
fn test_shift_by_len_clears_everything() {
    let mut bits: DynamicBitset<u8> = "1011011".parse().unwrap();
    bits <<= 7;
    assert!(bits.none());
    assert_eq!(bits.len(), 7);

    let mut bits: DynamicBitset<u8> = "1011011".parse().unwrap();
    bits >>= 7;
    assert!(bits.none());
}

#[test]
fn test_shift_by_zero_is_noop() {
    let original: DynamicBitset<u32> = "100000000000000000000000000000000000001".parse().unwrap();
    let mut bits = original.clone();
    bits <<= 0;
    assert_eq!(bits, original);
    bits >>= 0;
    assert_eq!(bits, original);
}

#[test]
fn test_shift_on_empty() {
    let mut bits = DynamicBitset::<u8>::new();
    bits <<= 3;
    bits >>= 3;
    assert!(bits.is_empty());
}

#[test]
fn test_shift_partial_block_keeps_tail_clear() {
    let mut bits = DynamicBitset::<u8>::with_len(11);
    bits.set_all();
    bits <<= 2;
    assert_eq!(bits.count(), 9);
    assert!(bits.check_invariants());
    assert_eq!(bits.to_string(), "11111111100");

    bits >>= 9;
    assert_eq!(bits.to_string(), "00000000011");
}

#[test]
fn test_index_operator() {
    let bits: DynamicBitset<u8> = "10".parse().unwrap();
    assert!(!bits[0]);
    assert!(bits[1]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_out_of_bounds_panics() {
    let bits = DynamicBitset::<u8>::with_len(4);
    let _ = bits[4];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_range_out_of_bounds_panics() {
    let mut bits = DynamicBitset::<u8>::with_len(4);
    bits.flip_range(2, 3);
}

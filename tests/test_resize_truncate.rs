use dyn_bitset::{BitsetError, DynamicBitset};

#[test]
fn test_resize_expand() {
    let mut bits = DynamicBitset::<u8>::with_len(5);
    bits.set(1, true);
    bits.set(4, true);

    bits.resize(20, false);
    assert_eq!(bits.len(), 20);
    assert_eq!(bits.num_blocks(), 3);
    assert!(bits.test(1));
    assert!(bits.test(4));
    assert_eq!(bits.count(), 2); // New bits are zero
}

#[test]
fn test_resize_expand_with_ones() {
    let mut bits: DynamicBitset<u16> = "01".parse().unwrap();
    bits.resize(40, true);
    assert_eq!(bits.count(), 39);
    assert!(!bits.test(1));
    assert!(bits.test(0));
    for i in 2..40 {
        assert!(bits.test(i), "bit {i} should be set");
    }
    assert!(bits.check_invariants());
}

#[test]
fn test_resize_shrink() {
    let mut bits = DynamicBitset::<u32>::with_len(100);
    bits.set_all();

    bits.resize(33, false);
    assert_eq!(bits.len(), 33);
    assert_eq!(bits.num_blocks(), 2);
    assert_eq!(bits.count(), 33);
    assert!(bits.all());

    // Regrowing must not resurrect the dropped bits
    bits.resize(64, false);
    assert_eq!(bits.count(), 33);
    assert_eq!(bits.find_first_from(33), None);
}

#[test]
fn test_resize_to_zero() {
    let mut bits = DynamicBitset::<u8>::with_len(30);
    bits.set_all();
    bits.resize(0, true);
    assert!(bits.is_empty());
    assert_eq!(bits.num_blocks(), 0);
    assert_eq!(bits.find_first(), None);
}

#[test]
fn test_resize_same_length_ignores_value() {
    let mut bits = DynamicBitset::<u8>::with_len(12);
    bits.resize(12, true);
    assert!(bits.none());
}

#[test]
fn test_try_resize() {
    let mut bits = DynamicBitset::<u64>::with_len(10);
    bits.try_resize(200, true).unwrap();
    assert_eq!(bits.count(), 190);

    let err = bits.try_resize(usize::MAX, false).unwrap_err();
    assert!(matches!(err, BitsetError::Alloc(_)));
    assert_eq!(bits.len(), 200);
    assert_eq!(bits.count(), 190);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut bits = DynamicBitset::<u64>::with_len(1000);
    let capacity = bits.capacity();
    bits.clear();
    assert!(bits.is_empty());
    assert_eq!(bits.capacity(), capacity);
    bits.shrink_to_fit();
    assert!(bits.capacity() < capacity);
}

#[test]
fn test_reserve_does_not_change_length() {
    let mut bits: DynamicBitset<u8> = "101".parse().unwrap();
    bits.reserve(500);
    assert!(bits.capacity() >= 500);
    assert_eq!(bits.to_string(), "101");
    bits.try_reserve(1000).unwrap();
    assert!(bits.capacity() >= 1000);
    assert!(bits.try_reserve(usize::MAX).is_err());
    assert_eq!(bits.len(), 3);
}

#[test]
fn test_push_back_across_blocks() {
    let mut bits = DynamicBitset::<u8>::new();
    for i in 0..20 {
        bits.push_back(i % 2 == 0);
        assert_eq!(bits.len(), i + 1);
        assert!(bits.check_invariants());
    }
    assert_eq!(bits.count(), 10);
    assert_eq!(bits.as_blocks(), &[0x55, 0x55, 0x05]);

    bits.try_push_back(true).unwrap();
    assert_eq!(bits.len(), 21);
    assert!(bits.test(20));
}

#[test]
fn test_pop_back_to_empty() {
    let mut bits: DynamicBitset<u8> = "100000001".parse().unwrap();
    assert_eq!(bits.pop_back(), Some(true));
    assert_eq!(bits.num_blocks(), 1);
    for _ in 0..7 {
        assert_eq!(bits.pop_back(), Some(false));
    }
    assert_eq!(bits.pop_back(), Some(true));
    assert_eq!(bits.pop_back(), None);
    assert!(bits.is_empty());
    assert_eq!(bits.num_blocks(), 0);
}

#[test]
fn test_pop_back_clears_bit() {
    let mut bits: DynamicBitset<u8> = "11".parse().unwrap();
    bits.pop_back();
    bits.push_back(false);
    assert_eq!(bits.to_string(), "01");
}

#[test]
fn test_take_moves_contents() {
    let mut bits: DynamicBitset<u32> = "110".parse().unwrap();
    let taken = bits.take();
    assert_eq!(taken.to_string(), "110");
    assert!(bits.is_empty());
    assert_eq!(bits, DynamicBitset::new());
}

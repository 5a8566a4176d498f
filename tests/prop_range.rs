use dyn_bitset::DynamicBitset;
use proptest::prelude::*;

// Strategy for generating a bit model together with its bit vector
prop_compose! {
    fn arb_bits(max_len: usize)
        (model in prop::collection::vec(any::<bool>(), 0..max_len))
        -> (Vec<bool>, DynamicBitset<u8>)
    {
        let bits: DynamicBitset<u8> = model.iter().copied().collect();
        (model, bits)
    }
}

// Strategy for a model plus an in-bounds range [pos, pos + len)
fn arb_bits_with_range(
    max_len: usize,
) -> impl Strategy<Value = (Vec<bool>, DynamicBitset<u8>, usize, usize)> {
    arb_bits(max_len).prop_flat_map(|(model, bits)| {
        let n = model.len();
        (Just(model), Just(bits), 0..=n).prop_flat_map(move |(model, bits, pos)| {
            (Just(model), Just(bits), Just(pos), 0..=(n - pos))
        })
    })
}

fn to_model<B: dyn_bitset::Block>(bits: &DynamicBitset<B>) -> Vec<bool> {
    bits.iter().collect()
}

fn model_string(model: &[bool]) -> String {
    model.iter().rev().map(|&b| if b { '1' } else { '0' }).collect()
}

proptest! {
    #[test]
    fn test_set_range_matches_model(
        (mut model, mut bits, pos, len) in arb_bits_with_range(200),
        value in any::<bool>()
    ) {
        bits.set_range(pos, len, value);
        model[pos..pos + len].fill(value);

        prop_assert_eq!(to_model(&bits), model);
        prop_assert!(bits.check_invariants());
    }

    #[test]
    fn test_flip_range_matches_model(
        (mut model, mut bits, pos, len) in arb_bits_with_range(200)
    ) {
        bits.flip_range(pos, len);
        for bit in &mut model[pos..pos + len] {
            *bit = !*bit;
        }

        prop_assert_eq!(to_model(&bits), model);
        prop_assert!(bits.check_invariants());
    }

    #[test]
    fn test_count_range_matches_model(
        (model, bits, pos, len) in arb_bits_with_range(200)
    ) {
        let expected = model[pos..pos + len].iter().filter(|&&b| b).count();
        prop_assert_eq!(bits.count_range(pos, len), expected);
        prop_assert_eq!(bits.count(), model.iter().filter(|&&b| b).count());
    }

    #[test]
    fn test_flip_range_twice_is_identity(
        (_model, bits, pos, len) in arb_bits_with_range(200)
    ) {
        let mut flipped = bits.clone();
        flipped.flip_range(pos, len).flip_range(pos, len);
        prop_assert_eq!(flipped, bits);
    }

    #[test]
    fn test_scanner_agrees_with_model(
        (model, bits) in arb_bits(200),
        from in 0usize..220
    ) {
        let first = model.iter().position(|&b| b);
        prop_assert_eq!(bits.find_first(), first);

        let next = model.iter().enumerate().skip(from + 1).find(|(_, b)| **b).map(|(i, _)| i);
        prop_assert_eq!(bits.find_next(from), next);

        let last = model.iter().rposition(|&b| b);
        prop_assert_eq!(bits.find_last(), last);

        let ones: Vec<usize> = (0..model.len()).filter(|&i| model[i]).collect();
        prop_assert_eq!(bits.ones().collect::<Vec<_>>(), ones.clone());
        prop_assert_eq!(bits.ones().rev().collect::<Vec<_>>(), ones.into_iter().rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_shift_left_matches_model(
        (model, bits) in arb_bits(200),
        n in 0usize..220
    ) {
        let shifted = &bits << n;
        let expected: Vec<bool> = (0..model.len())
            .map(|i| i >= n && model[i - n])
            .collect();
        prop_assert_eq!(to_model(&shifted), expected);
        prop_assert!(shifted.check_invariants());
    }

    #[test]
    fn test_shift_right_matches_model(
        (model, bits) in arb_bits(200),
        n in 0usize..220
    ) {
        let shifted = &bits >> n;
        let expected: Vec<bool> = (0..model.len())
            .map(|i| i.checked_add(n).is_some_and(|j| j < model.len() && model[j]))
            .collect();
        prop_assert_eq!(to_model(&shifted), expected);
    }

    #[test]
    fn test_resize_matches_model(
        (mut model, mut bits) in arb_bits(150),
        new_len in 0usize..300,
        value in any::<bool>()
    ) {
        bits.resize(new_len, value);
        model.resize(new_len, value);
        prop_assert_eq!(to_model(&bits), model);
        prop_assert!(bits.check_invariants());
    }

    #[test]
    fn test_string_round_trip((model, bits) in arb_bits(300)) {
        let text = bits.to_string();
        prop_assert_eq!(&text, &model_string(&model));
        let back: DynamicBitset<u8> = text.parse().unwrap();
        prop_assert_eq!(back, bits);
    }

    #[test]
    fn test_block_widths_agree((model, bits) in arb_bits(300)) {
        let wide: DynamicBitset<u64> = model.iter().copied().collect();
        prop_assert_eq!(wide.to_string(), bits.to_string());
        prop_assert_eq!(wide.count(), bits.count());
        prop_assert_eq!(wide.find_first(), bits.find_first());
    }

    #[test]
    fn test_ordering_matches_text(
        (a_model, a) in arb_bits(20),
        (b_model, b) in arb_bits(20)
    ) {
        prop_assert_eq!(a.cmp(&b), model_string(&a_model).cmp(&model_string(&b_model)));
    }

    #[test]
    fn test_set_ops_match_model(
        model in prop::collection::vec(any::<(bool, bool)>(), 0..200)
    ) {
        let a: DynamicBitset<u16> = model.iter().map(|&(x, _)| x).collect();
        let b: DynamicBitset<u16> = model.iter().map(|&(_, y)| y).collect();

        let and: Vec<bool> = model.iter().map(|&(x, y)| x & y).collect();
        let or: Vec<bool> = model.iter().map(|&(x, y)| x | y).collect();
        let xor: Vec<bool> = model.iter().map(|&(x, y)| x ^ y).collect();
        let diff: Vec<bool> = model.iter().map(|&(x, y)| x & !y).collect();

        prop_assert_eq!(to_model(&(&a & &b)), and);
        prop_assert_eq!(to_model(&(&a | &b)), or);
        prop_assert_eq!(to_model(&(&a ^ &b)), xor);
        prop_assert_eq!(to_model(&(&a - &b)), diff);

        let subset = model.iter().all(|&(x, y)| !x || y);
        prop_assert_eq!(a.is_subset_of(&b), subset);
        prop_assert_eq!(a.is_proper_subset_of(&b), subset && a != b);
        prop_assert_eq!(a.intersects(&b), model.iter().any(|&(x, y)| x && y));
    }

    #[test]
    fn test_push_pop_matches_model(
        ops in prop::collection::vec(prop::option::of(any::<bool>()), 0..200)
    ) {
        let mut model = Vec::new();
        let mut bits = DynamicBitset::<u8>::new();
        for op in ops {
            match op {
                Some(bit) => {
                    model.push(bit);
                    bits.push_back(bit);
                }
                None => prop_assert_eq!(bits.pop_back(), model.pop()),
            }
            prop_assert!(bits.check_invariants());
        }
        prop_assert_eq!(to_model(&bits), model);
    }

    #[test]
    fn test_value_constructor_matches_integer(
        len in 0usize..100,
        value in any::<u64>()
    ) {
        let bits = DynamicBitset::<u16>::with_value(len, value);
        prop_assert_eq!(bits.len(), len);
        for i in 0..len {
            prop_assert_eq!(bits.test(i), i < 64 && (value >> i) & 1 == 1);
        }
    }
}

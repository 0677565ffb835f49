use super::*;

#[test]
fn can_return_weights() {
    let random = DefaultRandom::default();
    let weights = &[100., 50., 20.];
    let experiments = 10000_usize;
    let total_sum = weights.iter().sum::<Float>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| {
        let idx = random.weighted(weights);
        *counter.get_mut(idx).unwrap() += 1;
    });

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as Float / experiments as Float;
        let expected_ratio = *weight / total_sum;

        assert!((actual_ratio - expected_ratio).abs() < 0.05);
    });
}

#[test]
fn can_skip_zero_weights() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let idx = random.weighted(&[0., 1., 0.]);
        assert_eq!(idx, 1);
    });
}

#[test]
fn can_return_first_index_when_all_weights_are_zero() {
    let random = DefaultRandom::default();

    assert_eq!(random.weighted(&[0., 0.]), 0);
}

#[test]
fn can_produce_values_within_ranges() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-2, 3);
        let real = random.uniform_real(0.5, 1.5);

        assert!((-2..=3).contains(&int));
        assert!((0.5..1.5).contains(&real));
    });

    assert_eq!(random.uniform_int(7, 7), 7);
    assert_eq!(random.uniform_real(2., 2.), 2.);
}

#[test]
fn can_repeat_sequence_with_the_same_seed() {
    let sample = || {
        let random = DefaultRandom::new_repeatable(42);
        (0..10).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>()
    };

    assert_eq!(sample(), sample());
}

use super::*;
use crate::helpers::utils::create_test_environment;

#[test]
fn can_detect_interruption_quota() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut environment = create_test_environment().as_ref().clone();
    environment.quota = Some(Arc::new(InterruptionQuota::new(flag.clone())));

    assert!(!environment.is_quota_reached());
    flag.store(true, Ordering::Relaxed);
    assert!(environment.is_quota_reached());
}

#[test]
fn can_detect_time_quota() {
    assert!(TimeQuota::new(-1.).is_reached());
    assert!(!TimeQuota::new(1000.).is_reached());
}

#[test]
fn can_create_repeatable_run_random_with_seed() {
    let mut environment = create_test_environment().as_ref().clone();
    environment.seed = Some(7);

    let sample = |run_idx: usize| {
        let random = environment.create_run_random(run_idx);
        (0..10).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>()
    };

    assert_eq!(sample(0), sample(0));
    assert_eq!(sample(1), sample(1));
    assert_ne!(sample(0), sample(1));
}

#[test]
fn can_keep_at_least_one_run() {
    let environment = Environment::new(Arc::new(DefaultRandom::default()), None, 0, None, Arc::new(|_: &str| {}));

    assert_eq!(environment.parallelism, 1);
}

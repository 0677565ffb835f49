use super::*;
use crate::models::Problem;
use crate::models::problem::*;
use crate::models::solution::RunState;
use crate::solver::create_greedy_state;
use crate::utils::{DefaultRandom, Float, Minutes};
use rand::prelude::*;
use std::sync::Arc;

const LOCATIONS: usize = 5;
const QUALIFICATION: &str = "diesel";

/// Creates a week long problem with travel, qualifications, shared routes, an unavailable day, an optional
/// internal driver and two external types. The same seed always gives the same problem.
pub fn create_random_problem(seed: u64, activities_per_day: usize) -> Arc<Problem> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let durations = (0..LOCATIONS * LOCATIONS)
        .map(|idx| if idx / LOCATIONS == idx % LOCATIONS { 0 } else { rng.gen_range(10..90) })
        .collect::<Vec<Minutes>>();
    let distances = durations.iter().map(|&duration| duration as Float * 0.8).collect();
    let travel = TravelMatrix::new(LOCATIONS, durations, distances).expect("invalid travel matrix");

    let mut times = (0..7)
        .flat_map(|day| (0..activities_per_day).map(move |_| day))
        .map(|day| {
            let start = day * DAY + rng.gen_range(0..DAY - 120);
            (start, start + rng.gen_range(30..300))
        })
        .collect::<Vec<_>>();
    times.sort();

    let activities = times
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| Activity {
            project: rng.gen_bool(0.5).then(|| format!("project{}", rng.gen_range(0..2))),
            start_location: rng.gen_range(0..LOCATIONS),
            end_location: rng.gen_range(0..LOCATIONS),
            qualifications: if rng.gen_bool(0.2) { vec![QUALIFICATION.to_string()] } else { vec![] },
            shared_route: rng.gen_bool(0.3).then(|| rng.gen_range(0..3)),
            is_driving: rng.gen_bool(0.7),
            ..test_activity(index, start, end)
        })
        .collect::<Vec<_>>();

    let mut drivers = (0..4)
        .map(|slot| {
            let mut driver = test_internal_driver(slot);
            driver.home_location = Some(rng.gen_range(0..LOCATIONS));
            driver.is_hotel_allowed = slot % 2 == 0;
            driver.kind = DriverKind::Internal {
                contract_time: 5 * DEFAULT_CONTRACT_TIME,
                is_optional: slot == 3,
                unavailabilities: if slot == 1 { vec![TimeRange { start: 2 * DAY, end: 3 * DAY }] } else { vec![] },
            };

            if slot < 2 { with_qualifications(driver, &[QUALIFICATION]) } else { driver }
        })
        .collect::<Vec<_>>();

    drivers.extend((4..7).map(|slot| with_qualifications(test_external_driver(slot, 0), &[QUALIFICATION])));
    drivers.extend((7..9).map(|slot| test_external_driver(slot, 1)));

    let external_types =
        vec![ExternalDriverType::new(0, "agency", 2, 10, 100.), ExternalDriverType::new(1, "partner", 0, 3, 250.)];

    let mut rules = RulesConfig::default();
    rules.satisfaction.blend_worst_criterion = seed % 2 == 0;

    Arc::new(Problem::new(activities, drivers, external_types, travel, rules, create_default_criteria()).expect("invalid random problem"))
}

/// Creates a greedy state for a random problem.
pub fn create_random_state(seed: u64, activities_per_day: usize) -> RunState {
    let problem = create_random_problem(seed, activities_per_day);
    create_greedy_state(problem, &DefaultRandom::new_repeatable(seed)).expect("cannot create greedy state")
}

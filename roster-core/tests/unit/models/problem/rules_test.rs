use super::*;

parameterized_test! {can_calculate_conflict_cost, (waiting_time, is_driving, relation, expected), {
    can_calculate_conflict_cost_impl(waiting_time, is_driving, relation, expected);
}}

can_calculate_conflict_cost! {
    case01_overlap_driving_same_duty: (0, true, Relation::SameDuty, 0.25 * 50.),
    case02_overlap_non_driving_same_project: (-10, false, Relation::SameProject, 0.1 * 100.),
    case03_waiting_driving_different: (32, true, Relation::Different, 0.25 * (-10. as Float).exp() * 200.),
    case04_waiting_non_driving_same_duty: (16, false, Relation::SameDuty, 0.1 * (-5. as Float).exp() * 50.),
}

fn can_calculate_conflict_cost_impl(waiting_time: Minutes, is_driving: bool, relation: Relation, expected: Float) {
    // mean delay is 0.02 * 60 + 2 = 3.2 minutes
    let policy = RobustnessPolicy::default();

    let result = policy.conflict_cost(60, waiting_time, is_driving, relation);

    assert!((result - expected).abs() < 1E-9, "expected {expected}, got {result}");
}

#[test]
fn can_return_zero_conflict_cost_without_delays() {
    let policy = RobustnessPolicy {
        mean_delay_quadratic: 0.,
        mean_delay_linear: 0.,
        mean_delay_constant: 0.,
        ..RobustnessPolicy::default()
    };

    assert_eq!(policy.conflict_cost(60, 10, true, Relation::Different), 0.);
    assert_eq!(policy.conflict_cost(60, 0, true, Relation::Different), 0.25 * 200.);
}

#[test]
fn can_deserialize_partial_rules_with_defaults() {
    let rules: RulesConfig = serde_json::from_str(
        r#"{
            "shift": { "maxWaitingTime": 120, "maxShiftCount": 4 },
            "costs": { "hotelCost": 99.5 },
            "satisfaction": { "blendWorstCriterion": true }
        }"#,
    )
    .expect("cannot deserialize rules");

    assert_eq!(rules.shift.max_waiting_time, 120);
    assert_eq!(rules.shift.max_shift_count, 4);
    assert_eq!(rules.shift.hotel_extra_travel_time, ShiftRules::default().hotel_extra_travel_time);
    assert_eq!(rules.costs.hotel_cost, 99.5);
    assert_eq!(rules.salaries, default_salaries());
    assert_eq!(rules.penalties.unavailability, PenaltyRates::default().unavailability);
    assert_eq!(rules.costs.shared_car_cost_per_km, CostRules::default().shared_car_cost_per_km);
    assert_eq!(rules.penalties.overlap, PenaltyRates::default().overlap);
    assert!(rules.satisfaction.blend_worst_criterion);
}

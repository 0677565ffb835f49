use super::*;

fn assert_positions(paths: &DriverPaths, slots: usize) {
    (0..slots).for_each(|slot| {
        paths.path(slot).iter().enumerate().for_each(|(position, &activity)| {
            assert_eq!(paths.position(activity), position, "activity {activity} of driver {slot}");
        });
    });
}

#[test]
fn can_create_paths_from_assignment() {
    let paths = DriverPaths::new(4, &[0, 1, 0, 2, 1]);

    assert_eq!(paths.path(0), &[0, 2]);
    assert_eq!(paths.path(1), &[1, 4]);
    assert_eq!(paths.path(2), &[3]);
    assert!(paths.path(3).is_empty());
    assert_positions(&paths, 4);
}

parameterized_test! {can_find_insert_position, (slot, activity, expected), {
    let paths = DriverPaths::new(3, &[0, 1, 0, 2, 1, 0]);
    assert_eq!(paths.insert_position(slot, activity), expected);
}}

can_find_insert_position! {
    case01_middle: (0, 1, 1),
    case02_end: (1, 5, 2),
    case03_start: (2, 0, 0),
    case04_empty_after: (2, 4, 1),
}

#[test]
fn can_reassign_activity_keeping_order() {
    let mut paths = DriverPaths::new(3, &[0, 1, 0, 2, 1, 0]);

    paths.reassign(2, 0, 1);

    assert_eq!(paths.path(0), &[0, 5]);
    assert_eq!(paths.path(1), &[1, 2, 4]);
    assert_eq!(paths.path(2), &[3]);
    assert_positions(&paths, 3);

    paths.reassign(2, 1, 0);

    assert_eq!(paths.path(0), &[0, 2, 5]);
    assert_eq!(paths.path(1), &[1, 4]);
    assert_positions(&paths, 3);
}

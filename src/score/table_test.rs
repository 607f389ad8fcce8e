use super::*;

const INF: f64 = f64::INFINITY;

fn small_table() -> ScoringTable {
    ScoringTable::from_steps("test", &[(1.0, 0), (2.0, 1), (INF, 3)]).unwrap()
}

#[test]
fn upper_bound_is_inclusive() {
    let t = small_table();
    assert_eq!(t.score(1.0).unwrap(), 0);
    assert_eq!(t.score(2.0).unwrap(), 1);
}

#[test]
fn lower_bound_is_exclusive() {
    let t = small_table();
    assert_eq!(t.score(1.0001).unwrap(), 1);
    assert_eq!(t.score(2.0001).unwrap(), 3);
}

#[test]
fn open_ends_cover_extremes() {
    let t = small_table();
    assert_eq!(t.score(-1e300).unwrap(), 0);
    assert_eq!(t.score(1e300).unwrap(), 3);
    assert_eq!(t.score(INF).unwrap(), 3);
}

#[test]
fn nan_has_no_interval() {
    let err = small_table().score(f64::NAN).unwrap_err();
    assert!(matches!(err, TableInvariantViolation::NoMatch { .. }));
}

#[test]
fn max_points_is_last_interval() {
    assert_eq!(small_table().max_points(), 3);
}

#[test]
fn from_steps_chains_lower_bounds() {
    let t = small_table();
    let bounds: Vec<(f64, f64)> = t.intervals().iter().map(|i| (i.lower, i.upper)).collect();
    assert_eq!(
        bounds,
        vec![(f64::NEG_INFINITY, 1.0), (1.0, 2.0), (2.0, INF)]
    );
}

#[test]
fn rejects_empty_table() {
    let err = ScoringTable::new("t", vec![]).unwrap_err();
    assert!(matches!(err, TableInvariantViolation::Empty { .. }));
}

#[test]
fn rejects_bounded_start() {
    let err = ScoringTable::new(
        "t",
        vec![Interval {
            lower: 0.0,
            upper: INF,
            points: 0,
        }],
    )
    .unwrap_err();
    assert!(matches!(err, TableInvariantViolation::OpenStart { .. }));
}

#[test]
fn rejects_bounded_end() {
    let err = ScoringTable::from_steps("t", &[(1.0, 0), (2.0, 1)]).unwrap_err();
    assert!(matches!(err, TableInvariantViolation::OpenEnd { found, .. } if found == 2.0));
}

#[test]
fn rejects_descending_bounds() {
    let err = ScoringTable::from_steps("t", &[(5.0, 0), (3.0, 1), (INF, 2)]).unwrap_err();
    assert!(matches!(err, TableInvariantViolation::EmptyInterval { .. }));
}

#[test]
fn rejects_gap_between_intervals() {
    let err = ScoringTable::new(
        "t",
        vec![
            Interval {
                lower: f64::NEG_INFINITY,
                upper: 1.0,
                points: 0,
            },
            Interval {
                lower: 1.5,
                upper: INF,
                points: 1,
            },
        ],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TableInvariantViolation::Discontinuous { previous, next, .. } if previous == 1.0 && next == 1.5
    ));
}

#[test]
fn rejects_decreasing_points() {
    let err = ScoringTable::from_steps("t", &[(1.0, 2), (INF, 1)]).unwrap_err();
    assert!(matches!(
        err,
        TableInvariantViolation::NotMonotonic {
            previous: 2,
            next: 1,
            ..
        }
    ));
}

#[test]
fn error_names_the_table() {
    let err = ScoringTable::from_steps("general/energy", &[(1.0, 0)]).unwrap_err();
    assert!(err.to_string().starts_with("general/energy:"));
}

#[test]
fn rejects_points_above_max() {
    let err = ScoringTable::from_steps("t", &[(1.0, 0), (INF, 2_000_000_000)]).unwrap_err();
    assert!(matches!(
        err,
        TableInvariantViolation::PointsOutOfRange {
            points: 2_000_000_000,
            ..
        }
    ));
    assert!(ScoringTable::from_steps("t", &[(1.0, 0), (INF, MAX_POINTS)]).is_ok());
}

#[test]
fn rejects_negative_points() {
    let err = ScoringTable::from_steps("t", &[(1.0, -1), (INF, 0)]).unwrap_err();
    assert!(matches!(
        err,
        TableInvariantViolation::PointsOutOfRange { points: -1, .. }
    ));
}

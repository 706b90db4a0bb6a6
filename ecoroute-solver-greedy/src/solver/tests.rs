//! Unit tests for the nearest-neighbour solver.

use super::*;
use ecoroute_core::test_support::{chennai_bins, chennai_depot};
use ecoroute_core::{PlanRequest, PlanningConfig, plan};
use rstest::{fixture, rstest};

#[fixture]
fn solver() -> NearestNeighbourSolver {
    NearestNeighbourSolver::new()
}

fn closed() -> TourMode {
    TourMode::Closed {
        depot: chennai_depot(),
    }
}

#[rstest]
fn empty_closed_tour_is_depot_only(solver: NearestNeighbourSolver) {
    let tour = solver.solve(&closed(), &[]).expect("empty input is valid");
    assert_eq!(tour.ids(), &[0]);
}

#[rstest]
fn empty_open_tour_is_empty(solver: NearestNeighbourSolver) {
    let tour = solver.solve(&TourMode::Open, &[]).expect("empty input is valid");
    assert!(tour.is_empty());
}

#[rstest]
#[case(Point::from_lat_lng(9, -45.0, 170.0))]
#[case(Point::from_lat_lng(9, 12.9249, 80.1000))]
fn single_bin_round_trip_ignores_distance(solver: NearestNeighbourSolver, #[case] bin: Point) {
    let tour = solver.solve(&closed(), &[bin.clone()]).expect("valid");
    assert_eq!(tour.ids(), &[0, 9, 0]);

    let open = solver.solve(&TourMode::Open, &[bin]).expect("valid");
    assert_eq!(open.ids(), &[9]);
}

#[rstest]
fn nearer_bin_is_visited_first(solver: NearestNeighbourSolver) {
    let bins = vec![
        Point::from_lat_lng(1, 13.035, 80.2672),
        Point::from_lat_lng(2, 12.9697, 80.1789),
    ];
    let tour = solver.solve(&closed(), &bins).expect("valid");
    assert_eq!(tour.ids(), &[0, 2, 1, 0]);
}

#[rstest]
fn chennai_round_trip_matches_greedy_order(solver: NearestNeighbourSolver) {
    let tour = solver.solve(&closed(), &chennai_bins()).expect("valid");
    assert_eq!(tour.ids(), &[0, 2, 5, 1, 4, 3, 0]);
}

#[rstest]
fn chennai_open_path_starts_at_first_bin(solver: NearestNeighbourSolver) {
    let tour = solver.solve(&TourMode::Open, &chennai_bins()).expect("valid");
    assert_eq!(tour.ids(), &[1, 4, 5, 3, 2]);
}

#[rstest]
fn ties_go_to_first_occurrence(solver: NearestNeighbourSolver) {
    let depot = Point::from_lat_lng(0, 0.0, 0.0);
    let bins = vec![
        Point::from_lat_lng(7, 0.0, 1.0),
        Point::from_lat_lng(3, 0.0, -1.0),
    ];
    let tour = solver
        .solve(&TourMode::Closed { depot }, &bins)
        .expect("valid");
    assert_eq!(tour.ids(), &[0, 7, 3, 0]);
}

#[rstest]
fn rejects_bin_sharing_depot_id(solver: NearestNeighbourSolver) {
    let bins = vec![Point::from_lat_lng(0, 13.0, 80.0)];
    let err = solver.solve(&closed(), &bins).expect_err("duplicate id");
    assert_eq!(err, RouteError::DuplicateIdentifier { id: 0 });
}

#[rstest]
fn rejects_nan_coordinates(solver: NearestNeighbourSolver) {
    let bins = vec![Point::from_lat_lng(4, f64::NAN, 80.0)];
    let err = solver.solve(&TourMode::Open, &bins).expect_err("NaN");
    assert!(matches!(err, RouteError::InvalidCoordinate { id: 4, .. }));
}

#[rstest]
fn enforces_supplied_ceiling(solver: NearestNeighbourSolver) {
    let err = solver
        .solve_within(&closed(), &chennai_bins(), 4)
        .expect_err("six points exceed four");
    assert_eq!(err, RouteError::TooManyPoints { count: 6, limit: 4 });
}

#[rstest]
fn plan_honours_a_raised_ceiling(solver: NearestNeighbourSolver) {
    let bins: Vec<Point> = (1..=600_u32)
        .map(|n| {
            let offset = f64::from(n) * 1e-4;
            Point::from_lat_lng(u64::from(n), 12.9 + offset, 80.1 + offset)
        })
        .collect();
    let config = PlanningConfig {
        max_points: 1000,
        ..PlanningConfig::default()
    };
    let request = PlanRequest::closed(chennai_depot(), bins);
    let route = plan(&solver, &request, &config).expect("raised ceiling admits 601 points");
    assert_eq!(route.tour.len(), 602);
    assert_eq!(route.tour.ids().first(), Some(&0));
    assert_eq!(route.tour.ids().last(), Some(&0));
}

#[rstest]
fn plan_rejects_requests_above_the_default_ceiling(solver: NearestNeighbourSolver) {
    let bins: Vec<Point> = (1..=600_u32)
        .map(|n| Point::from_lat_lng(u64::from(n), 13.0, 80.2))
        .collect();
    let request = PlanRequest::closed(chennai_depot(), bins);
    let err = plan(&solver, &request, &PlanningConfig::default()).expect_err("default ceiling");
    assert_eq!(
        err,
        RouteError::TooManyPoints {
            count: 601,
            limit: 500
        }
    );
}

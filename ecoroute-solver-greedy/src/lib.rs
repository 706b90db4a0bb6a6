//! Greedy nearest-neighbour tour construction for EcoRoute.
//!
//! This crate provides [`NearestNeighbourSolver`], the default implementation
//! of the [`TourSolver`](ecoroute_core::TourSolver) trait. From the current
//! stop it always drives to the closest unvisited bin, so the result is a
//! locally short tour with no optimality guarantee. It does not run any
//! improvement pass such as 2-opt.
//!
//! The scan is `O(n²)` in the number of points, which suits the tens of bins
//! a collection round covers. Inputs above the ceiling passed to
//! [`TourSolver::solve_within`](ecoroute_core::TourSolver::solve_within) are
//! rejected.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;

pub use solver::NearestNeighbourSolver;

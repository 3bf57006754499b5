//! Exact solvers for the 0/1 and the fractional knapsack problem.
//!
//! The 0/1 variant is solved with a bottom-up dynamic programming table, the fractional
//! variant with a greedy fill in descending value/weight ratio order.

/// Entities to model knapsack instances and their solutions
pub mod entities;

/// Errors raised when an instance violates the preconditions of the solvers
pub mod error;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// The 0/1 and fractional knapsack solvers
pub mod solvers;

/// Helper functions which do not belong to any specific module
pub mod util;

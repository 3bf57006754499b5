/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

/// Precondition checks shared by the solvers.
pub mod validation;

/// Absolute tolerance used when comparing accumulated floating point values
pub const F64_EPSILON: f64 = 1e-9;

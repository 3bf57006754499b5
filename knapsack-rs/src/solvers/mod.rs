mod dp_table;
mod fractional;
mod zero_one;

#[doc(inline)]
pub use dp_table::DpTable;

#[doc(inline)]
pub use fractional::FractionalSolver;

#[doc(inline)]
pub use zero_one::ZeroOneSolver;

mod instance;
mod item;
mod solution;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use solution::FractionalChoice;

#[doc(inline)]
pub use solution::FractionalSolution;

#[doc(inline)]
pub use solution::ZeroOneSolution;

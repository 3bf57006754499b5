mod export;
mod import;
mod parser;

/// External (serializable) representations of all knapsack related entities.
pub mod ext_repr;

/// Exports solutions out of the library.
pub use export::{export_fractional, export_zero_one};

/// Imports an instance into the library.
pub use import::import;

/// Parses the plain text instance format.
pub use parser::parse_text_instance;

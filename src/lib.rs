pub mod math;
pub use math::*;

pub mod utils;
pub use utils::*;

mod errors;
pub use errors::PolynomError;

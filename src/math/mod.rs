pub mod field;
pub mod polynom;
pub use polynom::Polynomial;

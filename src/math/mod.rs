pub mod approx;
pub mod linalg;
pub mod matrix;

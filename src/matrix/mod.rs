// src/matrix/mod.rs

pub mod determinant;
pub mod kernel;
pub mod sylvester;

pub use determinant::{bareiss_determinant, gaussian_determinant};
pub use kernel::gaussian_kernel_element;
pub use sylvester::sylvester_matrix;

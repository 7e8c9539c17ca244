pub mod product;
pub mod requests;

pub use product::*;
pub use requests::*;

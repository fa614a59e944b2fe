pub mod ton;
pub mod response;

pub use ton::*;
pub use response::*;

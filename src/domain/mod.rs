pub mod dates;
pub mod links;
pub mod opportunity;

pub use dates::*;
pub use links::*;
pub use opportunity::*;

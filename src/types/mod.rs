pub mod card;
pub mod check;
pub mod errors;

pub use card::*;
pub use check::*;
pub use errors::*;

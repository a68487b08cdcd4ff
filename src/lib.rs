pub mod card;
pub mod cli;
pub mod utils;

pub use card::*;
pub use cli::*;
pub use utils::*;

// Core card-number validation components
pub mod input_validator;
pub mod luhn;

pub use input_validator::*;
pub use luhn::*;

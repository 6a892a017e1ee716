pub mod validation;

pub use validation::{NameValidation, NewValidation};

pub mod compare;
pub mod tokens;

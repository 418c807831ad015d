pub mod form;
pub mod submitted;

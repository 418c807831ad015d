pub mod edit;
pub mod summary;

pub mod book;
pub mod errors;
pub mod payload;
pub mod responses;

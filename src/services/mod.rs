pub mod aggregate;
pub mod counter;
pub mod normalize;
pub mod session;
pub mod source;

pub mod normalize;
pub mod script;
pub mod timestamp;
pub mod wrap;

pub mod builder;
pub mod defaults;
pub mod normalize_output;
pub mod progress;
pub mod runtime;
pub mod traits;
pub mod writer;

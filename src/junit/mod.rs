pub mod aggregate;
pub mod junit_model;
pub mod normalize;
pub mod sanitize;
pub mod stack_trace;
pub mod writer;

pub mod context_value;
pub mod entity;
pub mod invocation;

mod classify;
mod macros;
mod types;

//! Backend side of the host: the queue of remote requests and the worker that runs them.

pub mod commands;
pub mod runtime;

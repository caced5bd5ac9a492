// Task domain module
// Units of work assigned to agents inside a sprint

#![allow(clippy::module_inception)]

pub mod task;
pub mod value_objects;

pub use task::{NewTask, Task, TaskFilter, TaskPatch};
pub use value_objects::{TaskPriority, TaskStatus};

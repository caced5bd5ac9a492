// Sprint domain module

#![allow(clippy::module_inception)]

pub mod sprint;
pub mod value_objects;

pub use sprint::Sprint;
pub use value_objects::SprintStatus;

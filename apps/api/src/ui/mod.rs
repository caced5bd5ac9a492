//! Terminal views over the data layer

pub mod badge;
pub mod forms;
pub mod pages;
pub mod table;
pub mod toast;
pub mod virtualizer;

pub use forms::{FormErrors, TaskForm, TeamForm};
pub use table::{SortDirection, TableState};
pub use toast::{Toast, ToastKind, ToastQueue};
pub use virtualizer::Virtualizer;

//! UI Components

mod new_todo_form;
mod todo_row;
mod todo_section;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_section::TodoSection;

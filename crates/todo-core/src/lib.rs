//! Todo Core
//!
//! State and persistence for the todo list widget:
//! - models: `TodoItem` and the grouped view
//! - store: list operations and the owned `TodoStore`
//! - storage: key-value slot abstraction
//! - clock: creation-time source

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use config::{IdPolicy, StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use models::{GroupedTodos, TodoId, TodoItem, TodoList};
pub use storage::{MemoryStorage, Storage};
pub use store::{add, derive_grouped, derive_sorted, load, persist, toggle, try_load, TodoStore};

pub mod config;
pub mod list;
pub mod models;
pub mod pagination;
pub mod search;
pub mod source;

mod memory;
pub use memory::StaticSource;

pub use config::DashboardConfig;
pub use list::{LoadState, SelectionState, UserList};
pub use models::{EditField, UserId, UserRecord};
pub use pagination::Pager;
pub use search::SearchBox;
pub use source::{SourceError, UserSource};

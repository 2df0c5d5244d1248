pub mod config;
pub mod error;
pub mod guard;
pub mod menu;
pub mod menu_tree;
pub mod models;
pub mod nav;
pub mod role;

pub use config::*;
pub use error::*;
pub use guard::*;
pub use menu::*;
pub use menu_tree::*;
pub use models::*;
pub use nav::*;
pub use role::*;

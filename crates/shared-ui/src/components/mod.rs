pub mod badge;
pub mod page;
pub mod sidebar;

pub use badge::*;
pub use page::*;
pub use sidebar::*;

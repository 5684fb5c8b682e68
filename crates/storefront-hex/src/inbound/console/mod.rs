mod menu;

pub use menu::{ConsoleMenu, MenuConfig};

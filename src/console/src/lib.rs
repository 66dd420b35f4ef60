mod app;
mod console;
mod error;
mod menu;
mod settings;

pub use app::*;
pub use console::*;
pub use error::*;
pub use menu::*;
pub use settings::*;

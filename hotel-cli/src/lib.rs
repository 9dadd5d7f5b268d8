pub mod console;
pub mod error;
pub mod input;
pub mod render;

pub use console::Console;
pub use error::InputError;

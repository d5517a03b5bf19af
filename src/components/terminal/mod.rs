//! Console window components.

mod console;
mod input;
mod output;

pub use console::ConsoleWindow;
pub use input::Input;
pub use output::Output;

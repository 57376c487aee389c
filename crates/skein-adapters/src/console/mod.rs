//! Console adapters for interactive prompting.

pub mod scripted;
pub mod term;

pub use scripted::ScriptedConsole;
pub use term::TermConsole;

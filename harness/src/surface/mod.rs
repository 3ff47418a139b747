pub mod terminal;

pub use terminal::TerminalSurface;

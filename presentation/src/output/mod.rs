pub mod console;
pub mod screen;

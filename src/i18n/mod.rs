//! UI string lookup and display languages.

mod language;
mod table;

pub use language::{DISPLAY_LANGUAGES, Language, print_languages};
pub use table::{DEFAULT_LANGUAGE, resolve};

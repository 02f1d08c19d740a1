//! Text front end: column prompt, status lines and the interactive turn loop.

mod app;
pub mod prompt;
pub mod view;

pub use app::App;

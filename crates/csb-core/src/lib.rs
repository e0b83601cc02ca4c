pub mod actions;
pub mod blend;
pub mod catalog;
pub mod config;
pub mod document;
pub mod fader;
pub mod guides;
pub mod persistence;
pub mod reducer;
pub mod report;
pub mod state;
pub mod wheel;

pub use actions::*;
pub use catalog::Domain;
pub use catalog::ThemeKey;
pub use config::Config;
pub use reducer::*;
pub use state::*;

pub use persistence::*;

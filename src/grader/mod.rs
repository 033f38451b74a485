mod config;
mod reward;
mod types;
mod answer;
mod tables;
mod checks;
mod gradebook;

pub use config::*;
pub use reward::*;
pub use types::*;
pub use answer::*;
pub use tables::*;
pub use checks::*;
pub use gradebook::*;

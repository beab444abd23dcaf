pub mod backend;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod motion;
pub mod sample;
pub mod strike;

pub use backend::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use motion::*;
pub use sample::*;
pub use strike::*;

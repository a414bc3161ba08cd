pub mod college;
pub mod config;
pub mod error;
pub mod models;
pub mod requests;

pub use college::*;
pub use config::*;
pub use error::*;
pub use models::*;
pub use requests::*;

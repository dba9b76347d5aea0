

mod pipeline;
mod config;
mod corpus;
mod translation;
mod train;
mod export;
mod lookup;

pub use pipeline::Pipeline;
pub use config::files_handling;
pub use lookup::Lookup;

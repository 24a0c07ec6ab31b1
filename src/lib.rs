pub mod book;
pub mod cli_args;
pub mod error;
mod extractor;
mod middleware;
pub mod openapi;
mod route;
pub mod server;
pub mod state;
pub mod store;

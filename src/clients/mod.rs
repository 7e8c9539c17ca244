//! Typed handles for talking to actors.

mod product_client;

pub use product_client::ProductClient;

pub mod adapters;
pub mod client;
pub mod common;
pub mod models;
pub mod repositories;
pub mod settings;

pub use client::{Client, ClientBuilder};
pub use common::context::{CancelHandle, Context};
pub use common::error::{Error, Result};
pub use common::query::{ListOptions, MapsetSearchOptions};

//! Sled 持久化实现

mod server_store;

pub use server_store::{NoopServerStore, SledServerStore, SledStoreConfig};

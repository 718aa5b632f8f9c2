//! In-Memory 实现

mod server_manager;

pub use server_manager::InMemoryServerManager;

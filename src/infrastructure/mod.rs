//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod console;
pub mod memory;
pub mod persistence;

pub use console::ConsoleDispatcher;
pub use memory::InMemoryServerManager;
pub use persistence::sled::{NoopServerStore, SledServerStore};

//! Console 派发器

mod dispatcher;

pub use dispatcher::ConsoleDispatcher;

//! 命令处理器

mod sfx_handlers;

pub use sfx_handlers::{SfxCommandHandler, SfxReply};

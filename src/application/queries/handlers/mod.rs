//! 查询处理器

mod trigger_handlers;
mod voice_handlers;

pub use trigger_handlers::{ListTriggersHandler, ResolveTokenHandler};
pub use voice_handlers::{FindVoiceByLanguageHandler, FindVoiceByNameHandler, VoiceResponse};

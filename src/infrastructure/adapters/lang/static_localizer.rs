//! Static Localizer - 内置英文消息表
//!
//! 实现 LocalizerPort；未知键原样回显，不会 panic

use std::collections::HashMap;

use crate::application::ports::LocalizerPort;

/// 内置英文文案
const MESSAGES: &[(&str, &str)] = &[
    (
        "sfx.usage",
        "Usage: sfx set [name] [url], sfx del [name], sfx list, sfx [name], or sfx [url]",
    ),
    ("sfx.noper", "Too many arguments"),
    ("sfx.nosfx", "No sfx name given"),
    ("sfx.listnone", "No sfx set on this server"),
    ("sfx.nope", "You need to be able to manage this server to do that"),
    ("sfx.nodelete", "That's not a delete command. Try: sfx del [name]"),
    ("sfx.noset", "That's not a set command. Try: sfx set [name] [url]"),
    ("sfx.needshttps", "The audio link needs to be https"),
    ("sfx.okay", "Sound effect :{emoji}: saved"),
];

/// 静态消息表 Localizer
pub struct StaticLocalizer {
    messages: HashMap<&'static str, &'static str>,
}

impl StaticLocalizer {
    pub fn new() -> Self {
        Self {
            messages: MESSAGES.iter().copied().collect(),
        }
    }
}

impl Default for StaticLocalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizerPort for StaticLocalizer {
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = match self.messages.get(key) {
            Some(template) => (*template).to_string(),
            None => {
                tracing::warn!(key = %key, "Unknown localization key");
                return key.to_string();
            }
        };

        params.iter().fold(template, |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

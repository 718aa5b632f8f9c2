//! Console Dispatcher - 行式本地派发器
//!
//! 代替聊天平台传输层做本地运行：
//! - `{prefix}sfx <rest>` 走命令入口
//! - `{prefix}voice name <input>` / `{prefix}voice lang <input>` 走目录查询
//! - 其余输入按词经过 token 监听钩子，命中即移交播放
//!
//! 同一时刻只处理一行，天然满足"同服务器命令串行"的假设

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::commands::{Requester, SfxCommand};
use crate::application::ports::{ServerManagerPort, SpeechPort};
use crate::application::queries::handlers::{
    FindVoiceByLanguageHandler, FindVoiceByNameHandler, ResolveTokenHandler, VoiceResponse,
};
use crate::application::queries::{FindVoiceByLanguage, FindVoiceByName, ResolveToken};
use crate::application::SfxCommandHandler;
use crate::config::ConsoleConfig;

/// 控制台派发器
pub struct ConsoleDispatcher {
    config: ConsoleConfig,
    sfx: SfxCommandHandler,
    resolver: ResolveTokenHandler,
    voice_by_name: FindVoiceByNameHandler,
    voice_by_lang: FindVoiceByLanguageHandler,
    speech: Arc<dyn SpeechPort>,
    servers: Arc<dyn ServerManagerPort>,
}

impl ConsoleDispatcher {
    pub fn new(
        config: ConsoleConfig,
        sfx: SfxCommandHandler,
        resolver: ResolveTokenHandler,
        speech: Arc<dyn SpeechPort>,
        servers: Arc<dyn ServerManagerPort>,
    ) -> Self {
        Self {
            config,
            sfx,
            resolver,
            voice_by_name: FindVoiceByNameHandler::new(),
            voice_by_lang: FindVoiceByLanguageHandler::new(),
            speech,
            servers,
        }
    }

    /// 读取 stdin 直到 EOF、`quit` 或 ctrl-c
    pub async fn run(self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!(
            "chatvox console - server '{}', user '{}' (manage: {})",
            self.config.server_id, self.config.user_id, self.config.can_manage_server
        );
        println!(
            "Commands: {p}sfx …, {p}voice name <input>, {p}voice lang <input>, quit",
            p = self.config.command_prefix
        );

        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Received shutdown signal");
                    break;
                }
            };

            let Some(line) = line else { break };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            self.dispatch_line(line).await;
        }

        Ok(())
    }

    async fn dispatch_line(&self, line: &str) {
        match line.strip_prefix(&self.config.command_prefix) {
            Some(invocation) => self.dispatch_command(invocation).await,
            None => self.dispatch_tokens(line).await,
        }
    }

    /// 命令路径：命令名之后的文本原样传给处理器
    async fn dispatch_command(&self, invocation: &str) {
        let (name, rest) = match invocation.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (invocation, ""),
        };

        match name {
            "sfx" => {
                let command = SfxCommand {
                    server_id: self.config.server_id.clone(),
                    requester: Requester::new(
                        self.config.user_id.clone(),
                        self.config.can_manage_server,
                    ),
                    raw: rest.to_string(),
                };
                if let Some(reply) = self.sfx.handle(command).await {
                    println!("{}", reply);
                }
            }
            "voice" => self.dispatch_voice(rest),
            _ => println!("Unknown command: {}{}", self.config.command_prefix, name),
        }
    }

    fn dispatch_voice(&self, rest: &str) {
        let (mode, input) = match rest.trim().split_once(char::is_whitespace) {
            Some((mode, input)) => (mode, input.trim()),
            None => (rest.trim(), ""),
        };

        let matches = match mode {
            "name" => self.voice_by_name.handle(FindVoiceByName {
                input: input.to_string(),
            }),
            "lang" => self.voice_by_lang.handle(FindVoiceByLanguage {
                input: input.to_string(),
            }),
            _ => {
                println!("Usage: voice name <input> | voice lang <input>");
                return;
            }
        };

        if matches.is_empty() {
            println!("No matching voices");
            return;
        }
        for voice in matches {
            println!("{}", format_voice(&voice));
        }
    }

    /// token 监听路径：对每个词调用一次解析钩子
    async fn dispatch_tokens(&self, line: &str) {
        let settings = self
            .servers
            .user_settings(&self.config.server_id, &self.config.user_id);

        for word in line.split_whitespace() {
            let payload = self.resolver.handle(ResolveToken {
                server_id: self.config.server_id.clone(),
                token: word.to_string(),
            });

            if let Some(payload) = payload {
                println!("▶ {}", payload.audio_url);
                if let Err(e) = self.speech.speak(payload, &settings).await {
                    tracing::warn!(error = %e, "Speech handoff failed");
                }
            }
        }
    }
}

fn format_voice(voice: &VoiceResponse) -> String {
    let alias = if voice.alias.is_empty() {
        "-"
    } else {
        voice.alias.as_str()
    };
    format!(
        "{:<24} {:<10} {:<8} {:<8} {:<7} {}",
        voice.voice_id, alias, voice.language_code, voice.tier, voice.gender, voice.language_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_voice_blank_alias() {
        let voice = VoiceResponse {
            provider: "google".to_string(),
            language_name: "Turkish".to_string(),
            tier: "WaveNet".to_string(),
            language_code: "tr-TR".to_string(),
            translate_hint: "tr".to_string(),
            voice_id: "tr-TR-Wavenet-B".to_string(),
            alias: String::new(),
            gender: "MALE".to_string(),
        };

        let text = format_voice(&voice);
        assert!(text.contains("tr-TR-Wavenet-B"));
        assert!(text.contains(" - "));
    }
}

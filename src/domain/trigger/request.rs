//! sfx 命令原始参数的分类
//!
//! 将命令名之后的原始文本解析为结构化请求，优先级从高到低，
//! 首个命中即生效。这里只做分类，权限与 URL 安全校验由应用层执行。

use super::value_objects::is_url_shaped;

/// 合法的删除动词
const DELETE_VERBS: &[&str] = &["del", "delete", "rm", "remove"];

/// 合法的设置动词
const SET_VERB: &str = "set";

/// 分类后的 sfx 请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SfxRequest {
    /// 整段参数是一个 URL：一次性播放，不注册
    PlayUrl(String),
    /// 无参数：提示用法
    Usage,
    /// 超过 3 个 token：拒绝
    TooManyArguments,
    /// 列出本服务器全部绑定
    List,
    /// 播放一个已注册的触发词
    Play(String),
    /// 删除绑定（两个 token：动词 + 触发词）
    Delete { verb: String, token: String },
    /// 写入绑定（三个 token：动词 + 触发词 + URL）
    Set {
        verb: String,
        token: String,
        url: String,
    },
}

/// 判断是否为可接受的删除动词
pub fn is_delete_verb(verb: &str) -> bool {
    DELETE_VERBS.contains(&verb)
}

/// 判断是否为可接受的设置动词
pub fn is_set_verb(verb: &str) -> bool {
    verb == SET_VERB
}

/// 解析命令名之后的原始文本
pub fn parse_sfx_request(raw: &str) -> SfxRequest {
    let trimmed = raw.trim();

    if is_url_shaped(trimmed) {
        return SfxRequest::PlayUrl(trimmed.to_string());
    }

    let args: Vec<&str> = trimmed.split_whitespace().collect();

    match args.as_slice() {
        [] => SfxRequest::Usage,
        _ if args.len() > 3 => SfxRequest::TooManyArguments,
        ["list"] => SfxRequest::List,
        [token] => SfxRequest::Play((*token).to_string()),
        [verb, token] => SfxRequest::Delete {
            verb: (*verb).to_string(),
            token: (*token).to_string(),
        },
        [verb, token, url] => SfxRequest::Set {
            verb: (*verb).to_string(),
            token: (*token).to_string(),
            url: (*url).to_string(),
        },
        _ => unreachable!("argument count covered above"),
    }
}

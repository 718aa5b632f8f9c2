//! Trigger Queries

/// 触发词解析查询
///
/// 由外部消息监听器对入站消息的每个词调用一次
#[derive(Debug, Clone)]
pub struct ResolveToken {
    pub server_id: String,
    pub token: String,
}

/// 列出一个服务器的全部绑定
#[derive(Debug, Clone)]
pub struct ListTriggers {
    pub server_id: String,
}

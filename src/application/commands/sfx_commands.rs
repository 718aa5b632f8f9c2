//! Sfx Commands

/// 发起命令的用户身份
#[derive(Debug, Clone)]
pub struct Requester {
    pub user_id: String,
    /// 单一能力检查：是否可以管理该服务器
    pub can_manage_server: bool,
}

impl Requester {
    pub fn new(user_id: impl Into<String>, can_manage_server: bool) -> Self {
        Self {
            user_id: user_id.into(),
            can_manage_server,
        }
    }
}

/// sfx 命令
///
/// raw 是命令名之后未裁剪的完整文本，由处理器分类为
/// 一次性播放 / 列表 / 删除 / 设置 / 触发词播放
#[derive(Debug, Clone)]
pub struct SfxCommand {
    pub server_id: String,
    pub requester: Requester,
    pub raw: String,
}

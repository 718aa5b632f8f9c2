//! Localization Port - 本地化字符串抽象
//!
//! 所有面向用户的文案都经过此间接层，本核心只持有消息键。

/// 本核心使用的消息键
pub mod keys {
    /// 用法提示
    pub const SFX_USAGE: &str = "sfx.usage";
    /// 参数过多
    pub const SFX_TOO_MANY: &str = "sfx.noper";
    /// 注册表为空
    pub const SFX_LIST_NONE: &str = "sfx.listnone";
    /// 缺少管理服务器权限
    pub const SFX_NOT_PERMITTED: &str = "sfx.nope";
    /// 删除动词不合法
    pub const SFX_BAD_DELETE: &str = "sfx.nodelete";
    /// 设置动词不合法
    pub const SFX_BAD_SET: &str = "sfx.noset";
    /// URL 必须是 https
    pub const SFX_NEEDS_HTTPS: &str = "sfx.needshttps";
    /// 设置成功（带 {emoji} 参数）
    pub const SFX_OKAY: &str = "sfx.okay";
}

/// Localizer Port
pub trait LocalizerPort: Send + Sync {
    /// 取出消息键对应的文案，`{name}` 占位符用 params 替换
    fn localize(&self, key: &str, params: &[(&str, &str)]) -> String;

    /// 无参数的便捷调用
    fn message(&self, key: &str) -> String {
        self.localize(key, &[])
    }
}

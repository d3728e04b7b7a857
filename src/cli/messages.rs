//! 用户可见的固定文本与退出码
//!
//! 集中定义，避免魔法值散落在各处

// === 退出码 ===
pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

// === update-locals ===
pub const USAGE_EXAMPLE: &str = "示例: update-locals de";
pub const SUPPORTED_CODES_PREFIX: &str = "支持的代码: ";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";

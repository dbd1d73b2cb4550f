use std::fmt;

/// Faults raised below the dispatcher surface.
///
/// Argument-count and unknown-operation results are *not* errors; they are
/// regular outcomes (see [`crate::contract::Rejection`]). Everything here is a
/// host-level failure that aborts the whole invocation.
#[derive(Debug, Clone)]
pub enum LedgerlinkError {
    StorageOperation(String),
    StoragePluginNotFound(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    InvalidIdentity(String),
    InvalidArgument(String),
    MissingContext(String),
}

impl LedgerlinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LedgerlinkError::StorageOperation(_) => "E001",
            LedgerlinkError::StoragePluginNotFound(_) => "E002",
            LedgerlinkError::FileOperation(_) => "E003",
            LedgerlinkError::Serialization(_) => "E004",
            LedgerlinkError::Config(_) => "E005",
            LedgerlinkError::InvalidIdentity(_) => "E006",
            LedgerlinkError::InvalidArgument(_) => "E007",
            LedgerlinkError::MissingContext(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LedgerlinkError::StorageOperation(_) => "Storage Operation Error",
            LedgerlinkError::StoragePluginNotFound(_) => "Storage Plugin Not Found",
            LedgerlinkError::FileOperation(_) => "File Operation Error",
            LedgerlinkError::Serialization(_) => "Serialization Error",
            LedgerlinkError::Config(_) => "Configuration Error",
            LedgerlinkError::InvalidIdentity(_) => "Invalid Identity",
            LedgerlinkError::InvalidArgument(_) => "Invalid Argument",
            LedgerlinkError::MissingContext(_) => "Missing Execution Context",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LedgerlinkError::StorageOperation(msg) => msg,
            LedgerlinkError::StoragePluginNotFound(msg) => msg,
            LedgerlinkError::FileOperation(msg) => msg,
            LedgerlinkError::Serialization(msg) => msg,
            LedgerlinkError::Config(msg) => msg,
            LedgerlinkError::InvalidIdentity(msg) => msg,
            LedgerlinkError::InvalidArgument(msg) => msg,
            LedgerlinkError::MissingContext(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LedgerlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LedgerlinkError {}

// 便捷的构造函数
impl LedgerlinkError {
    pub fn storage_operation<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::StorageOperation(msg.into())
    }

    pub fn storage_plugin_not_found<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::StoragePluginNotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::Config(msg.into())
    }

    pub fn invalid_identity<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::InvalidIdentity(msg.into())
    }

    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::InvalidArgument(msg.into())
    }

    pub fn missing_context<T: Into<String>>(msg: T) -> Self {
        LedgerlinkError::MissingContext(msg.into())
    }
}

impl From<std::io::Error> for LedgerlinkError {
    fn from(err: std::io::Error) -> Self {
        LedgerlinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerlinkError {
    fn from(err: serde_json::Error) -> Self {
        LedgerlinkError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LedgerlinkError {
    fn from(err: toml::de::Error) -> Self {
        LedgerlinkError::Config(err.to_string())
    }
}

impl From<hex::FromHexError> for LedgerlinkError {
    fn from(err: hex::FromHexError) -> Self {
        LedgerlinkError::InvalidIdentity(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerlinkError>;

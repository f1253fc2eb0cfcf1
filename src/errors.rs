use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortmapError {
    MalformedCommand(String),
    MalformedRecord(String),
    NotFound(String),
    FileOperation(String),
    InvalidReference(String),
    Configuration(String),
}

impl ShortmapError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortmapError::MalformedCommand(_) => "E001",
            ShortmapError::MalformedRecord(_) => "E002",
            ShortmapError::NotFound(_) => "E003",
            ShortmapError::FileOperation(_) => "E004",
            ShortmapError::InvalidReference(_) => "E005",
            ShortmapError::Configuration(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortmapError::MalformedCommand(_) => "Malformed Command",
            ShortmapError::MalformedRecord(_) => "Malformed Record",
            ShortmapError::NotFound(_) => "Id Not Found",
            ShortmapError::FileOperation(_) => "File Operation Error",
            ShortmapError::InvalidReference(_) => "Invalid Reference",
            ShortmapError::Configuration(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortmapError::MalformedCommand(msg)
            | ShortmapError::MalformedRecord(msg)
            | ShortmapError::NotFound(msg)
            | ShortmapError::FileOperation(msg)
            | ShortmapError::InvalidReference(msg)
            | ShortmapError::Configuration(msg) => msg,
        }
    }

    /// Errors the command loop cannot recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ShortmapError::FileOperation(_) | ShortmapError::Configuration(_)
        )
    }

    /// 格式化为彩色输出（用于终端 stderr）
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

impl fmt::Display for ShortmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortmapError {}

// 便捷的构造函数
impl ShortmapError {
    pub fn malformed_command<T: Into<String>>(msg: T) -> Self {
        ShortmapError::MalformedCommand(msg.into())
    }

    pub fn malformed_record<T: Into<String>>(msg: T) -> Self {
        ShortmapError::MalformedRecord(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortmapError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortmapError::FileOperation(msg.into())
    }

    pub fn invalid_reference<T: Into<String>>(msg: T) -> Self {
        ShortmapError::InvalidReference(msg.into())
    }

    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        ShortmapError::Configuration(msg.into())
    }
}

impl From<std::io::Error> for ShortmapError {
    fn from(err: std::io::Error) -> Self {
        ShortmapError::FileOperation(err.to_string())
    }
}

impl From<config::ConfigError> for ShortmapError {
    fn from(err: config::ConfigError) -> Self {
        ShortmapError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortmapError>;

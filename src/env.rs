//! 环境变量
//!
//! 命令行工具读取的全部环境变量，每个变量一个类型，统一通过 [`EnvVar`] 访问。

use std::env;
use std::fmt;
use std::path::PathBuf;

/// 环境变量解析错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    /// 变量未设置时的取值
    fn unset() -> EnvResult<T> {
        Err(EnvError {
            variable: Self::NAME.to_string(),
            message: "Required environment variable not set".to_string(),
        })
    }

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::unset(),
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 日志过滤指令，格式同 `tracing_subscriber::EnvFilter`
pub struct LogFilter;

impl LogFilter {
    pub const DEFAULT: &'static str = "warn";
}

impl EnvVar<String> for LogFilter {
    const NAME: &'static str = "RTL_PRO_LOG";
    const DESCRIPTION: &'static str = "Log filter directives, e.g. `debug` or `rtl_pro=trace`";

    fn parse(value: &str) -> EnvResult<String> {
        let value = value.trim();
        if value.is_empty() {
            return Self::unset();
        }
        Ok(value.to_string())
    }

    fn unset() -> EnvResult<String> {
        Ok(Self::DEFAULT.to_string())
    }
}

/// 未通过 `--config` 指定时使用的配置文件
pub struct ConfigPath;

impl EnvVar<PathBuf> for ConfigPath {
    const NAME: &'static str = "RTL_PRO_CONFIG";
    const DESCRIPTION: &'static str = "Path to the storefront configuration (.json or .toml)";

    fn parse(value: &str) -> EnvResult<PathBuf> {
        if value.trim().is_empty() {
            return Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Path must not be empty".to_string(),
            });
        }
        Ok(PathBuf::from(value))
    }
}

/// 禁用彩色输出
pub struct NoColor;

impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DESCRIPTION: &'static str = "Disable colored output when set to any value";

    fn parse(value: &str) -> EnvResult<bool> {
        // NO_COLOR 遵循标准：任何非空值都表示禁用颜色
        Ok(!value.is_empty())
    }

    fn unset() -> EnvResult<bool> {
        Ok(false)
    }
}

/// 生成环境变量说明
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");
    for (name, description) in [
        (LogFilter::NAME, LogFilter::DESCRIPTION),
        (ConfigPath::NAME, ConfigPath::DESCRIPTION),
        (NoColor::NAME, NoColor::DESCRIPTION),
    ] {
        docs.push_str(&format!("- `{}`: {}\n", name, description));
    }
    docs
}

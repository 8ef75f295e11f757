use std::io;

use thiserror::Error;
use tracing::debug;

use crate::config::StorefrontConfig;
use crate::parsers::html::{get_charset, serialize_document, Document};
use crate::storefront::Storefront;

/// Represents errors that can occur while loading configuration or processing a page
#[derive(Error, Debug)]
pub enum RtlProError {
    /// 读写文件失败
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 配置无法解析
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 配置无法解析
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// 配置文件扩展名不受支持
    #[error("unsupported configuration format '{0}' (expected .json or .toml)")]
    UnsupportedConfigFormat(String),
}

pub type RtlProResult<T> = Result<T, RtlProError>;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";
const DEFAULT_DOCUMENT_ENCODING: &str = "utf-8";

/// Applies the storefront runtime to a raw HTML page
///
/// The charset is taken from `encoding` when given, otherwise from the
/// document's own `<meta>` declaration, falling back to UTF-8. The output is
/// written back in the same charset.
pub fn process_document(
    data: &[u8],
    encoding: Option<&str>,
    config: &StorefrontConfig,
) -> RtlProResult<Vec<u8>> {
    let mut document_encoding = encoding.unwrap_or(DEFAULT_DOCUMENT_ENCODING).to_string();
    let mut document = Document::from_bytes(data, &document_encoding);

    if encoding.is_none() {
        if let Some(charset) = get_charset(&document) {
            if !charset.eq_ignore_ascii_case(&document_encoding) {
                debug!(%charset, "re-decoding document with declared charset");
                document_encoding = charset;
                document = Document::from_bytes(data, &document_encoding);
            }
        }
    }

    let storefront = Storefront::init(document, config.clone());
    serialize_document(storefront.document(), &document_encoding)
}

/// Prints an error message to stderr, in red when `use_color` is set
pub fn print_error_message(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

use encoding_rs::Encoding;
use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::SerializableHandle;

use crate::core::RtlProResult;

use super::dom::Document;

/// 序列化文档
///
/// `document_encoding` 为空或无法识别时输出UTF-8。
pub fn serialize_document(document: &Document, document_encoding: &str) -> RtlProResult<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();

    let serializable: SerializableHandle = document.root().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())?;

    if !document_encoding.is_empty() {
        if let Some(encoding) = Encoding::for_label(document_encoding.as_bytes()) {
            let s: &str = &String::from_utf8_lossy(&buf);
            let (data, _, _) = encoding.encode(s);
            buf = data.to_vec();
        }
    }

    Ok(buf)
}

/// 序列化为UTF-8字符串
pub fn serialize_to_string(document: &Document) -> RtlProResult<String> {
    let buf = serialize_document(document, "")?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

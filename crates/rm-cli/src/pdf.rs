use std::path::Path;

use tracing::{info, warn};

/// PDF 本文のテキスト抽出
///
/// 失敗時（読めない・暗号化・スキャン画像など）は warn ログの上で
/// 空文字を返し、呼び出し側を落とさない契約。空文字は下流で
/// 「スキル未検出」として扱われる。
pub fn extract_text(path: &Path) -> String {
    match pdf_extract::extract_text(path) {
        Ok(text) => {
            info!(path = %path.display(), chars = text.len(), "extracted text from PDF");
            text
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to extract text from PDF");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn unreadable_file_yields_empty_text() {
        let missing = Path::new("does/not/exist.pdf");
        assert_eq!(extract_text(missing), "");
    }

    #[test]
    fn non_pdf_content_yields_empty_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"plain text, not a pdf").unwrap();

        assert_eq!(extract_text(file.path()), "");
    }
}

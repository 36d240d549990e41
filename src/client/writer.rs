use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::api_models::ExchangeView;

/// 覆盖写入汇率文件，内容固定为一行 "Dólar: {value}"。
/// File::create 自带截断，句柄在函数返回时关闭
pub fn write_quote(path: &Path, view: &ExchangeView) -> io::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "Dólar: {}", view.value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_the_exact_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");

        let view = ExchangeView { value: "5.6500".into() };
        write_quote(&path, &view).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.6500");
    }

    #[test]
    fn second_run_replaces_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cotacao.txt");

        write_quote(&path, &ExchangeView { value: "5.6500".into() }).unwrap();
        write_quote(&path, &ExchangeView { value: "5.695".into() }).unwrap();

        // 文件内容只反映最后一次运行
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dólar: 5.695");
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("cotacao.txt");

        let err = write_quote(&path, &ExchangeView { value: "5.6500".into() });
        assert!(err.is_err());
    }
}

use crate::collector::FileRecord;
use crate::error::{AllCodesError, Result};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub const BANNER_WIDTH: usize = 80;
pub const TITLE: &str = "TODOS OS CÓDIGOS DO PROJETO";

/// Lexicographic on the path string, the only ordering the document promises.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.path.cmp(&b.path));
}

pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

pub struct BundleWriter {
    output_path: PathBuf,
}

impl BundleWriter {
    pub fn new<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    /// Truncates any previous document. The handle is released on every exit
    /// path; a failed write leaves a partial file behind.
    pub fn write(&self, records: &[FileRecord]) -> Result<()> {
        let file = fs::File::create(&self.output_path).map_err(|e| self.write_error(e))?;
        let mut writer = BufWriter::new(file);

        Self::render(records, &mut writer).map_err(|e| self.write_error(e))?;

        writer
            .into_inner()
            .map_err(|e| self.write_error(e.into_error()))?
            .sync_all()
            .map_err(|e| self.write_error(e))?;

        Ok(())
    }

    pub fn render<W: Write>(records: &[FileRecord], mut out: W) -> io::Result<()> {
        let banner = banner();

        writeln!(out, "{}", banner)?;
        writeln!(out, "{}", TITLE)?;
        writeln!(out, "Total de arquivos: {}", records.len())?;
        writeln!(out, "{}", banner)?;
        writeln!(out)?;

        for record in records {
            writeln!(out, "{}", banner)?;
            writeln!(out, "ARQUIVO: {}", record.path)?;
            writeln!(out, "TIPO: {}", record.extension)?;
            writeln!(out, "{}", banner)?;
            writeln!(out)?;
            out.write_all(record.content.as_bytes())?;
            out.write_all(b"\n\n")?;
        }

        out.flush()
    }

    fn write_error(&self, source: io::Error) -> AllCodesError {
        AllCodesError::OutputWrite {
            path: self.output_path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render_to_string(records: &[FileRecord]) -> String {
        let mut buffer = Vec::new();
        BundleWriter::render(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_banner_width() {
        assert_eq!(banner().len(), 80);
        assert!(banner().chars().all(|c| c == '='));
    }

    #[test]
    fn test_empty_document_is_header_only() {
        let expected = format!(
            "{b}\nTODOS OS CÓDIGOS DO PROJETO\nTotal de arquivos: 0\n{b}\n\n",
            b = banner()
        );
        assert_eq!(render_to_string(&[]), expected);
    }

    #[test]
    fn test_exact_document_layout() {
        let records = vec![
            FileRecord::new("a.py", "x=1", ".py"),
            FileRecord::new("b/c.js", "y=2", ".js"),
        ];

        let b = banner();
        let expected = format!(
            "{b}\nTODOS OS CÓDIGOS DO PROJETO\nTotal de arquivos: 2\n{b}\n\n\
             {b}\nARQUIVO: a.py\nTIPO: .py\n{b}\n\nx=1\n\n\
             {b}\nARQUIVO: b/c.js\nTIPO: .js\n{b}\n\ny=2\n\n",
            b = b
        );

        assert_eq!(render_to_string(&records), expected);
    }

    #[test]
    fn test_content_written_verbatim() {
        let content = "line 1\r\n\tline 2 ==== ARQUIVO: fake\n\n\n";
        let records = vec![FileRecord::new("odd.md", content, ".md")];

        let rendered = render_to_string(&records);
        let body_start = rendered.rfind(&format!("{}\n\n", banner())).unwrap() + BANNER_WIDTH + 2;
        assert_eq!(&rendered[body_start..rendered.len() - 2], content);
        assert!(rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_sort_records_is_string_order() {
        let mut records = vec![
            FileRecord::new("b/c.js", "", ".js"),
            FileRecord::new("b.py", "", ".py"),
            FileRecord::new("a.py", "", ".py"),
            FileRecord::new("B.py", "", ".py"),
        ];

        sort_records(&mut records);

        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["B.py", "a.py", "b.py", "b/c.js"]);
    }

    #[test]
    fn test_write_truncates_previous_document() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("AllCodes.txt");
        fs::write(&output, "stale content that is much longer than the new document".repeat(20))
            .unwrap();

        let writer = BundleWriter::new(&output);
        writer.write(&[]).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), render_to_string(&[]));
    }

    #[test]
    fn test_unwritable_location_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("AllCodes.txt");

        let writer = BundleWriter::new(&output);
        let err = writer.write(&[]).unwrap_err();

        match err {
            AllCodesError::OutputWrite { path, .. } => assert_eq!(path, output),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

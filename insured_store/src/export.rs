use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::record::Record;

pub const EXPORT_HEADER: &str = "Database of insured persons:";
pub const EXPORT_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid file name \"{0}\"")]
    InvalidFileName(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Persist(#[from] tempfile::PersistError),
}
pub type ExportResult<T> = Result<T, ExportError>;

pub trait RecordsExporter: Send + Sync {
    /// Writes `records` into `file_name` under `directory` and returns the written path.
    fn export(&self, file_name: &str, directory: &str, records: &[Record])
        -> ExportResult<PathBuf>;
}

/// Writes a plain text listing, one `name, surname, phone, age` line per record.
///
/// `directory` is resolved against `base_dir` (an absolute `directory` wins),
/// missing directories are created and an existing file is replaced.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    base_dir: PathBuf,
}

impl TextFileExporter {
    pub fn new(base_dir: PathBuf) -> TextFileExporter {
        TextFileExporter { base_dir }
    }

    fn target_path(&self, file_name: &str, directory: &str) -> ExportResult<PathBuf> {
        if file_name.trim().is_empty() || file_name.contains(&['/', '\\'][..]) {
            return Err(ExportError::InvalidFileName(file_name.to_string()));
        }

        Ok(self
            .base_dir
            .join(directory)
            .join(format!("{}.{}", file_name, EXPORT_EXTENSION)))
    }
}

impl RecordsExporter for TextFileExporter {
    fn export(
        &self,
        file_name: &str,
        directory: &str,
        records: &[Record],
    ) -> ExportResult<PathBuf> {
        let path = self.target_path(file_name, directory)?;
        let parent = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone());
        fs::create_dir_all(&parent)?;

        let tmp_file = NamedTempFile::new_in(&parent)?;
        {
            let mut writer = BufWriter::new(tmp_file.as_file());
            write_records(&mut writer, records)?;
            writer.flush()?;
        }
        tmp_file.persist(&path)?;

        log::info!("Exported {} records to {:?}", records.len(), path);
        Ok(path)
    }
}

fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> std::io::Result<()> {
    writeln!(writer, "{}", EXPORT_HEADER)?;
    for record in records {
        writeln!(
            writer,
            "{}, {}, {}, {}",
            record.name(),
            record.surname(),
            record.phone(),
            record.age()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::{ExportError, RecordsExporter, TextFileExporter};
    use crate::record::NewRecord;
    use crate::repository::{memory::MemoryRepository, RecordsRepository};

    fn filled_repo() -> MemoryRepository {
        let repo = MemoryRepository::new();
        repo.add_record(NewRecord::new(
            "John".to_string(),
            "Doe".to_string(),
            "123456789".to_string(),
            25,
        ));
        repo.add_record(NewRecord::new(
            "Homer".to_string(),
            "Simpson".to_string(),
            "987654321".to_string(),
            52,
        ));
        repo
    }

    #[test]
    fn test_export_records() {
        let tmp_dir = TempDir::new("test_").unwrap();
        let exporter = TextFileExporter::new(tmp_dir.path().to_path_buf());

        let path = exporter
            .export("file", "persons", &filled_repo().get_records())
            .unwrap();

        assert_eq!(path, tmp_dir.path().join("persons").join("file.txt"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Database of insured persons:\nJohn, Doe, 123456789, 25\nHomer, Simpson, 987654321, 52\n"
        );

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let tmp_dir = TempDir::new("test_").unwrap();
        let exporter = TextFileExporter::new(tmp_dir.path().to_path_buf());
        let repo = filled_repo();

        exporter.export("file", "", &repo.get_records()).unwrap();
        repo.delete(1);
        let path = exporter.export("file", "", &repo.get_records()).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Database of insured persons:\nHomer, Simpson, 987654321, 52\n"
        );

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_export_empty_records() {
        let tmp_dir = TempDir::new("test_").unwrap();
        let exporter = TextFileExporter::new(tmp_dir.path().to_path_buf());

        let path = exporter.export("empty", "a/b", &[]).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Database of insured persons:\n"
        );

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_export_absolute_directory() {
        let base_dir = TempDir::new("base_").unwrap();
        let target_dir = TempDir::new("target_").unwrap();
        let exporter = TextFileExporter::new(base_dir.path().to_path_buf());

        let path = exporter
            .export("file", target_dir.path().to_str().unwrap(), &[])
            .unwrap();

        assert_eq!(path, target_dir.path().join("file.txt"));
        assert!(path.exists());

        base_dir.close().unwrap();
        target_dir.close().unwrap();
    }

    #[test]
    fn test_export_invalid_file_name() {
        let tmp_dir = TempDir::new("test_").unwrap();
        let exporter = TextFileExporter::new(tmp_dir.path().to_path_buf());

        for file_name in ["", "  ", "a/b", "a\\b"] {
            let result = exporter.export(file_name, "persons", &[]).unwrap_err();
            assert!(matches!(result, ExportError::InvalidFileName(_)));
        }

        tmp_dir.close().unwrap();
    }

    #[test]
    fn test_export_io_error() {
        let tmp_dir = TempDir::new("test_").unwrap();
        let blocker = tmp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let exporter = TextFileExporter::new(tmp_dir.path().to_path_buf());
        let result = exporter.export("file", "blocker", &[]).unwrap_err();

        assert!(matches!(result, ExportError::Io(_)));

        tmp_dir.close().unwrap();
    }
}

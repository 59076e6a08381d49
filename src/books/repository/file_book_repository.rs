use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

const JSON_INDENT: &[u8] = b"    ";

// FileBookRepository keeps the whole catalog in one pretty-printed JSON array.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    // Creates an empty data file (and its parent directories) when none exists.
    // Returns true if a file was created.
    pub fn init(&self) -> LibraryResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::File::create(&self.path)?;
        debug!(path = %self.path.display(), "created empty data file");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("data"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, bytes: &[u8]) -> LibraryResult<()> {
        let temp_path = self.temp_path();
        let written = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();
        if let Err(err) = written {
            warn!(path = %self.path.display(), error = %err, "failed to save books");
            let _ = fs::remove_file(&temp_path);
            return Err(LibraryError::from(err));
        }
        Ok(())
    }
}

// Every stored book needs a positive id that no other book carries.
fn check_ids(books: &[BookEntity]) -> LibraryResult<()> {
    let mut seen = HashSet::with_capacity(books.len());
    for book in books {
        if book.id == 0 {
            return Err(LibraryError::unavailable("store holds a book with id 0", Some("corrupt".to_string())));
        }
        if !seen.insert(book.id) {
            return Err(LibraryError::unavailable(
                format!("store holds more than one book with id {}", book.id).as_str(), Some("corrupt".to_string())));
        }
    }
    Ok(())
}

impl Repository<BookEntity> for FileBookRepository {
    fn load_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(LibraryError::unavailable(
                    format!("Файл {} не найден", self.path.display()).as_str(), Some("missing".to_string())));
            }
            Err(err) => return Err(LibraryError::from(err)),
        };
        if raw.trim().is_empty() {
            debug!(path = %self.path.display(), "data file is blank, no books");
            return Ok(vec![]);
        }
        let books: Vec<BookEntity> = serde_json::from_str(&raw)?;
        check_ids(&books)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    fn save_all(&self, entities: &[BookEntity]) -> LibraryResult<()> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        entities.serialize(&mut serializer)?;
        self.write_atomically(&buf)?;
        debug!(path = %self.path.display(), count = entities.len(), "saved books");
        Ok(())
    }
}

impl BookRepository for FileBookRepository {
    fn location(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;

    use crate::books::domain::model::BookEntity;
    use crate::books::repository::file_book_repository::FileBookRepository;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    fn sample_books() -> Vec<BookEntity> {
        let mut checked_out = BookEntity::new(2, "Мастер и Маргарита", "Булгаков", 1967);
        checked_out.status = BookStatus::CheckedOut;
        vec![
            BookEntity::new(1, "Dune", "Herbert", 1965),
            checked_out,
            BookEntity::new(5, "Solaris", "Lem", 1961),
        ]
    }

    #[test]
    fn test_should_fail_load_when_file_missing() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("data.json"));
        let res = repo.load_all();
        assert!(matches!(res, Err(LibraryError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_should_load_empty_from_blank_file() {
        let dir = tempdir().expect("should create tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, "  \n").expect("should write blank file");
        let repo = FileBookRepository::new(&path);
        let books = repo.load_all().expect("should load blank file");
        assert!(books.is_empty());
    }

    #[test]
    fn test_should_fail_load_when_file_corrupt() {
        let dir = tempdir().expect("should create tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, "[{\"id\": 1, ").expect("should write corrupt file");
        let repo = FileBookRepository::new(&path);
        let res = repo.load_all();
        assert!(matches!(res, Err(LibraryError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_should_fail_load_when_ids_duplicated_or_zero() {
        let dir = tempdir().expect("should create tempdir");
        let path = dir.path().join("data.json");
        let repo = FileBookRepository::new(&path);
        for raw in [
            r#"[{"id": 1, "title": "A", "author": "a", "year": 2001, "status": "в наличии"},
                {"id": 1, "title": "B", "author": "b", "year": 2002, "status": "выдана"}]"#,
            r#"[{"id": 0, "title": "A", "author": "a", "year": 2001, "status": "в наличии"}]"#,
        ] {
            fs::write(&path, raw).expect("should write file");
            match repo.load_all() {
                Err(LibraryError::StoreUnavailable { reason_code, .. }) => {
                    assert_eq!(Some("corrupt".to_string()), reason_code);
                }
                other => panic!("unexpected result {:?}", other),
            }
        }
    }

    #[test]
    fn test_should_save_and_load_books() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("data.json"));
        let books = sample_books();
        repo.save_all(&books).expect("should save books");
        let loaded = repo.load_all().expect("should load books");
        assert_eq!(books, loaded);
    }

    #[test]
    fn test_should_save_and_load_empty_collection() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("data.json"));
        repo.save_all(&[]).expect("should save empty books");
        let loaded = repo.load_all().expect("should load books");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_should_replace_previous_contents() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("data.json"));
        repo.save_all(&sample_books()).expect("should save books");
        let replacement = vec![BookEntity::new(9, "Roadside Picnic", "Strugatsky", 1972)];
        repo.save_all(&replacement).expect("should save replacement");
        assert_eq!(replacement, repo.load_all().expect("should load books"));
        assert!(!dir.path().join("data.json.tmp").exists());
    }

    #[test]
    fn test_should_write_indented_utf8_json() {
        let dir = tempdir().expect("should create tempdir");
        let path = dir.path().join("data.json");
        let repo = FileBookRepository::new(&path);
        repo.save_all(&sample_books()[1..2]).expect("should save books");
        let raw = fs::read_to_string(&path).expect("should read file");
        let expected = "[\n    {\n        \"id\": 2,\n        \"title\": \"Мастер и Маргарита\",\n        \"author\": \"Булгаков\",\n        \"year\": 1967,\n        \"status\": \"выдана\"\n    }\n]";
        assert_eq!(expected, raw);
    }

    #[test]
    fn test_should_load_file_with_reordered_fields() {
        let dir = tempdir().expect("should create tempdir");
        let path = dir.path().join("data.json");
        fs::write(&path, r#"[{"status": "в наличии", "author": "Herbert", "year": 1965, "id": 1, "title": "Dune"}]"#)
            .expect("should write file");
        let repo = FileBookRepository::new(&path);
        let books = repo.load_all().expect("should load books");
        assert_eq!(vec![BookEntity::new(1, "Dune", "Herbert", 1965)], books);
    }

    #[test]
    fn test_should_fail_save_when_directory_missing() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("missing").join("data.json"));
        let res = repo.save_all(&sample_books());
        assert!(matches!(res, Err(LibraryError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_should_init_empty_file_once() {
        let dir = tempdir().expect("should create tempdir");
        let repo = FileBookRepository::new(dir.path().join("nested").join("data.json"));
        assert!(repo.init().expect("should create file"));
        assert!(!repo.init().expect("should keep file"));
        assert!(repo.load_all().expect("should load books").is_empty());
    }
}

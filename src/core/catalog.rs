use crate::core::parser::{parse_line, split_lines};
use crate::domain::model::{normalize_code, trim_field, Course};
use crate::domain::ports::Storage;
use crate::utils::error::{PlannerError, Result};
use std::collections::BTreeMap;

/// Result of looking up a single course code.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Course),
    /// Carries the normalized code that was searched for.
    NotFound(String),
}

/// In-memory course table keyed by upper-cased code, iterated in code order.
#[derive(Debug, Default)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with the contents of `path`.
    ///
    /// Loading is all-or-nothing: on any error the catalog is left empty,
    /// including when a previous load had succeeded.
    pub fn load<S: Storage>(&mut self, storage: &S, path: &str) -> Result<usize> {
        self.clear();
        tracing::debug!("Loading catalog from: {}", path);

        let bytes = storage.read_file(path)?;
        let text = String::from_utf8_lossy(&bytes);
        let courses = Self::build(&text)?;

        let count = courses.len();
        self.courses = courses;
        tracing::info!("✅ Loaded {} courses from {}", count, path);
        Ok(count)
    }

    /// Parses a whole catalog text without touching `self`.
    pub fn build(text: &str) -> Result<BTreeMap<String, Course>> {
        let mut courses = BTreeMap::new();
        let mut loaded = 0usize;

        for (index, raw) in split_lines(text).enumerate() {
            let line = trim_field(raw);
            if line.is_empty() {
                continue;
            }

            let Some(course) = parse_line(line) else {
                tracing::warn!("Malformed catalog line {}: {:?}", index + 1, line);
                return Err(PlannerError::MalformedLine { line: index + 1 });
            };

            if let Some(previous) = courses.insert(course.number.clone(), course) {
                tracing::debug!(
                    "Line {} replaces earlier record for {}",
                    index + 1,
                    previous.number
                );
            }
            loaded += 1;
        }

        if loaded == 0 {
            tracing::warn!("Catalog text contained no course lines");
            return Err(PlannerError::EmptyCatalog);
        }

        Ok(courses)
    }

    pub fn clear(&mut self) {
        self.courses.clear();
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses in ascending code order.
    pub fn list_all(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn lookup(&self, code: &str) -> Lookup<'_> {
        let key = normalize_code(code);
        tracing::debug!("Looking up course: {}", key);
        match self.courses.get(&key) {
            Some(course) => Lookup::Found(course),
            None => Lookup::NotFound(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockStorage {
        files: HashMap<String, Vec<u8>>,
    }

    impl MockStorage {
        fn with_file(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self { files }
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| PlannerError::FileOpen {
                    path: path.to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("File not found: {}", path),
                    ),
                })
        }
    }

    fn codes(catalog: &Catalog) -> Vec<&str> {
        catalog.list_all().map(|c| c.number.as_str()).collect()
    }

    #[test]
    fn test_load_sorts_by_code() {
        let storage = MockStorage::with_file(
            "courses.txt",
            "CS101,Intro to CS,CS100\nCS100\tFoundations\n",
        );
        let mut catalog = Catalog::new();

        assert_eq!(catalog.load(&storage, "courses.txt").unwrap(), 2);
        assert_eq!(codes(&catalog), vec!["CS100", "CS101"]);
    }

    #[test]
    fn test_load_last_write_wins_case_insensitively() {
        let storage = MockStorage::with_file(
            "dup.txt",
            "cs101,Old Title,MATH100\nCS101,New Title\n",
        );
        let mut catalog = Catalog::new();
        catalog.load(&storage, "dup.txt").unwrap();

        assert_eq!(catalog.len(), 1);
        match catalog.lookup("CS101") {
            Lookup::Found(course) => {
                assert_eq!(course.title, "New Title");
                assert!(course.prereqs.is_empty());
            }
            other => panic!("expected CS101, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_line_discards_previous_catalog() {
        let mut storage = MockStorage::with_file("good.txt", "CS100,Foundations\n");
        storage
            .files
            .insert("bad.txt".to_string(), b"CS101,Intro\n\nCS102\n".to_vec());
        let mut catalog = Catalog::new();
        catalog.load(&storage, "good.txt").unwrap();

        let err = catalog.load(&storage, "bad.txt").unwrap_err();
        assert!(matches!(err, PlannerError::MalformedLine { line: 3 }));
        assert!(catalog.is_empty());
        assert_eq!(
            catalog.lookup("cs100"),
            Lookup::NotFound("CS100".to_string())
        );
    }

    #[test]
    fn test_missing_file_leaves_catalog_empty() {
        let storage = MockStorage::with_file("good.txt", "CS100,Foundations\n");
        let mut catalog = Catalog::new();
        catalog.load(&storage, "good.txt").unwrap();

        let err = catalog.load(&storage, "nope.txt").unwrap_err();
        assert!(matches!(err, PlannerError::FileOpen { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_blank_only_file_is_empty_catalog() {
        let storage = MockStorage::with_file("blank.txt", "\n   \r\n\t\n");
        let mut catalog = Catalog::new();

        let err = catalog.load(&storage, "blank.txt").unwrap_err();
        assert!(matches!(err, PlannerError::EmptyCatalog));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let storage = MockStorage::with_file("c.txt", "CS101,Intro to CS,cs100\n");
        let mut catalog = Catalog::new();
        catalog.load(&storage, "c.txt").unwrap();

        match catalog.lookup(" cs101 ") {
            Lookup::Found(course) => assert_eq!(course.prereqs, vec!["CS100"]),
            other => panic!("expected CS101, got {:?}", other),
        }
        // Prerequisites are not required to exist in the catalog.
        assert_eq!(
            catalog.lookup("cs100"),
            Lookup::NotFound("CS100".to_string())
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_tolerates_invalid_utf8() {
        let mut storage = MockStorage::with_file("x", "");
        storage
            .files
            .insert("latin1.txt".to_string(), b"FR101,Fran\xe7ais\n".to_vec());
        let mut catalog = Catalog::new();

        assert_eq!(catalog.load(&storage, "latin1.txt").unwrap(), 1);
        match catalog.lookup("fr101") {
            Lookup::Found(course) => assert_eq!(course.title, "Fran\u{FFFD}ais"),
            other => panic!("expected FR101, got {:?}", other),
        }
    }

    #[test]
    fn test_lone_cr_counts_as_its_own_line() {
        let storage = MockStorage::with_file("mac.txt", "A,x\r\r\nB\n");
        let mut catalog = Catalog::new();

        let err = catalog.load(&storage, "mac.txt").unwrap_err();
        assert!(matches!(err, PlannerError::MalformedLine { line: 3 }));
    }
}

//! Directory-backed font provider.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::data::FontData;
use crate::error::FontError;
use crate::provider::FontProvider;

/// Loads every `.ttf`/`.otf` file in one directory, ordered by file name.
///
/// The first font in that order is the primary font. Unlike a plain
/// "first file wins" lookup, a character the primary font lacks is served by
/// the next font that maps it; if none do, the primary font renders its
/// `.notdef` glyph.
#[derive(Debug)]
pub struct DirectoryFontProvider {
    dir: PathBuf,
    /// Fonts with their source paths, sorted by file name.
    fonts: Vec<(PathBuf, FontData)>,
}

impl DirectoryFontProvider {
    /// Load all fonts from `dir`.
    ///
    /// Files that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::DirectoryNotFound`] if `dir` is not a directory,
    /// [`FontError::Io`] if it cannot be listed, and
    /// [`FontError::NoFontFiles`] if no font file in it could be loaded.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, FontError> {
        let dir = dir.as_ref();
        let paths = font_files(dir)?;

        let mut fonts = Vec::with_capacity(paths.len());
        for path in paths {
            let loaded = fs::read(&path)
                .map_err(|source| FontError::Io {
                    path: path.clone(),
                    source,
                })
                .and_then(FontData::from_vec);
            match loaded {
                Ok(font) => {
                    debug!(path = %path.display(), "loaded font");
                    fonts.push((path, font));
                }
                Err(e) => warn!(path = %path.display(), "skipping font: {e}"),
            }
        }

        if fonts.is_empty() {
            return Err(FontError::NoFontFiles(dir.to_path_buf()));
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            fonts,
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths of the loaded fonts, primary first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.fonts.iter().map(|(p, _)| p.as_path())
    }
}

impl FontProvider for DirectoryFontProvider {
    // Not "first file for everything": later fonts fill in glyphs the
    // primary font lacks.
    fn font_for(&self, ch: char) -> Option<&FontData> {
        self.fonts
            .iter()
            .map(|(_, f)| f)
            .find(|f| f.has_glyph(ch))
            .or_else(|| self.fonts.first().map(|(_, f)| f))
    }
}

/// Font files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`FontError::DirectoryNotFound`] if `dir` is not a directory,
/// [`FontError::Io`] if it cannot be listed, and [`FontError::NoFontFiles`]
/// if it holds no `.ttf`/`.otf` file.
pub fn font_files(dir: &Path) -> Result<Vec<PathBuf>, FontError> {
    if !dir.is_dir() {
        return Err(FontError::DirectoryNotFound(dir.to_path_buf()));
    }
    let entries = fs::read_dir(dir).map_err(|source| FontError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_font_file(p))
        .collect();
    if files.is_empty() {
        return Err(FontError::NoFontFiles(dir.to_path_buf()));
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::test_font::TEST_FONT;

    struct TestDir {
        path: PathBuf,
    }

    impl TestDir {
        fn new(tag: &str) -> Self {
            let ts = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos());
            let path = std::env::temp_dir().join(format!(
                "dotstroke_fonts_{tag}_{}_{}",
                std::process::id(),
                ts
            ));
            fs::create_dir_all(&path).expect("create temp test dir");
            Self { path }
        }

        fn touch(&self, name: &str, contents: &[u8]) {
            fs::write(self.path.join(name), contents).expect("write test file");
        }
    }

    impl Drop for TestDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn missing_directory_is_resource_not_found() {
        let dir = TestDir::new("missing");
        let err = DirectoryFontProvider::open(dir.path.join("nope")).expect_err("missing dir");
        assert!(matches!(err, FontError::DirectoryNotFound(_)));
        assert!(err.is_resource_not_found());
    }

    #[test]
    fn directory_without_fonts_is_resource_not_found() {
        let dir = TestDir::new("empty");
        dir.touch("readme.txt", b"hello");
        let err = DirectoryFontProvider::open(&dir.path).expect_err("no fonts");
        assert!(matches!(err, FontError::NoFontFiles(_)));
        assert!(err.is_resource_not_found());
    }

    #[test]
    fn unparseable_fonts_are_skipped() {
        let dir = TestDir::new("broken");
        dir.touch("broken.ttf", b"not a font");
        let err = DirectoryFontProvider::open(&dir.path).expect_err("nothing loads");
        assert!(matches!(err, FontError::NoFontFiles(_)));
    }

    #[test]
    fn broken_files_are_skipped_next_to_good_ones() {
        let dir = TestDir::new("mixed");
        dir.touch("a_broken.ttf", b"not a font");
        dir.touch("b_mono.ttf", TEST_FONT);
        let provider = DirectoryFontProvider::open(&dir.path).expect("open");
        let names: Vec<_> = provider
            .paths()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["b_mono.ttf"]);
        assert_eq!(provider.dir(), dir.path.as_path());
    }

    #[test]
    fn font_for_prefers_a_font_with_the_glyph() {
        let dir = TestDir::new("lookup");
        dir.touch("a.ttf", TEST_FONT);
        dir.touch("b.ttf", TEST_FONT);
        let provider = DirectoryFontProvider::open(&dir.path).expect("open");
        assert_eq!(provider.paths().count(), 2);

        let latin = provider.font_for('A').expect("font for A");
        assert!(latin.has_glyph('A'));
        // No font maps it: the primary font still answers, with .notdef.
        let cjk = provider.font_for('\u{4E2D}').expect("fallback font");
        assert!(!cjk.has_glyph('\u{4E2D}'));
    }

    #[test]
    fn font_files_are_sorted_by_name() {
        let dir = TestDir::new("sorted");
        dir.touch("b.ttf", b"");
        dir.touch("a.OTF", b"");
        dir.touch("c.ttf", b"");
        dir.touch("notes.md", b"");
        fs::create_dir(dir.path.join("sub.ttf")).expect("mkdir");

        let files = font_files(&dir.path).expect("files");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.OTF", "b.ttf", "c.ttf"]);
    }
}

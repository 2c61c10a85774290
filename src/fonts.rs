//! Discovery and registration of font files.

use std::{collections::BTreeSet, fs, path::{Path, PathBuf}};
use tracing::{debug, warn};
use crate::{Error, Result, Style};

/// Extensions (lower case) of the files considered to be fonts.
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

fn is_font(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_EXTENSIONS.iter()
                     .any(|f| e.eq_ignore_ascii_case(f)))
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::Io { path: path.to_path_buf(), source }
}

fn scan(dir: &Path, found: &mut BTreeSet<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        // Symbolic links to directories are not followed.
        if entry.file_type().map_err(io_error(&path))?.is_dir() {
            scan(&path, found)?
        } else if is_font(&path) && path.is_file() {
            found.insert(path);
        }
    }
    Ok(())
}

/// Return the font files (`.ttf`, `.otf` and `.ttc`, in any case)
/// found in the directories `dirs` and their subdirectories, sorted
/// and without duplicates.  Directories that do not exist are
/// skipped.
pub fn find_font_files<P: AsRef<Path>>(dirs: &[P]) -> Result<Vec<PathBuf>> {
    let mut found = BTreeSet::new();
    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "font directory not found");
            continue
        }
        scan(dir, &mut found)?;
    }
    Ok(found.into_iter().collect())
}

/// A font file registered in a [`FontBook`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontEntry {
    path: PathBuf,
    name: String,
}

impl FontEntry {
    #[inline]
    pub fn path(&self) -> &Path { &self.path }

    /// The file name without its extension.
    #[inline]
    pub fn name(&self) -> &str { &self.name }
}

/// The fonts available for drawing, in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    fonts: Vec<FontEntry>,
}

impl FontBook {
    pub fn new() -> Self { Self::default() }

    /// Register the font file `path`.  Returns `false` if it was
    /// already registered.
    pub fn add_font(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        if !is_font(path) { return Err(Error::NotAFont(path.to_path_buf())) }
        let meta = fs::metadata(path).map_err(io_error(path))?;
        if !meta.is_file() { return Err(Error::NotAFont(path.to_path_buf())) }
        if self.fonts.iter().any(|f| f.path == path) { return Ok(false) }
        let name = path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(path = %path.display(), name = %name, "add font");
        self.fonts.push(FontEntry { path: path.to_path_buf(), name });
        Ok(true)
    }

    #[inline]
    pub fn fonts(&self) -> &[FontEntry] { &self.fonts }

    #[inline]
    pub fn len(&self) -> usize { self.fonts.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.fonts.is_empty() }

    /// Says whether a font whose file name (without extension) is
    /// `name` has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.iter().any(|f| f.name == name)
    }
}

/// Register the fonts found in `dirs` (see [`find_font_files`]) and
/// make sure `style` does not render text with LaTeX, so that they
/// are used.  Returns the number of fonts newly registered.
pub fn load_custom_fonts<P: AsRef<Path>>(
    book: &mut FontBook, style: &mut Style, dirs: &[P]) -> Result<usize> {
    let mut added = 0;
    for file in find_font_files(dirs)? {
        if book.add_font(&file)? { added += 1 }
    }
    debug!(added, fonts = ?book.fonts().iter().map(|f| f.name())
           .collect::<Vec<_>>(), "fonts loaded");
    style.set_usetex(false);
    Ok(added)
}

/// Register the fonts of `dirs` (possibly none) and use `family` for
/// all text of `style`.  Returns the number of fonts newly registered.
pub fn set_global_font<P: AsRef<Path>>(
    book: &mut FontBook, style: &mut Style, family: &str, dirs: &[P])
    -> Result<usize> {
    let added = load_custom_fonts(book, style, dirs)?;
    style.set_font_family(family);
    Ok(added)
}

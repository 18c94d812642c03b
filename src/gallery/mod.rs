//! `gallery` - Builds the ordered list of pages shown by the viewer.
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::logging;

pub mod sort;

pub use sort::{alphanum_key, sort_pages, SortMethod};

/// Errors raised while assembling a gallery
#[derive(Debug)]
pub enum GalleryError {
    /// A path is missing or is not a regular file
    MissingFile(PathBuf),

    /// The data file could not be read
    DataFileRead(String),

    /// The data file is not valid JSON
    DataFileDecode(String),

    /// No paths were given
    Empty,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::MissingFile(path) => write!(
                f,
                "path {} does not exist or is not a regular file",
                path.display()
            ),
            GalleryError::DataFileRead(msg) => write!(f, "Unable to read data file: {}", msg),
            GalleryError::DataFileDecode(msg) => {
                write!(f, "Unable to decode data file as JSON: {}", msg)
            }
            GalleryError::Empty => write!(f, "No image paths given"),
        }
    }
}

impl Error for GalleryError {}

pub type GalleryResult<T> = Result<T, GalleryError>;

/// One page of the gallery: an image path and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage {
    /// Path as given on the command line
    pub arg: String,
    /// Position of the path on the command line
    pub index: usize,
    /// Entry from the data file keyed by `arg`, if any
    pub data: Option<Value>,
}

impl GalleryPage {
    pub fn new(arg: String, index: usize) -> Self {
        Self {
            arg,
            index,
            data: None,
        }
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.arg)
    }

    /// File name for tab titles, falling back to the full argument.
    pub fn title(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.arg.clone())
    }
}

/// The ordered pages plus gallery-wide metadata.
#[derive(Debug, Clone)]
pub struct Gallery {
    pub title: String,
    pub pages: Vec<GalleryPage>,
    pub data: Value,
}

impl Gallery {
    /// Creates pages from `paths` in the chosen order.
    pub fn from_paths<I, P>(paths: I, method: SortMethod, ignore_case: bool) -> Vec<GalleryPage>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let mut pages: Vec<GalleryPage> = paths
            .into_iter()
            .enumerate()
            .map(|(index, arg)| GalleryPage::new(arg.into(), index))
            .collect();
        sort_pages(&mut pages, method, ignore_case);
        pages
    }

    /// Assembles a gallery, attaching data file entries to matching pages.
    pub fn new(title: String, mut pages: Vec<GalleryPage>, data: Value) -> GalleryResult<Self> {
        if pages.is_empty() {
            return Err(GalleryError::Empty);
        }

        if let Value::Object(entries) = &data {
            for page in pages.iter_mut() {
                page.data = entries.get(&page.arg).cloned();
            }
        }

        Ok(Self { title, pages, data })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Fails on the first page whose path is not a regular file.
pub fn test_paths(pages: &[GalleryPage]) -> GalleryResult<()> {
    for page in pages {
        if !page.path().is_file() {
            logging::error(&format!(
                "path {} does not exist or is not a regular file",
                page.path().display()
            ));
            return Err(GalleryError::MissingFile(page.path().to_path_buf()));
        }
    }
    Ok(())
}

/// Loads the JSON data file, or an empty object when none is given.
pub fn load_data_file(path: Option<&Path>) -> GalleryResult<Value> {
    let Some(path) = path else {
        return Ok(Value::Object(Default::default()));
    };

    let content = fs::read_to_string(path)
        .map_err(|err| GalleryError::DataFileRead(format!("{}: {}", path.display(), err)))?;
    serde_json::from_str(&content)
        .map_err(|err| GalleryError::DataFileDecode(format!("{}: {}", path.display(), err)))
}

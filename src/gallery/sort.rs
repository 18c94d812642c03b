use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::gallery::GalleryPage;

/// Ordering applied to gallery paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMethod {
    /// Keep the order the paths were given in
    None,
    /// Plain string order
    Ascii,
    /// Natural order: digit runs compare as numbers
    #[default]
    Human,
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMethod::None => "none",
            SortMethod::Ascii => "ascii",
            SortMethod::Human => "human",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortMethod {
    type Err = String;

    /// Parses config values. `default` is accepted as an alias for `human`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "none" => Ok(SortMethod::None),
            "ascii" => Ok(SortMethod::Ascii),
            "human" | "default" => Ok(SortMethod::Human),
            other => Err(format!("unknown sort method: {}", other)),
        }
    }
}

/// One run of a natural sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(String),
    /// Digit run with leading zeros stripped
    Number(String),
}

impl Ord for Chunk {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Less,
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Chunk {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Splits a string into alternating text and number chunks.
///
/// The key always starts and ends with a text chunk (possibly empty), so two
/// keys compare text against text and numbers against numbers.
pub fn alphanum_key(value: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut text = String::new();
    let mut digits = String::new();

    for c in value.chars() {
        if c.is_ascii_digit() {
            if digits.is_empty() {
                chunks.push(Chunk::Text(std::mem::take(&mut text)));
            }
            digits.push(c);
        } else {
            if !digits.is_empty() {
                chunks.push(number_chunk(&digits));
                digits.clear();
            }
            text.push(c);
        }
    }

    if !digits.is_empty() {
        chunks.push(number_chunk(&digits));
    }
    chunks.push(Chunk::Text(text));
    chunks
}

fn number_chunk(digits: &str) -> Chunk {
    let trimmed = digits.trim_start_matches('0');
    Chunk::Number(trimmed.to_string())
}

/// Sorts pages in place. The sort is stable, so equal keys keep argument order.
pub fn sort_pages(pages: &mut [GalleryPage], method: SortMethod, ignore_case: bool) {
    let fold = |value: &str| {
        if ignore_case {
            value.to_lowercase()
        } else {
            value.to_string()
        }
    };

    match method {
        SortMethod::None => {}
        SortMethod::Ascii => pages.sort_by_cached_key(|page| fold(&page.arg)),
        SortMethod::Human => pages.sort_by_cached_key(|page| alphanum_key(&fold(&page.arg))),
    }
}

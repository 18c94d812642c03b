use chrono::{DateTime, Local};
use std::fs;

use crate::gallery::GalleryPage;

/// Text shown in a page panel, gathered once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDetails {
    pub lines: Vec<String>,
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

impl PageDetails {
    pub fn from_page(page: &GalleryPage) -> Self {
        let mut lines = vec![
            format!("Path:     {}", page.arg),
            format!("Argument: #{}", page.index + 1),
        ];

        match fs::metadata(page.path()) {
            Ok(metadata) => {
                lines.push(format!("Size:     {}", format_size(metadata.len())));
                if let Ok(modified) = metadata.modified() {
                    let modified: DateTime<Local> = modified.into();
                    lines.push(format!(
                        "Modified: {}",
                        modified.format("%Y-%m-%d %H:%M:%S")
                    ));
                }
            }
            Err(err) => lines.push(format!("Unavailable: {}", err)),
        }

        if let Some(data) = &page.data {
            lines.push(String::new());
            lines.push(String::from("Data:"));
            let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
            lines.extend(rendered.lines().map(|line| format!("  {}", line)));
        }

        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

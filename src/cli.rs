//! Command-line arguments for the viewer.
use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerOptions;
use crate::gallery::SortMethod;

#[derive(Parser, Debug)]
#[command(
    name = "galleryview",
    version,
    about = "Browse images as a tabbed gallery in the terminal"
)]
pub struct Args {
    /// Image file paths to include in the gallery
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<String>,

    /// Print PATHS in the chosen sorting order and exit
    #[arg(short = 'n', long)]
    pub check_sort: bool,

    /// Consider letter case when sorting PATHS
    #[arg(short = 'c', long, conflicts_with = "ignore_case")]
    pub consider_case: bool,

    /// Casefold PATHS when sorting
    #[arg(short = 'f', long)]
    pub ignore_case: bool,

    /// Sorting method: none, ascii, or human (natural order)
    #[arg(long, value_enum, ignore_case = true, conflicts_with = "no_sort")]
    pub sort: Option<SortMethod>,

    /// Keep PATHS in the order given
    #[arg(short = 'U', long)]
    pub no_sort: bool,

    /// Load per-image data from FILE in JSON format
    #[arg(short = 'd', long, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Exit if not all PATHS exist as files
    #[arg(long, conflicts_with = "no_test")]
    pub test: bool,

    /// Don't test PATHS for existence
    #[arg(long)]
    pub no_test: bool,

    /// Custom title (default is the current directory name)
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    /// Read configuration from FILE instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides config-file options with whatever was given on the command line.
    pub fn resolve(&self, defaults: &ViewerOptions) -> ViewerOptions {
        let sort = if self.no_sort {
            SortMethod::None
        } else {
            self.sort.unwrap_or(defaults.sort)
        };

        let ignore_case = if self.consider_case {
            false
        } else if self.ignore_case {
            true
        } else {
            defaults.ignore_case
        };

        let test = if self.test {
            true
        } else if self.no_test {
            false
        } else {
            defaults.test
        };

        ViewerOptions {
            sort,
            ignore_case,
            test,
            data_file: self.data_file.clone().or_else(|| defaults.data_file.clone()),
        }
    }

    /// Title from `--title`, or the current directory's name.
    pub fn title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        std::env::current_dir()
            .ok()
            .and_then(|dir| dir.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| String::from("gallery"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("galleryview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_paths_are_required() {
        assert!(Args::try_parse_from(["galleryview"]).is_err());
    }

    #[test]
    fn test_config_defaults_apply() {
        let args = parse(&["a.png"]);
        let defaults = ViewerOptions {
            sort: SortMethod::Ascii,
            ignore_case: false,
            test: true,
            data_file: Some(PathBuf::from("data.json")),
        };
        assert_eq!(args.resolve(&defaults), defaults);
    }

    #[test]
    fn test_command_line_overrides_config() {
        let args = parse(&["-U", "-c", "--no-test", "-d", "cli.json", "a.png", "b.png"]);
        let resolved = args.resolve(&ViewerOptions {
            test: true,
            ..ViewerOptions::default()
        });
        assert_eq!(resolved.sort, SortMethod::None);
        assert!(!resolved.ignore_case);
        assert!(!resolved.test);
        assert_eq!(resolved.data_file, Some(PathBuf::from("cli.json")));
        assert_eq!(args.paths, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_sort_value_is_case_insensitive() {
        let args = parse(&["--sort", "ASCII", "a.png"]);
        assert_eq!(args.sort, Some(SortMethod::Ascii));
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Args::try_parse_from(["galleryview", "-c", "-f", "a.png"]).is_err());
        assert!(Args::try_parse_from(["galleryview", "-U", "--sort", "human", "a.png"]).is_err());
        assert!(Args::try_parse_from(["galleryview", "--test", "--no-test", "a.png"]).is_err());
    }

    #[test]
    fn test_explicit_title() {
        let args = parse(&["-T", "Holiday", "a.png"]);
        assert_eq!(args.title(), "Holiday");
    }
}

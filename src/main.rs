use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use galleryview::app::App;
use galleryview::bootstrap::{self, TerminalSession};
use galleryview::cli::Args;
use galleryview::config::Config;
use galleryview::gallery::{self, Gallery, GalleryError};
use galleryview::logging;
use galleryview::runtime::Runner;

const EXIT_MISSING_PATH: u8 = 1;
const EXIT_BAD_DATA_FILE: u8 = 100;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            logging::error(&format!("Application error: {:#}", err));
            eprintln!("galleryview: error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    logging::init_logger().context("Failed to initialize logger")?;
    bootstrap::install_panic_hook();
    logging::info("Starting galleryview");

    let config = Config::load(args.config.as_deref());
    logging::set_level(config.log_level);
    for warning in &config.warnings {
        eprintln!("galleryview: warning: {}", warning);
    }
    let options = args.resolve(&config.options);

    let pages = Gallery::from_paths(args.paths.iter().cloned(), options.sort, options.ignore_case);

    if args.check_sort {
        logging::info(&format!("chosen sort method: {}", options.sort));
        for page in &pages {
            println!("{}", page.arg);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if options.test {
        if let Err(err) = gallery::test_paths(&pages) {
            eprintln!("galleryview: error: {}", err);
            return Ok(ExitCode::from(EXIT_MISSING_PATH));
        }
    }

    let data = match gallery::load_data_file(options.data_file.as_deref()) {
        Ok(data) => data,
        Err(err @ GalleryError::DataFileDecode(_)) => {
            logging::error(&err.to_string());
            eprintln!("galleryview: error: {}", err);
            return Ok(ExitCode::from(EXIT_BAD_DATA_FILE));
        }
        Err(err) => return Err(anyhow::Error::new(err).context("Failed to load data file")),
    };

    let gallery = Gallery::new(args.title(), pages, data).context("Failed to build gallery")?;
    logging::info(&format!(
        "Opened gallery {:?} with {} pages",
        gallery.title,
        gallery.len()
    ));

    let app = App::new(config, gallery).context("Failed to initialize viewer")?;

    let mut session = TerminalSession::new()?;
    Runner::new(session.terminal_mut(), app)
        .run()
        .context("Viewer terminated with an error")?;

    logging::info("Application terminated successfully");
    Ok(ExitCode::SUCCESS)
}

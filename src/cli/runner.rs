use std::fs;

use clap::CommandFactory;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use watermark::io::is_supported_image;
use watermark::{WatermarkRequest, Watermarker, process_directory_with};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // a second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);
    debug!("Arguments: {:?}", args);

    let Some(input) = args.input.clone() else {
        warn!("Please specify an input image file or directory");
        CliArgs::command().print_help()?;
        return Ok(());
    };

    // every flag is checked before any image is touched
    let params = args.to_params().map_err(AppError::from)?;
    debug!("Watermark parameters: {:?}", params);

    let metadata = fs::metadata(&input).map_err(|source| AppError::InputNotFound {
        path: input.clone(),
        source,
    })?;

    let mut watermarker = match args.seed {
        Some(seed) => Watermarker::with_seed(params.font.as_deref(), seed),
        None => Watermarker::new(params.font.as_deref()),
    };

    if metadata.is_dir() {
        let report =
            process_directory_with(&mut watermarker, &input, args.output.as_deref(), &params)
                .map_err(AppError::from)?;
        debug!("Batch report: {:?}", report);
    } else {
        if !is_supported_image(&input) {
            return Err(AppError::NotAnImage { path: input }.into());
        }

        let request = WatermarkRequest::new(input, args.output.clone(), params);
        let written = watermarker
            .watermark_file(&request)
            .map_err(AppError::from)?;
        info!("Successfully processed: {:?} -> {:?}", request.source, written);
    }

    Ok(())
}

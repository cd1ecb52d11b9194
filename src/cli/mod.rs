use anyhow::Result;
use log::info;

use crate::batch::Batch;
use crate::tool::Exiftool;

mod args;
/// Logging setup
pub mod logging;

pub use args::Args;

/// Main exifscrub entrypoint.
pub fn main() -> Result<()> {
    with_custom_args(args::parse_args())
}

/// Runs exifscrub with pre-parsed arguments.
pub fn with_custom_args(args: Args) -> Result<()> {
    logging::setup_logger(args.verbose, env!("CARGO_PKG_NAME"))?;
    info!("Parsed arguments:\n{:#?}", &args);

    let tool = Exiftool::locate()?;

    let report = Batch::new(&tool, args.mode(), args.preview).run(&args.files);

    println!("{}", report.summary(args.preview));

    Ok(())
}

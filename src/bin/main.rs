use anyhow::Result;
use exifscrub::cli;

fn main() -> Result<()> {
    cli::main()
}

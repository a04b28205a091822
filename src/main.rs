use anyhow::Result;

fn main() -> Result<()> {
    let args = resub::cli::parse();
    resub::app::run(args)
}

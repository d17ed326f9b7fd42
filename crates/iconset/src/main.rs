use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    cli::logging::init(args.default_level());
    cli::run(args)
}

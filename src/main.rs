mod cli;

use clap::Parser;
use cli::args::Cli;
use cli::dispatch::handle;
use conndial_rs::logger::setup_logger;

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);
    handle(cli);
}

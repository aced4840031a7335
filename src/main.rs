use std::process;
use clap::Parser;
use colored::Colorize;
use dotenv::dotenv;

use ec_tools::Opts;

fn main()
{
    env_logger::init();
    dotenv().ok();
    let options = Opts::parse();

    if let Err(error) = ec_tools::run(options) {
        eprintln!("{} {:#}", "ERROR:".red(), error);
        process::exit(1);
    }
}

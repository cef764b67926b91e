mod cli;

use cli::commands::Command;
use cli::Teeko;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    Teeko::from_args().execute();
}

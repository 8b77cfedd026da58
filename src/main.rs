mod atlas;
mod corpus;
mod image;
mod options;

use std::process;

use structopt::StructOpt;

use crate::options::Options;

fn main() {
    env_logger::init();

    let options = Options::from_args();

    match atlas::generate(&options) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

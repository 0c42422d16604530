use clap::Parser;

use create_security_txt::cli;
use create_security_txt::cli::Cli;
use create_security_txt::document;

fn main() -> () {
    let flags = Cli::parse();
    let now = chrono::Utc::now();

    match document::render(&flags, now) {
        Ok(document) => println!("{}", document),
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!();
            cli::print_usage_to_stderr();
            std::process::exit(2);
        }
    }
}

//! `version` subcommand

pub fn banner() -> String {
    format!("Delsla v{}", env!("CARGO_PKG_VERSION"))
}

pub fn run() {
    println!("{}", banner());
}

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("basex: {e}");
        std::process::exit(1);
    }
}

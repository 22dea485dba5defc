fn main() {
    if let Err(error) = gitdeck_cli::run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

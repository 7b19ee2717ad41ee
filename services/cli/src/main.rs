fn main() {
    if let Err(err) = esg_scorecard_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

use tracing::Level;

// Logs go to stderr as JSON lines so they never mix with the prompts on stdout.
pub fn setup_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

pub fn level_for(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    }
}

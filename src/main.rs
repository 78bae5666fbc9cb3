use clap::Parser;
use patternbook::cli::args::Cli;
use patternbook::cli::commands::execute_command;
use patternbook::cli::output;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Map the `-d` count to a level. Logs go to stderr so demo output stays clean.
fn verbosity_level(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn setup_logging(count: u8) {
    let level = verbosity_level(count);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .without_time()
        .init();
    tracing::debug!(%level, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternbook::util::testing;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup();
    }

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_debug_flags_when_counting_then_caps_at_trace() {
        assert_eq!(verbosity_level(0), LevelFilter::WARN);
        assert_eq!(verbosity_level(2), LevelFilter::DEBUG);
        assert_eq!(verbosity_level(7), LevelFilter::TRACE);
    }

    #[test]
    fn given_run_without_names_when_parsing_then_requires_all() {
        assert!(Cli::try_parse_from(["patternbook", "run"]).is_err());
        assert!(Cli::try_parse_from(["patternbook", "run", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["patternbook", "run", "state", "--all"]).is_err());
    }
}

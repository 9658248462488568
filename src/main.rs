use taskflow::commands::Cli;
use taskflow::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logs only when asked for; otherwise messages go straight to the terminal
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskflow=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    Cli::menu()
}

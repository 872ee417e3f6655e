//! speech-recognize CLI entry point

use std::process::ExitCode;

use clap::Parser;

use speech_recognize::cli::{
    app::{init_tracing, load_merged_config, run_recognize, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use speech_recognize::infrastructure::speech::install_crypto_provider;
use speech_recognize::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Must run before any TLS configuration is built
    install_crypto_provider();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                EXIT_USAGE_ERROR
            } else {
                // --help and --version
                0
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let options = match cli.resolve() {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let config = load_merged_config().await;
    init_tracing(&config);

    run_recognize(options, &config).await
}

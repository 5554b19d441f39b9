use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    lazy_token_cli::run()
}

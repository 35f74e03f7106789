mod app;
mod folder;
mod general;
mod key;
mod output;


use clap::Parser;

/// Maps the error tiers of the library to process exit codes
fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    if err.is::<general::Unreachable>() {
        return exitcode::UNAVAILABLE;
    }
    match err.downcast_ref::<keyvault::Error>() {
        Some(inner) if inner.is_auth() => exitcode::NOPERM,
        Some(inner) if inner.is_not_found() => exitcode::DATAERR,
        Some(_) => exitcode::UNAVAILABLE,
        None => exitcode::CONFIG,
    }
}

#[tokio::main]
async fn main() {
    let cmd = app::Command::parse();
    cmd.set_log_level();

    if let Err(err) = cmd.execute().await {
        tracing::debug!("command failed: {err:?}");
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

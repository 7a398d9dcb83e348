//! Thin entrypoint delegating to [`gpr_cli::run`].

use std::process;

#[tokio::main]
async fn main() {
    let exit_code = gpr_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}

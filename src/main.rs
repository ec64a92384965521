use std::process::ExitCode;

use estoque_launcher::errors::{get_exit_code, EXIT_ERROR};

/// Grace period after an interrupt before force-exiting (seconds). The
/// child receives the same interrupt as part of the foreground process
/// group; we wait for it so its exit code can be mirrored.
const SHUTDOWN_GRACE_SECS: u64 = 10;

#[tokio::main]
async fn main() -> ExitCode {
    tokio::spawn(async {
        shutdown_signal().await;
        eprintln!("\nInterrupt received, waiting for the application to stop...");

        tokio::time::sleep(std::time::Duration::from_secs(SHUTDOWN_GRACE_SECS)).await;
        eprintln!("Shutdown grace period expired, forcing exit.");
        std::process::exit(130);
    });

    match estoque_launcher::cli::run().await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(EXIT_ERROR)),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(get_exit_code(&e))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to register SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
}

//! Sipboard terminal dashboard
//!
//! Reads commands from stdin, renders the board to stdout and polls the storage
//! service for changes in between, all on one thread.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sipboard::client::{ClientError, SipClient};
use sipboard::config::DashboardConfig;
use sipboard::dashboard::{Command, Dashboard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::from_env();

    // Diagnostics go to stderr so they never interleave with the board.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Connecting to {}", config.server_url);

    let client = SipClient::new(&config.server_url, config.request_timeout)?;
    let mut dashboard = Dashboard::new(client);

    println!("Type `help` for the list of commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match dashboard.poll().await {
                    Ok(true) => println!("{}", dashboard.render()),
                    Ok(false) => {}
                    Err(e) => tracing::warn!(error = %e, "poll failed"),
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                // A blank line redraws the board.
                let parsed = if line.trim().is_empty() {
                    Ok(Command::Show)
                } else {
                    Command::parse_line(&line)
                };
                let command = match parsed {
                    Ok(command) => command,
                    Err(e) => {
                        // Help and usage errors are rendered by clap.
                        println!("{}", e);
                        continue;
                    }
                };
                let quit = command == Command::Quit;

                match dashboard.execute(command).await {
                    Ok(message) => {
                        if !quit {
                            println!("{}", dashboard.render());
                        }
                        if !message.is_empty() {
                            println!("{}", message);
                        }
                    }
                    Err(ClientError::Validation(warning)) => println!("! {}", warning),
                    Err(e) => {
                        tracing::debug!(error = ?e, "action failed");
                        println!("Error: {}", e);
                    }
                }

                if quit {
                    break;
                }
            }
        }
    }

    Ok(())
}

//! Line-oriented driver: one JSON invocation per stdin line in, one JSON
//! envelope per stdout line out.
//!
//! ```text
//! {"session_id":"s1","tool":"set_user_id","arguments":{"new_user_id":"alice"}}
//! {"status":"success","report":"User ID has been set to alice."}
//! ```

use boutique_agent::config::Config;
use boutique_agent::envelope::ToolOutcome;
use boutique_agent::lifecycle::{setup_tracing, BoutiqueSystem, Invocation};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::from_env();
    info!(?config, "Starting boutique agent");
    let system = BoutiqueSystem::new(&config)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let outcome = match serde_json::from_str::<Invocation>(&line) {
            Ok(invocation) => system.dispatch(invocation).await,
            Err(e) => {
                warn!(error = %e, "Malformed invocation");
                ToolOutcome::error(format!("Malformed invocation: {e}"))
            }
        };

        let mut reply = serde_json::to_string(&outcome)?;
        reply.push('\n');
        stdout.write_all(reply.as_bytes()).await?;
        stdout.flush().await?;
    }

    system.shutdown().await?;
    Ok(())
}

use std::time::Duration;

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use tokio::time::sleep;
use tracing::debug;

use super::error::{MongoDaoError, MongoResult};

const PING_ATTEMPTS: u32 = 10;
const PING_BACKOFF_START: Duration = Duration::from_millis(250);
const PING_BACKOFF_CAP: Duration = Duration::from_secs(5);

/// Build a client and ping the target database until it answers, backing
/// off between attempts up to [`PING_BACKOFF_CAP`].
pub async fn establish_connection(
    options: &ClientOptions,
    database_name: &str,
) -> MongoResult<(Client, Database)> {
    let client = Client::with_options(options.clone())
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(database_name);

    let mut delay = PING_BACKOFF_START;
    let mut attempt = 1;
    loop {
        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => return Ok((client, database)),
            Err(source) => {
                if attempt >= PING_ATTEMPTS {
                    return Err(MongoDaoError::InitialPing {
                        attempts: attempt,
                        source,
                    });
                }
                debug!(attempt, error = %source, "initial ping failed, retrying");
                sleep(delay).await;
                delay = (delay * 2).min(PING_BACKOFF_CAP);
                attempt += 1;
            }
        }
    }
}

use std::{future::Future, sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    dao::{score_store::ScoreStore, storage::StorageError},
    state::SharedState,
};

const INITIAL_DELAY: Duration = Duration::from_millis(1_000);
const MAX_DELAY: Duration = Duration::from_secs(10);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_secs(5);
const MAX_RECONNECT_ATTEMPTS: u32 = 3;

/// Keep a score store installed on the shared state, reconnecting when the
/// backend drops and leaving the application in degraded mode while it is
/// unreachable.
pub async fn run<F, Fut>(state: SharedState, mut connect: F)
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Arc<dyn ScoreStore>, StorageError>> + Send,
{
    let mut delay = INITIAL_DELAY;

    loop {
        match connect().await {
            Ok(store) => {
                state.install_score_store(store.clone()).await;
                info!("storage connection established; leaving degraded mode");
                delay = INITIAL_DELAY;

                loop {
                    sleep(HEALTH_POLL_INTERVAL).await;
                    if store.health_check().await.is_ok() {
                        continue;
                    }

                    let mut attempt = 0;
                    let mut reconnect_delay = INITIAL_DELAY;
                    let mut reconnected = false;

                    while attempt < MAX_RECONNECT_ATTEMPTS {
                        match store.try_reconnect().await {
                            Ok(()) => {
                                info!("storage reconnection succeeded after health check failure");
                                reconnected = true;
                                break;
                            }
                            Err(err) => {
                                warn!(attempt, error = %err, "storage reconnect attempt failed");
                                attempt += 1;
                                sleep(reconnect_delay).await;
                                reconnect_delay = (reconnect_delay * 2).min(MAX_DELAY);
                            }
                        }
                    }

                    if !reconnected {
                        warn!("exhausted storage reconnect attempts; entering degraded mode");
                        state.clear_score_store().await;
                        break;
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "storage connection attempt failed");
            }
        }

        sleep(delay).await;
        delay = (delay * 2).min(MAX_DELAY);
    }
}

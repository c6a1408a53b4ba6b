use std::sync::{mpsc, Arc};
use std::thread;

use book_logging::book_error;

use addressbook_core::SearchId;

use crate::client::{AddressLookup, HttpAddressLookup, LookupSettings};
use crate::types::{AddressRecord, LookupError};

enum LookupCommand {
    Search {
        search_id: SearchId,
        postcode: String,
        street_number: String,
    },
}

/// Completion event for one search command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    SearchCompleted {
        search_id: SearchId,
        result: Result<Vec<AddressRecord>, LookupError>,
    },
}

/// Handle to the lookup thread. Commands go in over a channel; completion
/// events come back on the receiver returned by [`LookupHandle::new`].
#[derive(Clone)]
pub struct LookupHandle {
    cmd_tx: mpsc::Sender<LookupCommand>,
}

impl LookupHandle {
    /// Spawns the lookup thread with its own tokio runtime and returns the
    /// handle plus the event receiver.
    pub fn new(settings: LookupSettings) -> Result<(Self, mpsc::Receiver<LookupEvent>), LookupError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(HttpAddressLookup::new(settings)?);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    book_error!("failed to start lookup runtime: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    /// Starts a search; the matching `SearchCompleted` event carries the id.
    pub fn search(
        &self,
        search_id: SearchId,
        postcode: impl Into<String>,
        street_number: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(LookupCommand::Search {
            search_id,
            postcode: postcode.into(),
            street_number: street_number.into(),
        });
    }
}

async fn handle_command(
    client: &dyn AddressLookup,
    command: LookupCommand,
    event_tx: mpsc::Sender<LookupEvent>,
) {
    match command {
        LookupCommand::Search {
            search_id,
            postcode,
            street_number,
        } => {
            let result = client.search(&postcode, &street_number).await;
            let _ = event_tx.send(LookupEvent::SearchCompleted { search_id, result });
        }
    }
}

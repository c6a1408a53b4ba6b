use std::sync::mpsc;
use std::thread;

use addressbook_core::{Candidate, Effect, LookupFailure, Msg};
use addressbook_lookup::{AddressRecord, LookupError, LookupEvent, LookupHandle, LookupSettings};
use book_logging::{book_info, book_warn};

/// Executes core effects against the lookup collaborator and feeds
/// completion events back into the message queue.
pub struct EffectRunner {
    lookup: LookupHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: LookupSettings) -> Result<Self, LookupError> {
        let (lookup, events) = LookupHandle::new(settings)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { lookup })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartLookup {
                    search_id,
                    postcode,
                    house_number,
                } => {
                    book_info!(
                        "StartLookup search_id={} postcode={} house_number={}",
                        search_id,
                        postcode,
                        house_number
                    );
                    self.lookup.search(search_id, postcode, house_number);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<LookupEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let LookupEvent::SearchCompleted { search_id, result } = event;
            let result = match result {
                Ok(records) => Ok(records.into_iter().map(map_record).collect()),
                Err(err) => {
                    book_warn!("search {} failed: {}", search_id, err);
                    Err(LookupFailure {
                        message: err.errormessage,
                    })
                }
            };
            if msg_tx.send(Msg::LookupCompleted { search_id, result }).is_err() {
                break;
            }
        }
    });
}

fn map_record(record: AddressRecord) -> Candidate {
    Candidate {
        id: record.id,
        street: record.street,
        postcode: record.postcode,
        city: record.city,
        house_number: record.house_number,
    }
}

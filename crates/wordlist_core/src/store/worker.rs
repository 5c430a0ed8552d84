//! Dedicated writer thread that owns the SQLite connection.
//!
//! Commands arrive over a bounded channel and run one at a time, so two
//! submissions always complete in the order they were sent. Submitting only
//! blocks while `WORKER_QUEUE_CAPACITY` commands are already waiting.

use super::{MutationKind, StoreError, StoreFault, StoreResult, WordSnapshot};
use crate::live::LiveQuery;
use crate::model::word::Word;
use crate::repo::word_repo::{RepoResult, SqliteWordStore, WordStore};
use log::{error, info, warn};
use rusqlite::Connection;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

const WORKER_THREAD_NAME: &str = "wordlist-writer";
pub(crate) const WORKER_QUEUE_CAPACITY: usize = 256;

/// A write submitted to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Insert(Word),
    Update(Word),
    DeleteWord(Word),
    DeleteAll,
}

impl Mutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Insert(_) => MutationKind::Insert,
            Self::Update(_) => MutationKind::Update,
            Self::DeleteWord(_) => MutationKind::DeleteWord,
            Self::DeleteAll => MutationKind::DeleteAll,
        }
    }
}

enum WorkerCommand {
    Mutate(Mutation),
    /// Acknowledged once every earlier command has run.
    Flush(SyncSender<()>),
    Shutdown,
}

/// Handle to the writer thread. Dropping it stops and joins the thread.
pub(crate) struct WriteWorker {
    sender: SyncSender<WorkerCommand>,
    thread: Option<JoinHandle<()>>,
}

impl WriteWorker {
    pub(crate) fn spawn(
        conn: Connection,
        words: LiveQuery<WordSnapshot>,
        faults: LiveQuery<StoreFault>,
    ) -> StoreResult<Self> {
        let (sender, receiver) = mpsc::sync_channel(WORKER_QUEUE_CAPACITY);
        let thread = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || worker_main(conn, receiver, words, faults))
            .map_err(StoreError::WorkerSpawn)?;

        Ok(Self {
            sender,
            thread: Some(thread),
        })
    }

    /// Queues a mutation and returns immediately.
    pub(crate) fn submit(&self, mutation: Mutation) -> StoreResult<()> {
        self.sender
            .send(WorkerCommand::Mutate(mutation))
            .map_err(|_| StoreError::WorkerDisconnected)
    }

    /// Blocks until every previously submitted mutation has run.
    pub(crate) fn flush(&self) -> StoreResult<()> {
        let (ack_tx, ack_rx) = mpsc::sync_channel(1);
        self.sender
            .send(WorkerCommand::Flush(ack_tx))
            .map_err(|_| StoreError::WorkerDisconnected)?;
        ack_rx.recv().map_err(|_| StoreError::WorkerDisconnected)
    }
}

impl Drop for WriteWorker {
    fn drop(&mut self) {
        // Thread may already be gone.
        let _ = self.sender.send(WorkerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("event=word_worker module=store status=error error_code=worker_panicked");
            }
        }
    }
}

fn worker_main(
    conn: Connection,
    receiver: Receiver<WorkerCommand>,
    words: LiveQuery<WordSnapshot>,
    faults: LiveQuery<StoreFault>,
) {
    let store = match SqliteWordStore::try_new(&conn) {
        Ok(store) => store,
        Err(err) => {
            error!(
                "event=word_worker module=store status=error error_code=store_init_failed error={}",
                err
            );
            return;
        }
    };
    info!("event=word_worker module=store status=start");

    while let Ok(command) = receiver.recv() {
        match command {
            WorkerCommand::Mutate(mutation) => apply_mutation(&store, mutation, &words, &faults),
            WorkerCommand::Flush(ack) => {
                let _ = ack.send(());
            }
            WorkerCommand::Shutdown => break,
        }
    }

    info!("event=word_worker module=store status=stop");
}

fn apply_mutation(
    store: &SqliteWordStore<'_>,
    mutation: Mutation,
    words: &LiveQuery<WordSnapshot>,
    faults: &LiveQuery<StoreFault>,
) {
    let started_at = Instant::now();
    let kind = mutation.kind();

    if let Err(err) = run_mutation(store, &mutation) {
        error!(
            "event=word_mutation module=store status=error op={} duration_ms={} error={}",
            kind.as_str(),
            started_at.elapsed().as_millis(),
            err
        );
        faults.publish(StoreFault {
            operation: kind,
            committed: false,
            message: err.to_string(),
        });
        return;
    }

    match store.all_words() {
        Ok(rows) => {
            info!(
                "event=word_mutation module=store status=ok op={} rows={} duration_ms={}",
                kind.as_str(),
                rows.len(),
                started_at.elapsed().as_millis()
            );
            words.publish(Arc::new(rows));
        }
        Err(err) => {
            error!(
                "event=word_snapshot module=store status=error op={} duration_ms={} error={}",
                kind.as_str(),
                started_at.elapsed().as_millis(),
                err
            );
            faults.publish(StoreFault {
                operation: kind,
                committed: true,
                message: err.to_string(),
            });
        }
    }
}

fn run_mutation(store: &impl WordStore, mutation: &Mutation) -> RepoResult<()> {
    match mutation {
        Mutation::Insert(word) => store.insert(word).map(|_| ()),
        Mutation::Update(word) => store.update(word),
        Mutation::DeleteWord(word) => store.delete_word(word),
        Mutation::DeleteAll => store.delete_all().map(|_| ()),
    }
}

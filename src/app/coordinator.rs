//! The coordinator task owning the shelf state.
//!
//! # Concurrency model
//!
//! One spawned task owns [`ShelfState`] and is its only writer. Intents and
//! fetch completions flow through a single mpsc channel, so every mutation
//! is serialized through [`handle_event`] in arrival order. Catalog calls
//! run in their own tasks inside a [`JoinSet`] and marshal their results
//! back onto the channel; they never touch state directly.
//!
//! Dropping the [`ShelfCoordinator`] handle aborts the owner task, which
//! drops the `JoinSet` and aborts every outstanding fetch with it; no
//! completion can mutate state after the consuming side is gone.
//!
//! # State stream
//!
//! Snapshots publish on a watch channel. A new subscriber sees the current
//! state immediately, then every subsequent change in mutation order.

use crate::app::effects::Effect;
use crate::app::handler::{handle_event, Event, Intent, FIRST_PAGE};
use crate::app::state::ShelfState;
use crate::domain::{GetBookDetailUseCase, ListBooksUseCase};
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio_stream::wrappers::WatchStream;

/// Handle to the shelf screen's state machine.
///
/// Cheap to interrogate: [`dispatch`](Self::dispatch) enqueues an intent
/// without blocking, [`subscribe`](Self::subscribe) hands out an independent
/// state receiver. The backing task lives until the handle is dropped.
pub struct ShelfCoordinator {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<ShelfState>,
    runner: JoinHandle<()>,
}

impl ShelfCoordinator {
    /// Spawns the coordinator task around the two fetch use cases.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(list_books: ListBooksUseCase, book_detail: GetBookDetailUseCase) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ShelfState::default());

        let runner = tokio::spawn(run(
            events_rx,
            events_tx.clone(),
            state_tx,
            list_books,
            book_detail,
        ));

        Self {
            events: events_tx,
            state: state_rx,
            runner,
        }
    }

    /// Enqueues one intent for processing.
    ///
    /// Intents are consumed exactly once, in dispatch order.
    pub fn dispatch(&self, intent: Intent) {
        if self.events.send(Event::Intent(intent)).is_err() {
            tracing::warn!("intent dropped, coordinator task is gone");
        }
    }

    /// Returns a receiver over state snapshots.
    ///
    /// The receiver immediately holds the current state (the default state
    /// if nothing was dispatched yet) and observes every later change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ShelfState> {
        self.state.clone()
    }

    /// Returns the state as an async [`Stream`](tokio_stream::Stream) of
    /// snapshots, starting with the current one.
    #[must_use]
    pub fn state_stream(&self) -> WatchStream<ShelfState> {
        WatchStream::new(self.state.clone())
    }
}

impl Drop for ShelfCoordinator {
    fn drop(&mut self) {
        self.runner.abort();
    }
}

async fn run(
    mut events: mpsc::UnboundedReceiver<Event>,
    events_tx: mpsc::UnboundedSender<Event>,
    state_tx: watch::Sender<ShelfState>,
    list_books: ListBooksUseCase,
    book_detail: GetBookDetailUseCase,
) {
    let mut state = ShelfState::default();
    let mut fetches = JoinSet::new();

    while let Some(event) = events.recv().await {
        let (changed, effects) = handle_event(&mut state, event);

        if changed {
            state_tx.send_replace(state.clone());
        }

        for effect in effects {
            start_fetch(&mut fetches, effect, &events_tx, &list_books, &book_detail);
        }

        // Reap finished fetches so the set doesn't accumulate.
        while fetches.try_join_next().is_some() {}
    }
}

fn start_fetch(
    fetches: &mut JoinSet<()>,
    effect: Effect,
    events: &mpsc::UnboundedSender<Event>,
    list_books: &ListBooksUseCase,
    book_detail: &GetBookDetailUseCase,
) {
    match effect {
        Effect::FetchFirstPage => {
            let use_case = list_books.clone();
            let events = events.clone();
            fetches.spawn(async move {
                let outcome = use_case.execute(FIRST_PAGE).await;
                let _ = events.send(Event::ShelfLoaded { outcome });
            });
        }

        Effect::FetchPage { page } => {
            let use_case = list_books.clone();
            let events = events.clone();
            fetches.spawn(async move {
                let outcome = use_case.execute(page).await;
                let _ = events.send(Event::MoreLoaded { page, outcome });
            });
        }

        Effect::FetchDetail { key, token } => {
            let use_case = book_detail.clone();
            let events = events.clone();
            fetches.spawn(async move {
                let outcome = use_case.execute(&key).await;
                let _ = events.send(Event::DetailLoaded { token, outcome });
            });
        }
    }
}

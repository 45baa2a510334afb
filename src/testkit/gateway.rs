//! Scripted gateway doubles.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Aposta, NewBet};
use crate::error::Result;
use crate::port::outbound::{BetGateway, ListFilter};

/// Queued responses for each gateway operation, consumed in order.
#[derive(Debug, Default)]
pub struct Script {
    lists: VecDeque<Result<Vec<Aposta>>>,
    gets: VecDeque<Result<Aposta>>,
    places: VecDeque<Result<Option<Aposta>>>,
}

impl Script {
    /// Script only `list` responses.
    #[must_use]
    pub fn lists(responses: impl IntoIterator<Item = Result<Vec<Aposta>>>) -> Self {
        Self::default().with_lists(responses)
    }

    #[must_use]
    pub fn with_lists(mut self, responses: impl IntoIterator<Item = Result<Vec<Aposta>>>) -> Self {
        self.lists.extend(responses);
        self
    }

    #[must_use]
    pub fn with_gets(mut self, responses: impl IntoIterator<Item = Result<Aposta>>) -> Self {
        self.gets.extend(responses);
        self
    }

    #[must_use]
    pub fn with_places(
        mut self,
        responses: impl IntoIterator<Item = Result<Option<Aposta>>>,
    ) -> Self {
        self.places.extend(responses);
        self
    }
}

/// A [`BetGateway`] that replays a [`Script`] and records every call.
///
/// Call counters let tests assert the no-network-call properties without
/// any HTTP machinery.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    script: Mutex<Script>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    place_calls: AtomicUsize,
    last_filter: Mutex<Option<ListFilter>>,
    last_get_id: Mutex<Option<String>>,
    last_placed: Mutex<Option<NewBet>>,
}

impl RecordingGateway {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script: Mutex::new(script),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn place_calls(&self) -> usize {
        self.place_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_filter(&self) -> Option<ListFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    #[must_use]
    pub fn last_get_id(&self) -> Option<String> {
        self.last_get_id.lock().unwrap().clone()
    }

    #[must_use]
    pub fn last_placed(&self) -> Option<NewBet> {
        self.last_placed.lock().unwrap().clone()
    }
}

#[async_trait]
impl BetGateway for RecordingGateway {
    async fn list(&self, filter: &ListFilter) -> Result<Vec<Aposta>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        self.script
            .lock()
            .unwrap()
            .lists
            .pop_front()
            .expect("scripted gateway ran out of `list` responses")
    }

    async fn get(&self, id: &str) -> Result<Aposta> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_get_id.lock().unwrap() = Some(id.to_string());
        self.script
            .lock()
            .unwrap()
            .gets
            .pop_front()
            .expect("scripted gateway ran out of `get` responses")
    }

    async fn place(&self, bet: &NewBet) -> Result<Option<Aposta>> {
        self.place_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_placed.lock().unwrap() = Some(bet.clone());
        self.script
            .lock()
            .unwrap()
            .places
            .pop_front()
            .expect("scripted gateway ran out of `place` responses")
    }
}

use crate::api::PlacesApi;
use crate::cancel::CancelToken;
use crate::error::ApiError;
use crate::models::Place;

/// A full-list replacement that has been applied locally and still needs to be
/// sent to the server.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite {
    generation: u64,
    snapshot: Vec<Place>,
    places: Vec<Place>,
}

impl PendingWrite {
    /// The list to send.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// The list as it stood immediately before the mutation.
    pub fn snapshot(&self) -> &[Place] {
        &self.snapshot
    }
}

/// Handle for an in-flight load of the user's selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    writes_at_start: u64,
}

/// The user's selected places, kept in sync with the server optimistically.
///
/// Every mutation is applied locally first and returns a [`PendingWrite`].
/// The caller sends it and hands the outcome back to [`finish_write`], which
/// restores the pre-mutation snapshot on failure. When writes overlap the
/// last-started one owns the list: an older failure only records its error.
/// Once no write is left in flight, a failure falls back to the last list the
/// server is known to hold.
///
/// [`finish_write`]: SelectionController::finish_write
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    places: Vec<Place>,
    is_loading: bool,
    load_error: Option<String>,
    update_error: Option<String>,
    pending_deletion: Option<String>,
    write_generation: u64,
    load_generation: u64,
    /// Last list the server acknowledged or returned, and the write that produced it.
    confirmed: Vec<Place>,
    confirmed_generation: u64,
    in_flight: usize,
    cancel: CancelToken,
}

impl SelectionController {
    pub fn new(cancel: CancelToken) -> Self {
        SelectionController {
            cancel,
            ..Self::default()
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Error from the initial fetch; the page shows it in place of the list.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Error from the most recent failed mutation; shown as a dismissible notice.
    pub fn update_error(&self) -> Option<&str> {
        self.update_error.as_deref()
    }

    pub fn clear_update_error(&mut self) {
        self.update_error = None;
    }

    pub fn contains(&self, place_id: &str) -> bool {
        self.places.iter().any(|p| p.id == place_id)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.is_loading = true;
        LoadTicket {
            generation: self.load_generation,
            writes_at_start: self.write_generation,
        }
    }

    /// Apply a load result. Returns `false` when the result was stale and
    /// ignored.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Place>, ApiError>,
    ) -> bool {
        if self.cancel.is_cancelled() || ticket.generation != self.load_generation {
            return false;
        }
        self.is_loading = false;

        // A mutation made while loading owns the list, success or failure
        let superseded = ticket.writes_at_start != self.write_generation;
        match result {
            Ok(places) => {
                if self.confirmed_generation <= ticket.writes_at_start {
                    self.confirmed = places.clone();
                }
                if superseded {
                    return false;
                }
                self.places = places;
                self.load_error = None;
            }
            Err(_) if superseded => return false,
            Err(e) => {
                self.load_error = Some(e.to_string());
            }
        }
        true
    }

    /// Prepend `place` unless it is already selected.
    pub fn select(&mut self, place: Place) -> Option<PendingWrite> {
        if self.contains(&place.id) {
            return None;
        }
        let snapshot = self.places.clone();
        self.places.insert(0, place);
        Some(self.pending(snapshot))
    }

    /// Drop `place_id` from the list if present.
    pub fn remove(&mut self, place_id: &str) -> Option<PendingWrite> {
        if !self.contains(place_id) {
            return None;
        }
        let snapshot = self.places.clone();
        self.places.retain(|p| p.id != place_id);
        Some(self.pending(snapshot))
    }

    fn pending(&mut self, snapshot: Vec<Place>) -> PendingWrite {
        self.write_generation += 1;
        self.in_flight += 1;
        PendingWrite {
            generation: self.write_generation,
            snapshot,
            places: self.places.clone(),
        }
    }

    /// Reconcile the server's answer to a write.
    pub fn finish_write(&mut self, pending: PendingWrite, result: Result<(), ApiError>) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(()) => {
                if pending.generation > self.confirmed_generation {
                    self.confirmed_generation = pending.generation;
                    self.confirmed = pending.places;
                }
            }
            Err(e) => {
                self.update_error = Some(e.to_string());
                if self.in_flight == 0 {
                    self.places = self.confirmed.clone();
                } else if pending.generation == self.write_generation {
                    self.places = pending.snapshot;
                }
            }
        }
    }

    pub fn pending_deletion(&self) -> Option<&str> {
        self.pending_deletion.as_deref()
    }

    /// Enter the confirming state for `place_id`.
    pub fn start_remove(&mut self, place_id: impl Into<String>) {
        self.pending_deletion = Some(place_id.into());
    }

    pub fn cancel_remove(&mut self) {
        self.pending_deletion = None;
    }

    /// Leave the confirming state, removing the targeted place.
    pub fn confirm_remove(&mut self) -> Option<PendingWrite> {
        let place_id = self.pending_deletion.take()?;
        self.remove(&place_id)
    }

    /// Fetch the stored selection and apply it.
    pub async fn load<A: PlacesApi>(&mut self, api: &A) -> bool {
        let ticket = self.begin_load();
        let result = api.fetch_user_places().await;
        self.finish_load(ticket, result)
    }

    /// Select `place` and push the new list, rolling back on failure.
    pub async fn select_and_sync<A: PlacesApi>(&mut self, api: &A, place: Place) {
        if let Some(pending) = self.select(place) {
            let result = api.update_user_places(pending.places()).await.map(|_| ());
            self.finish_write(pending, result);
        }
    }

    /// Remove `place_id` and push the new list, rolling back on failure.
    pub async fn remove_and_sync<A: PlacesApi>(&mut self, api: &A, place_id: &str) {
        if let Some(pending) = self.remove(place_id) {
            let result = api.update_user_places(pending.places()).await.map(|_| ());
            self.finish_write(pending, result);
        }
    }
}

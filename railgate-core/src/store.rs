use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::model::{Passenger, Route, Ticket};
use crate::{ReservationError, ReservationResult};

const SECTION_A: &str = "A";
const SECTION_B: &str = "B";

/// In-memory reservation store for the single fixed route.
///
/// Two indexes cover the same set of live tickets: one by passenger email
/// (at most one active ticket per passenger) and one by seat section in
/// assignment order. A single lock guards both, so every operation observes
/// the indexes in a consistent state.
pub struct ReservationStore {
    route: Route,
    inner: Mutex<Indexes>,
}

#[derive(Default)]
struct Indexes {
    by_email: HashMap<String, Ticket>,
    by_section: HashMap<String, Vec<Ticket>>,
}

impl Indexes {
    /// Remove the ticket for `email` from `section`'s sequence, preserving
    /// the relative order of the remainder.
    fn detach(&mut self, section: &str, email: &str) {
        if let Some(seats) = self.by_section.get_mut(section) {
            if let Some(pos) = seats.iter().position(|t| t.passenger.email == email) {
                seats.remove(pos);
            }
        }
    }

    /// Detach any previous ticket for the passenger, then insert `ticket`
    /// into both indexes. Purchase and seat modification both go through
    /// here so the cross-index bookkeeping lives in one place.
    fn place(&mut self, ticket: Ticket) {
        if let Some(previous) = self.by_email.get(&ticket.passenger.email) {
            let old_section = previous.section.clone();
            self.detach(&old_section, &ticket.passenger.email);
        }
        self.by_section
            .entry(ticket.section.clone())
            .or_default()
            .push(ticket.clone());
        self.by_email.insert(ticket.passenger.email.clone(), ticket);
    }

    /// Two-way balancing over the fixed sections: "A" unless it is already
    /// strictly longer than "B", so ties favour "A". Labels introduced
    /// through seat modification never enter this comparison.
    fn next_section(&self) -> &'static str {
        let len = |s: &str| self.by_section.get(s).map_or(0, Vec::len);
        if len(SECTION_A) > len(SECTION_B) {
            SECTION_B
        } else {
            SECTION_A
        }
    }
}

impl ReservationStore {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            inner: Mutex::new(Indexes::default()),
        }
    }

    fn indexes(&self) -> MutexGuard<'_, Indexes> {
        self.inner.lock().expect("reservation store lock poisoned")
    }

    /// Issue a ticket on the fixed route, seated by the balancing rule.
    /// A repeat purchase for the same email replaces the previous ticket.
    pub fn purchase(&self, passenger: Passenger) -> Ticket {
        let mut indexes = self.indexes();
        let section = indexes.next_section().to_string();
        let ticket = Ticket {
            origin: self.route.origin.clone(),
            destination: self.route.destination.clone(),
            passenger,
            price: self.route.price,
            section,
        };
        indexes.place(ticket.clone());
        ticket
    }

    /// Look up the active ticket for an email.
    pub fn receipt(&self, email: &str) -> ReservationResult<Ticket> {
        self.indexes()
            .by_email
            .get(email)
            .cloned()
            .ok_or_else(|| ReservationError::NotFound(email.to_string()))
    }

    /// All tickets currently assigned to a section, in assignment order.
    /// A never-used label is an empty sequence, not an error.
    pub fn section_users(&self, section: &str) -> Vec<Ticket> {
        self.indexes()
            .by_section
            .get(section)
            .cloned()
            .unwrap_or_default()
    }

    /// Move a passenger's ticket to `new_section`. Any label is accepted,
    /// and re-insertion happens even when the label is unchanged, so the
    /// ticket always ends up last in the target sequence.
    pub fn modify_seat(&self, email: &str, new_section: &str) -> ReservationResult<Ticket> {
        let mut indexes = self.indexes();
        let mut ticket = indexes
            .by_email
            .get(email)
            .cloned()
            .ok_or_else(|| ReservationError::NotFound(email.to_string()))?;
        ticket.section = new_section.to_string();
        indexes.place(ticket.clone());
        Ok(ticket)
    }

    /// Drop a passenger's ticket from both indexes.
    pub fn remove(&self, email: &str) -> ReservationResult<()> {
        let mut indexes = self.indexes();
        let ticket = indexes
            .by_email
            .remove(email)
            .ok_or_else(|| ReservationError::NotFound(email.to_string()))?;
        indexes.detach(&ticket.section, email);
        Ok(())
    }
}

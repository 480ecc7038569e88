//! Mapping between the domain model and the wire types.

use railgate_core::{Passenger, Ticket};
use railgate_proto::ticketing;

pub fn passenger_from_proto(user: ticketing::User) -> Passenger {
    Passenger {
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
    }
}

pub fn ticket_to_proto(ticket: &Ticket) -> ticketing::Ticket {
    ticketing::Ticket {
        origin: ticket.origin.clone(),
        destination: ticket.destination.clone(),
        user: Some(ticketing::User {
            first_name: ticket.passenger.first_name.clone(),
            last_name: ticket.passenger.last_name.clone(),
            email: ticket.passenger.email.clone(),
        }),
        price: ticket.price,
        seat: ticket.section.clone(),
    }
}

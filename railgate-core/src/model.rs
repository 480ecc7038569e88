use serde::{Deserialize, Serialize};

/// A traveller, keyed by email. Names are descriptive only; the email is the
/// sole identity across all store operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Passenger {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// The single route and fare every ticket is issued against. Fixed at store
/// construction; never an input to purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub price: f64,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            origin: "London".to_string(),
            destination: "France".to_string(),
            price: 20.0,
        }
    }
}

/// One passenger's reservation on the fixed route. The section label is an
/// open string set; the balancer only ever produces "A" or "B" but seat
/// modification may install any label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: String,
    pub destination: String,
    pub passenger: Passenger,
    pub price: f64,
    pub section: String,
}

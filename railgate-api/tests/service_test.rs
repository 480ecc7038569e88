use std::sync::Arc;

use railgate_api::TicketGrpc;
use railgate_core::{ReservationStore, Route};
use railgate_proto::ticketing::ticket_service_server::TicketService;
use railgate_proto::ticketing::{
    ModifySeatRequest, PurchaseRequest, ReceiptRequest, RemoveUserRequest, SectionRequest, User,
};
use tonic::{Code, Request};

fn service() -> TicketGrpc {
    TicketGrpc::new(Arc::new(ReservationStore::new(Route::default())))
}

fn user(first: &str, last: &str, email: &str) -> User {
    User {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_purchase_and_receipt_flow() {
    let service = service();

    let response = service
        .purchase_ticket(Request::new(PurchaseRequest {
            user: Some(user("Ravi", "Gupta", "ravi.gupta@example.com")),
        }))
        .await
        .unwrap();
    let purchased = response.into_inner().ticket.unwrap();
    assert_eq!(purchased.origin, "London");
    assert_eq!(purchased.destination, "France");
    assert_eq!(purchased.price, 20.0);
    assert_eq!(purchased.seat, "A");

    let receipt = service
        .get_receipt(Request::new(ReceiptRequest {
            email: "ravi.gupta@example.com".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .ticket
        .unwrap();
    assert_eq!(receipt, purchased);
}

#[tokio::test]
async fn test_purchase_without_user_is_invalid_argument() {
    let service = service();

    let status = service
        .purchase_ticket(Request::new(PurchaseRequest { user: None }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_receipt_for_unknown_email_is_not_found() {
    let service = service();

    let status = service
        .get_receipt(Request::new(ReceiptRequest {
            email: "nobody@example.com".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("nobody@example.com"));
}

#[tokio::test]
async fn test_section_listing_follows_balancing() {
    let service = service();

    for (n, email) in ["u1@x.com", "u2@x.com", "u3@x.com", "u4@x.com"].into_iter().enumerate() {
        service
            .purchase_ticket(Request::new(PurchaseRequest {
                user: Some(user("First", &format!("Last{n}"), email)),
            }))
            .await
            .unwrap();
    }

    let section_a = service
        .get_section_users(Request::new(SectionRequest {
            section: "A".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .tickets;
    let emails_a: Vec<_> = section_a
        .iter()
        .map(|t| t.user.as_ref().unwrap().email.clone())
        .collect();
    assert_eq!(emails_a, vec!["u1@x.com", "u3@x.com"]);

    // A label nobody was ever assigned to is an empty list, not an error.
    let section_z = service
        .get_section_users(Request::new(SectionRequest {
            section: "Z".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .tickets;
    assert!(section_z.is_empty());
}

#[tokio::test]
async fn test_modify_seat_moves_ticket() {
    let service = service();

    service
        .purchase_ticket(Request::new(PurchaseRequest {
            user: Some(user("Ravi", "Gupta", "ravi.gupta@example.com")),
        }))
        .await
        .unwrap();

    let modified = service
        .modify_seat(Request::new(ModifySeatRequest {
            email: "ravi.gupta@example.com".to_string(),
            new_seat: "B".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .ticket
        .unwrap();
    assert_eq!(modified.seat, "B");

    let section_a = service
        .get_section_users(Request::new(SectionRequest {
            section: "A".to_string(),
        }))
        .await
        .unwrap()
        .into_inner()
        .tickets;
    assert!(section_a.is_empty());
}

#[tokio::test]
async fn test_remove_user_then_receipt_is_not_found() {
    let service = service();

    service
        .purchase_ticket(Request::new(PurchaseRequest {
            user: Some(user("Ravi", "Gupta", "ravi.gupta@example.com")),
        }))
        .await
        .unwrap();

    let removed = service
        .remove_user(Request::new(RemoveUserRequest {
            email: "ravi.gupta@example.com".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert!(removed.success);

    let status = service
        .get_receipt(Request::new(ReceiptRequest {
            email: "ravi.gupta@example.com".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    // Removing again reports NOT_FOUND through the status, not the flag.
    let status = service
        .remove_user(Request::new(RemoveUserRequest {
            email: "ravi.gupta@example.com".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
    assert!(status.message().contains("ravi.gupta@example.com"));
}

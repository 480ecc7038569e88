use std::sync::Arc;

use railgate_core::{ReservationError, ReservationStore};
use railgate_proto::ticketing::ticket_service_server::TicketService;
use railgate_proto::ticketing::{
    ModifySeatRequest, ModifySeatResponse, PurchaseRequest, PurchaseResponse, ReceiptRequest,
    ReceiptResponse, RemoveUserRequest, RemoveUserResponse, SectionRequest, SectionResponse,
};
use tonic::{Request, Response, Status};

use crate::convert;

/// gRPC facade over the reservation store: one call in, one response or
/// status out. All state lives in the store.
pub struct TicketGrpc {
    store: Arc<ReservationStore>,
}

impl TicketGrpc {
    pub fn new(store: Arc<ReservationStore>) -> Self {
        Self { store }
    }
}

fn status_from(err: ReservationError) -> Status {
    match err {
        ReservationError::NotFound(_) => Status::not_found(err.to_string()),
    }
}

#[tonic::async_trait]
impl TicketService for TicketGrpc {
    async fn purchase_ticket(
        &self,
        request: Request<PurchaseRequest>,
    ) -> Result<Response<PurchaseResponse>, Status> {
        let user = request
            .into_inner()
            .user
            .ok_or_else(|| Status::invalid_argument("user is required"))?;

        let ticket = self.store.purchase(convert::passenger_from_proto(user));
        tracing::info!(email = %ticket.passenger.email, section = %ticket.section, "ticket purchased");

        Ok(Response::new(PurchaseResponse {
            ticket: Some(convert::ticket_to_proto(&ticket)),
        }))
    }

    async fn get_receipt(
        &self,
        request: Request<ReceiptRequest>,
    ) -> Result<Response<ReceiptResponse>, Status> {
        let req = request.into_inner();
        let ticket = self.store.receipt(&req.email).map_err(status_from)?;

        Ok(Response::new(ReceiptResponse {
            ticket: Some(convert::ticket_to_proto(&ticket)),
        }))
    }

    async fn get_section_users(
        &self,
        request: Request<SectionRequest>,
    ) -> Result<Response<SectionResponse>, Status> {
        let req = request.into_inner();
        let tickets = self
            .store
            .section_users(&req.section)
            .iter()
            .map(convert::ticket_to_proto)
            .collect();

        Ok(Response::new(SectionResponse { tickets }))
    }

    async fn modify_seat(
        &self,
        request: Request<ModifySeatRequest>,
    ) -> Result<Response<ModifySeatResponse>, Status> {
        let req = request.into_inner();
        let ticket = self
            .store
            .modify_seat(&req.email, &req.new_seat)
            .map_err(status_from)?;
        tracing::info!(email = %req.email, section = %req.new_seat, "seat modified");

        Ok(Response::new(ModifySeatResponse {
            ticket: Some(convert::ticket_to_proto(&ticket)),
        }))
    }

    async fn remove_user(
        &self,
        request: Request<RemoveUserRequest>,
    ) -> Result<Response<RemoveUserResponse>, Status> {
        let req = request.into_inner();
        // Failure is signalled through the NOT_FOUND status alone; the
        // success flag on the response is always true.
        self.store.remove(&req.email).map_err(status_from)?;
        tracing::info!(email = %req.email, "user removed");

        Ok(Response::new(RemoveUserResponse { success: true }))
    }
}

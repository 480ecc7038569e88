//! Generated protobuf bindings for the ticketing gRPC contract.

pub mod ticketing {
    tonic::include_proto!("ticketing");
}

//! Demonstration client: walks one passenger through the full ticket
//! lifecycle against a running railgate server.

use railgate_proto::ticketing::ticket_service_client::TicketServiceClient;
use railgate_proto::ticketing::{
    ModifySeatRequest, PurchaseRequest, ReceiptRequest, RemoveUserRequest, SectionRequest, Ticket,
    User,
};
use tonic::transport::Channel;

const EMAIL: &str = "ravi.gupta@example.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr =
        std::env::var("RAILGATE_ADDR").unwrap_or_else(|_| "http://localhost:60051".to_string());
    let mut client = TicketServiceClient::connect(addr).await?;

    println!("=== 1. Purchasing Ticket ===");
    let purchased = client
        .purchase_ticket(PurchaseRequest {
            user: Some(User {
                first_name: "Ravi".to_string(),
                last_name: "Gupta".to_string(),
                email: EMAIL.to_string(),
            }),
        })
        .await?
        .into_inner();
    if let Some(ticket) = purchased.ticket {
        println!("Ticket purchased successfully!");
        print_ticket(&ticket);
    }

    println!("\n=== 2. Retrieving Receipt ===");
    let receipt = client
        .get_receipt(ReceiptRequest {
            email: EMAIL.to_string(),
        })
        .await?
        .into_inner();
    if let Some(ticket) = receipt.ticket {
        println!("Receipt retrieved:");
        print_ticket(&ticket);
    }

    println!("\n=== 3. Viewing Sections ===");
    print_section(&mut client, "A").await?;
    print_section(&mut client, "B").await?;

    println!("\n=== 4. Modifying Seat to B ===");
    let modified = client
        .modify_seat(ModifySeatRequest {
            email: EMAIL.to_string(),
            new_seat: "B".to_string(),
        })
        .await?
        .into_inner();
    if let Some(ticket) = modified.ticket {
        println!("Seat modified successfully!");
        print_ticket(&ticket);
    }

    println!("\n=== 5. Verifying Sections ===");
    print_section(&mut client, "A").await?;
    print_section(&mut client, "B").await?;

    println!("\n=== 6. Removing User ===");
    let removed = client
        .remove_user(RemoveUserRequest {
            email: EMAIL.to_string(),
        })
        .await?
        .into_inner();
    if removed.success {
        println!("User {EMAIL} removed successfully");
    }

    println!("\n=== 7. Verifying Deletion ===");
    match client
        .get_receipt(ReceiptRequest {
            email: EMAIL.to_string(),
        })
        .await
    {
        Err(status) => println!("{}", status.message()),
        Ok(_) => anyhow::bail!("unexpectedly found a receipt for a removed user"),
    }

    Ok(())
}

fn print_ticket(ticket: &Ticket) {
    if let Some(user) = &ticket.user {
        println!("  Name: {} {}", user.first_name, user.last_name);
    }
    println!("  From: {}", ticket.origin);
    println!("  To: {}", ticket.destination);
    println!("  Seat: {}", ticket.seat);
    println!("  Price: ${:.2}", ticket.price);
}

async fn print_section(
    client: &mut TicketServiceClient<Channel>,
    section: &str,
) -> anyhow::Result<()> {
    let response = client
        .get_section_users(SectionRequest {
            section: section.to_string(),
        })
        .await?
        .into_inner();
    println!("Users in Section {section}:");
    for ticket in response.tickets {
        if let Some(user) = ticket.user {
            println!("  Name: {} {}, Seat: {}", user.first_name, user.last_name, ticket.seat);
        }
    }
    Ok(())
}

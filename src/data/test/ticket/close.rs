use super::*;

/// Tests closing an open ticket.
///
/// Expected: Ok(true) once and the ticket stored as closed
#[tokio::test]
async fn closes_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ticket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let ticket = repo.create(1, 10, 20, Utc::now()).await?;
    assert_eq!(ticket.status, TicketStatus::Open);

    assert!(repo.close(10).await?);
    assert!(!repo.close(10).await?);

    let stored = repo.find_by_channel(10).await?.unwrap();
    assert_eq!(stored.status, TicketStatus::Closed);

    Ok(())
}

/// Tests that only open tickets count as the member's current ticket.
///
/// Expected: Ok(Some) while open, Ok(None) once closed
#[tokio::test]
async fn finds_open_ticket_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ticket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "1", "20").await?;
    let channel_id: u64 = ticket.channel_id.parse().unwrap();

    let repo = TicketRepository::new(db);
    assert!(repo.find_open_for_user(1, 20).await?.is_some());

    repo.close(channel_id).await?;
    assert!(repo.find_open_for_user(1, 20).await?.is_none());

    Ok(())
}

mod common;

use common::{corrective_draft, order, preventive_draft, world};
use domain_maintenance::exception::MaintenanceException;
use domain_maintenance::model::entity::order::CompletionState;
use domain_maintenance::model::entity::ticket::TicketStatus;
use domain_maintenance::service::TicketService;

#[tokio::test]
async fn a_second_open_ticket_of_the_same_type_is_rejected() {
    let world = world();
    world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let result = world.tickets.create(corrective_draft("CS1901"), false).await;
    assert!(matches!(
        result,
        Err(MaintenanceException::DuplicateActiveTicket { asset_tag, .. }) if asset_tag == "CS1901"
    ));
}

#[tokio::test]
async fn the_other_maintenance_type_needs_explicit_confirmation() {
    let world = world();
    let corrective = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let unconfirmed = world
        .tickets
        .create(preventive_draft("CS1901", vec![]), false)
        .await;
    assert!(matches!(
        unconfirmed,
        Err(MaintenanceException::CrossTypeConfirmationRequired { existing_ticket_id, .. })
            if existing_ticket_id == corrective.id
    ));

    // Confirmed, the asset is tracked by two independent tickets.
    world.tickets.create(preventive_draft("CS1901", vec![]), true).await.unwrap();
    assert_eq!(world.tickets.open_tickets_by_asset("CS1901").await.unwrap().len(), 2);
}

#[tokio::test]
async fn a_released_asset_can_be_ticketed_again() {
    let world = world();
    let first = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    // Completed tickets stay as history and do not block new ones.
    let mut completed = world.db.tickets.get(&first.id).unwrap().clone();
    completed.status = TicketStatus::Completed;
    world.db.tickets.insert(first.id, completed);

    world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();
}

#[tokio::test]
async fn manual_edits_cannot_complete_a_ticket() {
    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let result = world.tickets.set_status(ticket.id, TicketStatus::Completed).await;
    assert!(matches!(
        result,
        Err(MaintenanceException::ReleaseRequired { ticket_id }) if ticket_id == ticket.id
    ));

    world.tickets.set_status(ticket.id, TicketStatus::AwaitingParts).await.unwrap();
    assert_eq!(
        world.db.tickets.get(&ticket.id).unwrap().status,
        TicketStatus::AwaitingParts
    );
}

#[tokio::test]
async fn a_completed_ticket_is_read_only() {
    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();
    let mut completed = world.db.tickets.get(&ticket.id).unwrap().clone();
    completed.status = TicketStatus::Completed;
    world.db.tickets.insert(ticket.id, completed);

    let result = world.tickets.set_status(ticket.id, TicketStatus::InProgress).await;
    assert!(matches!(
        result,
        Err(MaintenanceException::TicketAlreadyCompleted { .. })
    ));
}

#[tokio::test]
async fn editing_an_unknown_order_is_reported() {
    let world = world();
    let ticket = world
        .tickets
        .create(
            preventive_draft("CS1901", vec![order("OM-1", CompletionState::Pending)]),
            false,
        )
        .await
        .unwrap();

    let result = world
        .tickets
        .set_order_completion(
            ticket.id,
            domain_maintenance::model::vo::OrderCompletionUpdate {
                order_number: "OM-9".to_owned(),
                completion_state: CompletionState::CompletedThisShift,
                not_completed_reason: None,
                not_completed_recommendation: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(MaintenanceException::NoSuchOrder { order_number, .. }) if order_number == "OM-9"
    ));
}

#[tokio::test]
async fn bulk_import_keeps_good_rows_and_reports_bad_ones() {
    let world = world();
    world.tickets.create(preventive_draft("LT0402", vec![]), false).await.unwrap();

    let report = world
        .tickets
        .bulk_import(vec![
            corrective_draft("CS1901"),
            // Duplicates a row accepted earlier in this same batch.
            corrective_draft("CS1901"),
            // Duplicates the preventive ticket already in the store.
            preventive_draft("LT0402", vec![]),
        ])
        .await
        .unwrap();

    assert_eq!(report.created.len(), 1);
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(
        report.failures[0].cause,
        MaintenanceException::DuplicateActiveTicket { .. }
    ));
    assert!(matches!(
        report.failures[1].cause,
        MaintenanceException::DuplicateActiveTicket { .. }
    ));
    assert_eq!(world.tickets.open_tickets_by_asset("CS1901").await.unwrap().len(), 1);
    assert_eq!(world.tickets.open_tickets().await.unwrap().len(), 2);
}

#[tokio::test]
async fn shift_activity_entries_upsert_by_shift_and_date() {
    use chrono::NaiveDate;
    use domain_maintenance::model::entity::ticket::ShiftActivityEntry;

    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();
    let entry = |activities: &str| ShiftActivityEntry {
        shift_letter: "A".to_owned(),
        date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        supervisor: "Silva".to_owned(),
        lead_tech: "Costa".to_owned(),
        activities: activities.to_owned(),
    };

    world.tickets.upsert_shift_activity(ticket.id, entry("oil change")).await.unwrap();
    world
        .tickets
        .upsert_shift_activity(ticket.id, entry("oil change + filters"))
        .await
        .unwrap();

    let stored = world.db.tickets.get(&ticket.id).unwrap().clone();
    assert_eq!(stored.shift_activity_log.len(), 1);
    assert_eq!(
        stored.shift_activity_log.iter().next().unwrap().activities,
        "oil change + filters"
    );
}

#[tokio::test]
async fn order_edits_land_on_the_live_ticket() {
    let world = world();
    let ticket = world
        .tickets
        .create(
            preventive_draft("CS1901", vec![order("OM-1", CompletionState::Pending)]),
            false,
        )
        .await
        .unwrap();

    world
        .tickets
        .set_order_completion(
            ticket.id,
            domain_maintenance::model::vo::OrderCompletionUpdate {
                order_number: "OM-1".to_owned(),
                completion_state: CompletionState::NotCompleted,
                not_completed_reason: Some("no crane available".to_owned()),
                not_completed_recommendation: Some("book crane for next shift".to_owned()),
            },
        )
        .await
        .unwrap();

    let stored = world.db.tickets.get(&ticket.id).unwrap().clone();
    assert_eq!(
        stored.preventive_orders[0].completion_state,
        CompletionState::NotCompleted
    );
    assert_eq!(
        stored.preventive_orders[0].not_completed_reason.as_deref(),
        Some("no crane available")
    );
}

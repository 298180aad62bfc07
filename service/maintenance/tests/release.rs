mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{corrective_draft, order, preventive_draft, seed_worker, shift_context, world,
    world_with_shift};
use domain_maintenance::exception::MaintenanceException;
use domain_maintenance::model::entity::order::CompletionState;
use domain_maintenance::model::entity::release_record::{OutcomeClass, ReleaseStatus};
use domain_maintenance::model::entity::ticket::TicketStatus;
use domain_maintenance::model::vo::{AttachMode, ReleaseCommand};
use domain_maintenance::repository::AllocationRepo;
use domain_maintenance::service::{AllocationService, ReleaseService, TicketService};
use domain_schedule::model::entity::weekly_schedule::{
    PlannedOrder, ScheduleStatus, WeeklyScheduleEntry,
};
use uuid::Uuid;

fn release_command(ticket_id: Uuid) -> ReleaseCommand {
    ReleaseCommand {
        ticket_id,
        activities_performed: "lubrication and inspection".to_owned(),
    }
}

#[tokio::test]
async fn a_fully_done_checklist_releases_total() {
    let world = world();
    let worker = seed_worker(&world.db, "Souza");
    let ticket = world
        .tickets
        .create(
            preventive_draft(
                "CS1901",
                vec![
                    order("OM-1", CompletionState::CompletedThisShift),
                    order("OM-2", CompletionState::CompletedThisShift),
                ],
            ),
            false,
        )
        .await
        .unwrap();
    world.allocations.attach(worker, ticket.id, None).await.unwrap();

    let outcome = world.releases.release(release_command(ticket.id)).await.unwrap();

    assert_eq!(outcome.record.outcome_class, OutcomeClass::Total);
    assert_eq!(outcome.record.release_status, ReleaseStatus::Released);
    assert_eq!(outcome.record.orders_completed, vec!["OM-1", "OM-2"]);
    assert_eq!(outcome.record.allocated_worker_names, vec!["Souza"]);
    assert!(!outcome.replayed);

    let stored = world.db.tickets.get(&ticket.id).unwrap().clone();
    assert_eq!(stored.status, TicketStatus::Completed);
    // The transient per-shift markers became permanent on release.
    assert!(stored
        .preventive_orders
        .iter()
        .all(|el| el.completion_state == CompletionState::Completed));
    assert_eq!(stored.shift_activity_log.len(), 1);
    assert_eq!(stored.order_history_log.len(), 1);
}

#[tokio::test]
async fn a_ticket_without_checklist_releases_not_applicable() {
    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let outcome = world.releases.release(release_command(ticket.id)).await.unwrap();

    assert_eq!(outcome.record.outcome_class, OutcomeClass::NotApplicable);
    assert_eq!(outcome.record.release_status, ReleaseStatus::Released);
    assert!(outcome.record.orders_completed.is_empty());
}

#[tokio::test]
async fn an_unjustified_not_completed_order_blocks_the_release() {
    let world = world();
    let ticket = world
        .tickets
        .create(
            preventive_draft(
                "CS1901",
                vec![
                    order("OM-1", CompletionState::CompletedThisShift),
                    order("OM-2", CompletionState::NotCompleted),
                ],
            ),
            false,
        )
        .await
        .unwrap();

    let result = world.releases.release(release_command(ticket.id)).await;
    assert!(matches!(
        result,
        Err(MaintenanceException::IncompleteNotCompletedJustification { order_number })
            if order_number == "OM-2"
    ));
    assert_eq!(
        world.db.tickets.get(&ticket.id).unwrap().status,
        TicketStatus::AwaitingLabor
    );
}

#[tokio::test]
async fn a_justified_not_completed_order_releases_partial() {
    let world = world();
    let mut pending = order("OM-2", CompletionState::NotCompleted);
    pending.not_completed_reason = Some("no crane available".to_owned());
    pending.not_completed_recommendation = Some("book crane for next shift".to_owned());
    let ticket = world
        .tickets
        .create(
            preventive_draft(
                "CS1901",
                vec![order("OM-1", CompletionState::CompletedThisShift), pending],
            ),
            false,
        )
        .await
        .unwrap();

    let outcome = world.releases.release(release_command(ticket.id)).await.unwrap();

    assert_eq!(outcome.record.outcome_class, OutcomeClass::Partial);
    assert_eq!(
        outcome.record.release_status,
        ReleaseStatus::ReleasedWithPendingItems
    );
    assert_eq!(outcome.record.orders_not_completed.len(), 1);
    assert_eq!(outcome.record.orders_not_completed[0].reason, "no crane available");
}

#[tokio::test]
async fn activities_text_is_mandatory() {
    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let result = world
        .releases
        .release(ReleaseCommand {
            ticket_id: ticket.id,
            activities_performed: "  ".to_owned(),
        })
        .await;
    assert!(matches!(
        result,
        Err(MaintenanceException::MissingActivitiesPerformed)
    ));
}

#[tokio::test]
async fn releasing_outside_a_shift_fails() {
    let world = world_with_shift(None);
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let result = world.releases.release(release_command(ticket.id)).await;
    assert!(matches!(result, Err(MaintenanceException::NoActiveShift)));
}

#[tokio::test]
async fn releasing_one_ticket_resequences_the_workers_other_ranks() {
    let world = world();
    let worker = seed_worker(&world.db, "Souza");
    let first = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();
    let second = world.tickets.create(corrective_draft("LT0402"), false).await.unwrap();
    world.allocations.attach(worker, first.id, None).await.unwrap();
    world
        .allocations
        .attach(worker, second.id, Some(AttachMode::AddAsNextActivity))
        .await
        .unwrap();

    world.releases.release(release_command(first.id)).await.unwrap();

    let remaining = world.allocation_repo.get_by_worker_id(worker).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].ticket_id, second.id);
    assert_eq!(remaining[0].activity_rank, 1);
    assert!(world.allocation_repo.get_by_ticket_id(first.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn releasing_a_cross_type_asset_warns_about_the_other_ticket() {
    let world = world();
    let corrective = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();
    let preventive =
        world.tickets.create(preventive_draft("CS1901", vec![]), true).await.unwrap();

    let outcome = world.releases.release(release_command(corrective.id)).await.unwrap();

    let warning = outcome.partial_asset_warning.expect("expected a partial-asset warning");
    assert_eq!(warning.other_open_ticket_ids, vec![preventive.id]);

    // Each ticket closes through its own release; no merge.
    let outcome = world.releases.release(release_command(preventive.id)).await.unwrap();
    assert!(outcome.partial_asset_warning.is_none());
    assert_eq!(world.db.release_records.len(), 2);
}

#[tokio::test]
async fn a_second_release_replays_the_stored_record() {
    let world = world();
    let ticket = world.tickets.create(corrective_draft("CS1901"), false).await.unwrap();

    let first = world.releases.release(release_command(ticket.id)).await.unwrap();
    let second = world.releases.release(release_command(ticket.id)).await.unwrap();

    assert!(second.replayed);
    assert_eq!(second.record.id, first.record.id);
    assert_eq!(world.db.release_records.len(), 1);
}

#[tokio::test]
async fn a_replay_never_rewrites_the_record() {
    use domain_maintenance::mock::{
        MockAllocationRepo, MockReleaseRecordRepo, MockTicketRepo, MockWorkerRepo,
    };
    use domain_maintenance::model::entity::release_record::ReleaseRecord;
    use domain_maintenance::model::entity::EquipmentTicket;
    use domain_schedule::mock::MockWeeklyScheduleRepo;
    use infrastructure_memory::StaticShiftProvider;
    use service_maintenance::ReleaseServiceImpl;

    let mut ticket = EquipmentTicket::from(corrective_draft("CS1901"));
    ticket.status = TicketStatus::Completed;
    let ticket_id = ticket.id;
    let record = ReleaseRecord {
        id: Uuid::new_v4(),
        ticket_id,
        asset_tag: ticket.asset_tag.clone(),
        maintenance_type: ticket.maintenance_type,
        shift_letter: "A".to_owned(),
        released_at: chrono::Utc::now(),
        allocated_worker_names: vec![],
        activities_performed: "lubrication".to_owned(),
        orders_completed: vec![],
        orders_not_completed: vec![],
        outcome_class: OutcomeClass::NotApplicable,
        release_status: ReleaseStatus::Released,
        schedule_link_id: None,
    };
    let record_id = record.id;

    let mut ticket_repo = MockTicketRepo::new();
    ticket_repo.expect_get_by_id().return_once(move |_| Ok(ticket));
    let mut release_record_repo = MockReleaseRecordRepo::new();
    // No insert expectation: a rewrite would fail the mock.
    release_record_repo.expect_get_by_ticket_id().return_once(move |_| Ok(Some(record)));

    let service = ReleaseServiceImpl::builder()
        .ticket_repo(Arc::new(ticket_repo))
        .allocation_repo(Arc::new(MockAllocationRepo::new()))
        .worker_repo(Arc::new(MockWorkerRepo::new()))
        .release_record_repo(Arc::new(release_record_repo))
        .schedule_repo(Arc::new(MockWeeklyScheduleRepo::new()))
        .shift_provider(Arc::new(StaticShiftProvider::new(Some(shift_context()))))
        .build();

    let outcome = service.release(release_command(ticket_id)).await.unwrap();
    assert!(outcome.replayed);
    assert_eq!(outcome.record.id, record_id);
}

fn schedule_entry(asset_tag: &str, day: NaiveDate, order_numbers: &[&str]) -> WeeklyScheduleEntry {
    WeeklyScheduleEntry {
        id: Uuid::new_v4(),
        asset_tag: asset_tag.to_owned(),
        day,
        orders: order_numbers
            .iter()
            .map(|number| PlannedOrder {
                order_number: (*number).to_owned(),
                order_type: "lubrication".to_owned(),
                description: format!("order {number}"),
                status: ScheduleStatus::Pending,
            })
            .collect(),
        asset_status: ScheduleStatus::Pending,
    }
}

#[tokio::test]
async fn a_total_release_marks_the_linked_schedule_day_completed() {
    let world = world();
    let day = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    let entry = schedule_entry("CS1901", day, &["OM-1", "OM-2"]);
    let entry_id = entry.id;
    world.db.schedule_entries.insert(entry_id, entry);

    let mut draft = preventive_draft(
        "CS1901",
        vec![
            order("OM-1", CompletionState::CompletedThisShift),
            order("OM-2", CompletionState::CompletedThisShift),
        ],
    );
    draft.schedule_link_id = Some(entry_id);
    let ticket = world.tickets.create(draft, false).await.unwrap();

    world.releases.release(release_command(ticket.id)).await.unwrap();

    let entry = world.db.schedule_entries.get(&entry_id).unwrap().clone();
    assert_eq!(entry.asset_status, ScheduleStatus::Completed);
    assert!(entry.orders.iter().all(|el| el.status == ScheduleStatus::Completed));
}

#[tokio::test]
async fn a_partial_release_marks_the_linked_schedule_day_completed_partial() {
    let world = world();
    let day = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    let entry = schedule_entry("CS1901", day, &["OM-1", "OM-2"]);
    let entry_id = entry.id;
    world.db.schedule_entries.insert(entry_id, entry);

    let mut pending = order("OM-2", CompletionState::NotCompleted);
    pending.not_completed_reason = Some("missing part".to_owned());
    pending.not_completed_recommendation = Some("order the seal kit".to_owned());
    let mut draft = preventive_draft(
        "CS1901",
        vec![order("OM-1", CompletionState::CompletedThisShift), pending],
    );
    draft.schedule_link_id = Some(entry_id);
    let ticket = world.tickets.create(draft, false).await.unwrap();

    world.releases.release(release_command(ticket.id)).await.unwrap();

    let entry = world.db.schedule_entries.get(&entry_id).unwrap().clone();
    assert_eq!(entry.asset_status, ScheduleStatus::CompletedPartial);
}

#[tokio::test]
async fn a_dangling_schedule_link_is_ignored() {
    let world = world();
    let mut draft = preventive_draft(
        "CS1901",
        vec![order("OM-1", CompletionState::CompletedThisShift)],
    );
    draft.schedule_link_id = Some(Uuid::new_v4());
    let ticket = world.tickets.create(draft, false).await.unwrap();

    let outcome = world.releases.release(release_command(ticket.id)).await.unwrap();
    assert_eq!(outcome.record.outcome_class, OutcomeClass::Total);
}

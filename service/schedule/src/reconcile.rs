use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use domain_maintenance::model::entity::order::CompletionState;
use domain_maintenance::model::entity::{EquipmentTicket, ReleaseRecord};
use domain_maintenance::repository::{ReleaseRecordRepo, TicketRepo};
use domain_schedule::model::entity::weekly_schedule::PlannedOrder;
use domain_schedule::model::entity::{OrderTrackingRecord, WeeklyScheduleEntry};
use domain_schedule::model::vo::{
    OrderDisplayStatus, ReconcileSource, ReconciledOrder, ReconciledScheduleDay,
};
use domain_schedule::repository::{OrderTrackingRepo, WeeklyScheduleRepo};
use domain_schedule::service::ReconcileService;
use typed_builder::TypedBuilder;

/// Everything known about one asset's week, shared by the resolvers.
struct ReconcileContext {
    tracking: Vec<OrderTrackingRecord>,
    open_tickets: Vec<EquipmentTicket>,
    releases: Vec<ReleaseRecord>,
}

type Resolver = fn(&ReconcileContext, &PlannedOrder) -> Option<ReconciledOrder>;

/// Precedence, highest first; the first resolver with an answer wins.
const RESOLVERS: [Resolver; 3] = [resolve_tracking, resolve_live_ticket, resolve_release_record];

#[derive(TypedBuilder)]
pub struct ReconcileServiceImpl {
    schedule_repo: Arc<dyn WeeklyScheduleRepo>,
    tracking_repo: Arc<dyn OrderTrackingRepo>,
    ticket_repo: Arc<dyn TicketRepo>,
    release_record_repo: Arc<dyn ReleaseRecordRepo>,
}

#[async_trait]
impl ReconcileService for ReconcileServiceImpl {
    async fn asset_week(
        &self,
        asset_tag: &str,
        week_start: NaiveDate,
    ) -> anyhow::Result<Vec<ReconciledScheduleDay>> {
        let entries = self.schedule_repo.get_asset_week(asset_tag, week_start).await?;
        let context = ReconcileContext {
            tracking: self.tracking_repo.get_by_asset_week(asset_tag, week_start).await?,
            open_tickets: self.ticket_repo.get_open_by_asset(asset_tag).await?,
            releases: self.release_record_repo.get_by_asset(asset_tag).await?,
        };
        tracing::debug!(
            %asset_tag,
            days = entries.len(),
            tracking = context.tracking.len(),
            releases = context.releases.len(),
            "reconciling schedule week"
        );
        Ok(entries.into_iter().map(|entry| reconcile_entry(&context, entry)).collect())
    }
}

fn reconcile_entry(context: &ReconcileContext, entry: WeeklyScheduleEntry) -> ReconciledScheduleDay {
    let orders = entry
        .orders
        .iter()
        .map(|order| {
            RESOLVERS
                .iter()
                .find_map(|resolve| resolve(context, order))
                .unwrap_or_else(|| pending_row(order))
        })
        .collect();
    ReconciledScheduleDay {
        asset_tag: entry.asset_tag,
        day: entry.day,
        asset_status: entry.asset_status,
        orders,
    }
}

/// A manually tracked non-pending status overrides every other source.
fn resolve_tracking(context: &ReconcileContext, order: &PlannedOrder) -> Option<ReconciledOrder> {
    context
        .tracking
        .iter()
        .find(|el| {
            el.order_number == order.order_number && el.status != OrderDisplayStatus::Pendente
        })
        .map(|el| ReconciledOrder {
            order_number: order.order_number.clone(),
            order_type: order.order_type.clone(),
            description: order.description.clone(),
            status: el.status,
            reason: el.reason.clone(),
            recommendation: el.recommendation.clone(),
            source: ReconcileSource::Tracking,
        })
}

/// The order's state inside a currently-open ticket for the asset.
fn resolve_live_ticket(context: &ReconcileContext, order: &PlannedOrder) -> Option<ReconciledOrder> {
    let live = context
        .open_tickets
        .iter()
        .flat_map(|el| el.preventive_orders.iter())
        .find(|el| el.order_number == order.order_number)?;
    let (status, reason, recommendation) = match live.completion_state {
        CompletionState::CompletedThisShift => (OrderDisplayStatus::Realizado, None, None),
        CompletionState::NotCompleted => (
            OrderDisplayStatus::NaoRealizado,
            live.not_completed_reason.clone(),
            live.not_completed_recommendation.clone(),
        ),
        CompletionState::Pending | CompletionState::Completed => return None,
    };
    Some(ReconciledOrder {
        order_number: order.order_number.clone(),
        order_type: order.order_type.clone(),
        description: order.description.clone(),
        status,
        reason,
        recommendation,
        source: ReconcileSource::LiveTicket,
    })
}

/// Release history; when an asset was re-opened and re-released, the most
/// recent record wins.
fn resolve_release_record(
    context: &ReconcileContext,
    order: &PlannedOrder,
) -> Option<ReconciledOrder> {
    let record = context
        .releases
        .iter()
        .filter(|el| el.mentions_order(&order.order_number))
        .max_by_key(|el| el.released_at)?;
    let row = |status, reason: Option<String>, recommendation: Option<String>| ReconciledOrder {
        order_number: order.order_number.clone(),
        order_type: order.order_type.clone(),
        description: order.description.clone(),
        status,
        reason,
        recommendation,
        source: ReconcileSource::ReleaseRecord,
    };
    if record.orders_completed.iter().any(|el| el == &order.order_number) {
        return Some(row(OrderDisplayStatus::Realizado, None, None));
    }
    record
        .orders_not_completed
        .iter()
        .find(|el| el.order_number == order.order_number)
        .map(|el| {
            row(
                OrderDisplayStatus::NaoRealizado,
                Some(el.reason.clone()),
                Some(el.recommendation.clone()),
            )
        })
}

/// The schedule's own placeholder when nothing else knows the order.
fn pending_row(order: &PlannedOrder) -> ReconciledOrder {
    ReconciledOrder {
        order_number: order.order_number.clone(),
        order_type: order.order_type.clone(),
        description: order.description.clone(),
        status: OrderDisplayStatus::Pendente,
        reason: None,
        recommendation: None,
        source: ReconcileSource::Schedule,
    }
}

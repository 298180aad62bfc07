use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::entity::weekly_schedule::ScheduleStatus;

/// Reconciled display status of one scheduled order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderDisplayStatus {
    #[serde(rename = "REALIZADO")]
    Realizado,
    #[serde(rename = "NAO_REALIZADO")]
    NaoRealizado,
    #[default]
    #[serde(rename = "PENDENTE")]
    Pendente,
}

/// Which reconciliation tier produced a status; tiers are tried in this
/// order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReconcileSource {
    Tracking,
    LiveTicket,
    ReleaseRecord,
    Schedule,
}

/// One scheduled order with its reconciled status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledOrder {
    pub order_number: String,
    pub order_type: String,
    pub description: String,
    pub status: OrderDisplayStatus,
    pub reason: Option<String>,
    pub recommendation: Option<String>,
    pub source: ReconcileSource,
}

/// One asset's schedule day with every order reconciled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledScheduleDay {
    pub asset_tag: String,
    pub day: NaiveDate,
    pub asset_status: ScheduleStatus,
    pub orders: Vec<ReconciledOrder>,
}

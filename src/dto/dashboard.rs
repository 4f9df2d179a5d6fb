use serde::Serialize;

use crate::domain::event::WeddingEvent;
use crate::domain::task::Task;

/// Read-only dashboard rollup, recomputed from the aggregate per request.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub guest_count: usize,
    pub gender_counts: GenderCounts,
    /// Salami + Nyoondrah received so far.
    pub total_salami: f64,
    pub total_event_budget: f64,
    pub vendor_totals: VendorTotals,
    pub pending_task_count: usize,
    pub completed_task_count: usize,
    pub pending_by_assignee: Vec<AssigneeGroup>,
    pub next_event: Option<WeddingEvent>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct GenderCounts {
    pub male: usize,
    pub female: usize,
    pub family: usize,
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VendorTotals {
    pub total_cost: f64,
    pub total_paid: f64,
    /// Σcost − Σpaid; negative when vendors were overpaid overall.
    pub outstanding: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeGroup {
    pub assignee: String,
    pub tasks: Vec<Task>,
}

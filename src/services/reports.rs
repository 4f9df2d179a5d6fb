//! Derived aggregates: pure, stateless computations over the aggregate,
//! recomputed on every read. Nothing here mutates state or is cached.

use chrono::{Local, NaiveDate};

use crate::domain::app_data::AppData;
use crate::domain::event::WeddingEvent;
use crate::domain::gift::{GiftLog, GiftType};
use crate::domain::guest::{Gender, Guest};
use crate::domain::task::Task;
use crate::domain::vendor::Vendor;
use crate::dto::dashboard::{AssigneeGroup, DashboardSummary, GenderCounts, VendorTotals};

/// Sum of gift amounts, optionally restricted to the given types.
pub fn total_gift_amount(gifts: &[GiftLog], types: Option<&[GiftType]>) -> f64 {
    gifts
        .iter()
        .filter(|g| types.is_none_or(|ts| ts.contains(&g.gift_type)))
        .map(|g| g.amount)
        .sum()
}

pub fn vendor_totals(vendors: &[Vendor]) -> VendorTotals {
    let total_cost = vendors.iter().map(|v| v.cost).sum::<f64>();
    let total_paid = vendors.iter().map(|v| v.paid_amount).sum::<f64>();
    VendorTotals {
        total_cost,
        total_paid,
        outstanding: total_cost - total_paid,
    }
}

/// Splits tasks into (pending, completed) by the `completed` flag.
pub fn partition_tasks(tasks: &[Task]) -> (Vec<&Task>, Vec<&Task>) {
    tasks.iter().partition(|t| !t.completed)
}

/// Groups pending tasks by assignee. Group order is the insertion order
/// of each first-seen assignee; every pending task lands in exactly one
/// group.
pub fn pending_tasks_by_assignee(tasks: &[Task]) -> Vec<(String, Vec<&Task>)> {
    let mut groups: Vec<(String, Vec<&Task>)> = Vec::new();
    for task in tasks.iter().filter(|t| !t.completed) {
        match groups.iter_mut().find(|(name, _)| *name == task.assigned_to) {
            Some((_, group)) => group.push(task),
            None => groups.push((task.assigned_to.clone(), vec![task])),
        }
    }
    groups
}

pub fn guest_gender_counts(guests: &[Guest]) -> GenderCounts {
    let mut counts = GenderCounts::default();
    for guest in guests {
        match guest.gender {
            Gender::Male => counts.male += 1,
            Gender::Female => counts.female += 1,
            Gender::Family => counts.family += 1,
        }
    }
    counts
}

pub fn total_event_budget(events: &[WeddingEvent]) -> f64 {
    events.iter().map(|e| e.budget).sum()
}

/// The soonest event on or after today. Events with unset or malformed
/// dates are skipped.
pub fn next_event(events: &[WeddingEvent]) -> Option<&WeddingEvent> {
    let today = Local::now().date_naive();
    events
        .iter()
        .filter_map(|e| {
            NaiveDate::parse_from_str(&e.date, "%Y-%m-%d")
                .ok()
                .filter(|d| *d >= today)
                .map(|d| (d, e))
        })
        .min_by_key(|(d, _)| *d)
        .map(|(_, e)| e)
}

/// Bundles the dashboard rollup for the `/dashboard` route and the
/// assistant context.
pub fn dashboard_summary(data: &AppData) -> DashboardSummary {
    let (pending, completed) = partition_tasks(&data.tasks);
    DashboardSummary {
        guest_count: data.guests.len(),
        gender_counts: guest_gender_counts(&data.guests),
        total_salami: total_gift_amount(
            &data.gifts,
            Some(&[GiftType::Salami, GiftType::Nyoondrah]),
        ),
        total_event_budget: total_event_budget(&data.events),
        vendor_totals: vendor_totals(&data.vendors),
        pending_task_count: pending.len(),
        completed_task_count: completed.len(),
        pending_by_assignee: pending_tasks_by_assignee(&data.tasks)
            .into_iter()
            .map(|(assignee, tasks)| AssigneeGroup {
                assignee,
                tasks: tasks.into_iter().cloned().collect(),
            })
            .collect(),
        next_event: next_event(&data.events).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    fn vendor(id: &str, cost: f64, paid: f64) -> Vendor {
        Vendor {
            id: id.into(),
            name: format!("Vendor {id}"),
            cost,
            paid_amount: paid,
            ..Default::default()
        }
    }

    fn task(id: &str, assignee: &str, completed: bool) -> Task {
        Task {
            id: id.into(),
            name: format!("Task {id}"),
            priority: Priority::Medium,
            assigned_to: assignee.into(),
            completed,
        }
    }

    #[test]
    fn outstanding_equals_per_vendor_balance_sum() {
        // Includes an overpaid vendor with a negative balance.
        let vendors = vec![
            vendor("1", 500_000.0, 100_000.0),
            vendor("2", 80_000.0, 95_000.0),
            vendor("3", 30_000.0, 30_000.0),
        ];
        let totals = vendor_totals(&vendors);
        let balance_sum: f64 = vendors.iter().map(Vendor::balance).sum();
        assert_eq!(totals.outstanding, balance_sum);
        assert!(vendors[1].balance() < 0.0);
        assert_eq!(totals.total_cost, 610_000.0);
        assert_eq!(totals.total_paid, 225_000.0);
    }

    #[test]
    fn assignee_groups_partition_the_pending_set() {
        let tasks = vec![
            task("1", "Abba Jaan", false),
            task("2", "Brother", false),
            task("3", "Abba Jaan", false),
            task("4", "Ammi", true),
        ];
        let groups = pending_tasks_by_assignee(&tasks);

        let assignees: Vec<&str> = groups.iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(assignees, ["Abba Jaan", "Brother"]);

        let grouped: usize = groups.iter().map(|(_, g)| g.len()).sum();
        let pending = tasks.iter().filter(|t| !t.completed).count();
        assert_eq!(grouped, pending);
        for (assignee, group) in &groups {
            assert!(group.iter().all(|t| &t.assigned_to == assignee && !t.completed));
        }
    }

    #[test]
    fn gift_totals_respect_the_type_filter() {
        let data = AppData::seed();
        let all = total_gift_amount(&data.gifts, None);
        let salami = total_gift_amount(
            &data.gifts,
            Some(&[GiftType::Salami, GiftType::Nyoondrah]),
        );
        assert_eq!(all, 15_000.0);
        assert_eq!(salami, 15_000.0);
        let only_gifts = total_gift_amount(&data.gifts, Some(&[GiftType::Gift]));
        assert_eq!(only_gifts, 0.0);
    }

    #[test]
    fn summary_counts_match_the_seed() {
        let data = AppData::seed();
        let summary = dashboard_summary(&data);
        assert_eq!(summary.guest_count, 3);
        assert_eq!(summary.gender_counts.family, 2);
        assert_eq!(summary.gender_counts.male, 1);
        assert_eq!(summary.pending_task_count, 2);
        assert_eq!(summary.completed_task_count, 2);
        assert_eq!(summary.total_event_budget, 3_100_000.0);
    }
}

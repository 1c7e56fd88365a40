//! Built-in demo data source.
//!
//! Stands in for the real dispatch backend during development: five
//! representative jobs and one technician profile, with schedule and
//! creation timestamps positioned relative to a supplied "now" so the
//! dashboard's today-based stats stay meaningful whenever the demo runs.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Location, Task, TaskPriority, TaskStatus, User};
use crate::ports::source::{Snapshot, SourceError, TaskSource};

/// In-memory demo source. Never fails.
pub struct DemoSource {
    now: DateTime<Utc>,
}

impl DemoSource {
    /// Creates a demo source anchored at the given time; seeded
    /// timestamps are offset from it.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    fn seed_tasks(&self) -> Vec<Task> {
        let now = self.now;
        vec![
            Task {
                id: "1".into(),
                title: "HVAC Maintenance".into(),
                description: "Quarterly maintenance check for commercial HVAC system. \
                              Inspect filters, coils, and refrigerant levels."
                    .into(),
                status: TaskStatus::Pending,
                priority: TaskPriority::High,
                location: Location {
                    latitude: 40.7128,
                    longitude: -74.006,
                    address: "123 Business Center Dr, New York, NY 10001".into(),
                },
                customer_name: "Metro Office Complex".into(),
                customer_phone: "(555) 123-4567".into(),
                scheduled_date: now,
                estimated_duration: 90,
                notes: vec!["Bring extra filters".into(), "Access code: 4521".into()],
                photos: Vec::new(),
                created_at: now - Duration::days(1),
                updated_at: now,
            },
            Task {
                id: "2".into(),
                title: "Electrical Panel Inspection".into(),
                description: "Annual safety inspection of main electrical panel and \
                              circuit breakers."
                    .into(),
                status: TaskStatus::InProgress,
                priority: TaskPriority::Medium,
                location: Location {
                    latitude: 40.758,
                    longitude: -73.9855,
                    address: "456 Industrial Way, Brooklyn, NY 11201".into(),
                },
                customer_name: "Brooklyn Manufacturing".into(),
                customer_phone: "(555) 234-5678".into(),
                scheduled_date: now,
                estimated_duration: 60,
                notes: vec!["Contact site manager on arrival".into()],
                photos: Vec::new(),
                created_at: now - Duration::days(2),
                updated_at: now,
            },
            Task {
                id: "3".into(),
                title: "Plumbing Repair".into(),
                description: "Fix leaking pipe under sink in break room. Customer \
                              reports water damage."
                    .into(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Urgent,
                location: Location {
                    latitude: 40.7484,
                    longitude: -73.9857,
                    address: "789 Corporate Plaza, Manhattan, NY 10016".into(),
                },
                customer_name: "Tech Startup Inc".into(),
                customer_phone: "(555) 345-6789".into(),
                scheduled_date: now,
                estimated_duration: 45,
                notes: vec!["Emergency call - priority service".into()],
                photos: Vec::new(),
                created_at: now,
                updated_at: now,
            },
            Task {
                id: "4".into(),
                title: "Security System Setup".into(),
                description: "Install new security cameras and configure NVR system \
                              for retail store."
                    .into(),
                status: TaskStatus::Completed,
                priority: TaskPriority::Medium,
                location: Location {
                    latitude: 40.7614,
                    longitude: -73.9776,
                    address: "321 Retail Row, Queens, NY 11101".into(),
                },
                customer_name: "Fashion Boutique".into(),
                customer_phone: "(555) 456-7890".into(),
                scheduled_date: now - Duration::days(1),
                estimated_duration: 180,
                notes: vec!["4 cameras installed".into(), "Customer trained on app".into()],
                photos: Vec::new(),
                created_at: now - Duration::days(3),
                updated_at: now - Duration::days(1),
            },
            Task {
                id: "5".into(),
                title: "Generator Maintenance".into(),
                description: "Monthly check and oil change for backup generator.".into(),
                status: TaskStatus::Pending,
                priority: TaskPriority::Low,
                location: Location {
                    latitude: 40.6892,
                    longitude: -74.0445,
                    address: "555 Harbor View, Staten Island, NY 10301".into(),
                },
                customer_name: "Waterfront Restaurant".into(),
                customer_phone: "(555) 567-8901".into(),
                scheduled_date: now + Duration::days(1),
                estimated_duration: 60,
                notes: Vec::new(),
                photos: Vec::new(),
                created_at: now - Duration::days(5),
                updated_at: now,
            },
        ]
    }

    fn seed_user() -> User {
        User {
            id: "tech-001".into(),
            name: "Alex Johnson".into(),
            email: "alex.johnson@fieldops.demo".into(),
            role: "Senior Field Technician".into(),
            avatar: None,
            tasks_completed: 247,
            rating: 4.9,
        }
    }
}

impl TaskSource for DemoSource {
    fn load(&self) -> Result<Snapshot, SourceError> {
        Ok(Snapshot {
            tasks: self.seed_tasks(),
            user: Self::seed_user(),
            avg_completion_minutes: 67,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_yields_five_tasks_and_profile() {
        let snapshot = DemoSource::new(Utc::now()).load().unwrap();
        assert_eq!(snapshot.tasks.len(), 5);
        assert_eq!(snapshot.user.id, "tech-001");
        assert_eq!(snapshot.avg_completion_minutes, 67);
    }

    #[test]
    fn seeded_ids_are_unique() {
        let snapshot = DemoSource::new(Utc::now()).load().unwrap();
        let mut ids: Vec<_> = snapshot.tasks.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn timestamps_are_anchored_to_now() {
        let now = Utc::now();
        let snapshot = DemoSource::new(now).load().unwrap();
        for task in &snapshot.tasks {
            assert!(task.created_at <= task.updated_at, "task {}", task.id);
        }
        // Three jobs are on today's schedule.
        let today = snapshot.tasks.iter().filter(|t| t.scheduled_date == now).count();
        assert_eq!(today, 3);
    }
}

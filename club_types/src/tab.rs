//! Navigation tab descriptors.

use serde::{Deserialize, Serialize};

/// Grouping used by the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabCategory {
    /// Dashboard and personal pages.
    General,
    /// Athletes, coaches, parents, groups.
    People,
    /// Probes (events), competitions, results.
    Competition,
    /// Messages and announcements.
    Communication,
    /// Users, roles, settings.
    Administration,
}

impl TabCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabCategory::General => "general",
            TabCategory::People => "people",
            TabCategory::Competition => "competition",
            TabCategory::Communication => "communication",
            TabCategory::Administration => "administration",
        }
    }
}

/// A navigation tab gated on a single permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Stable identifier (`athletes`, `probes`, ...).
    pub id: String,
    /// Label shown in the navigation bar.
    pub label: String,
    /// Permission that makes the tab visible.
    pub permission: String,
    pub category: TabCategory,
    /// Ascending sort key.
    pub order: i32,
}

impl TabDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        permission: impl Into<String>,
        category: TabCategory,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            permission: permission.into(),
            category,
            order,
        }
    }
}

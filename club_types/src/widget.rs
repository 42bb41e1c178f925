//! Dashboard widget descriptors.

use serde::{Deserialize, Serialize};

/// Grid footprint of a widget on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Spans the whole row.
    Full,
}

/// A dashboard widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    pub id: String,
    /// Human-readable title.
    pub name: String,
    /// Name of the front-end component that renders the widget.
    pub component: String,
    /// Permission required to see the widget. `None` means any signed-in user.
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub size: WidgetSize,
}

impl WidgetDescriptor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        component: impl Into<String>,
        permission: Option<&str>,
        size: WidgetSize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component: component.into(),
            permission: permission.map(str::to_string),
            size,
        }
    }
}

//! Club Types - Level 1 foundation types for club access control
//!
//! Pure data structures shared by the resolution engine and anything that
//! renders its output (navigation, dashboards, HTTP guards).
//!
//! ## Contents
//!
//! - Permission strings and their `.own` / `.all` scope suffix
//! - Tab descriptors for navigation
//! - Widget descriptors for the dashboard
//!
//! ## Rules
//!
//! 1. **NO RESOLUTION LOGIC** - alias and equivalence handling lives in `club_access`
//! 2. **NO WORKSPACE DEPENDENCIES**
//! 3. **SERIALIZABLE** - every registry type round-trips through serde

mod permission;
mod tab;
mod widget;

pub use permission::{split_scope, Permission, PermissionParseError, Scope, WILDCARD};
pub use tab::{TabCategory, TabDescriptor};
pub use widget::{WidgetDescriptor, WidgetSize};

//! Permission strings.
//!
//! A permission is a dot-delimited identifier such as `athletes.view` or
//! `athletes.view.own`. The trailing `.own` / `.all` segment is a scope
//! suffix; everything else is opaque.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The universal grant. A holder passes every permission check.
pub const WILDCARD: &str = "*";

// ============================================================================
// SCOPE
// ============================================================================

/// Ownership scope carried as the last segment of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Only records the user owns (their own athletes, their own children).
    Own,
    /// Every record of the resource.
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Own => "own",
            Scope::All => "all",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "own" => Some(Scope::Own),
            "all" => Some(Scope::All),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PERMISSION
// ============================================================================

/// Error returned by [`Permission::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionParseError {
    #[error("permission string is empty")]
    Empty,

    #[error("permission '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// A parsed permission string.
///
/// Parsing never rejects unconventional identifiers: `reports` or
/// `a.b.c.d` are kept verbatim, they just have no recognised scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    raw: String,
    /// Byte offset where the `.own` / `.all` suffix starts, if any.
    scope_at: Option<usize>,
    scope: Option<Scope>,
}

impl Permission {
    pub fn parse(raw: impl Into<String>) -> Result<Self, PermissionParseError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(PermissionParseError::Empty);
        }
        if raw != WILDCARD && raw.split('.').any(str::is_empty) {
            return Err(PermissionParseError::EmptySegment(raw));
        }

        let (scope_at, scope) = match split_scope(&raw) {
            Some((base, scope)) => (Some(base.len()), Some(scope)),
            None => (None, None),
        };

        Ok(Self {
            raw,
            scope_at,
            scope,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_wildcard(&self) -> bool {
        self.raw == WILDCARD
    }

    /// The `.own` / `.all` suffix, if present.
    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    /// The permission with its scope suffix removed.
    pub fn base(&self) -> &str {
        match self.scope_at {
            Some(at) => &self.raw[..at],
            None => &self.raw,
        }
    }

    /// First segment (`athletes` in `athletes.view.own`).
    pub fn resource(&self) -> &str {
        self.raw.split('.').next().unwrap_or(&self.raw)
    }

    /// Second segment (`view` in `athletes.view.own`), if any.
    pub fn action(&self) -> Option<&str> {
        self.base().split('.').nth(1)
    }
}

/// Split `resource.action.own` into (`resource.action`, `Own`).
///
/// Works on raw strings so the resolver can fold suffixes without allocating
/// a [`Permission`] per lookup. A bare `own` with nothing before it is not a
/// scoped permission.
pub fn split_scope(raw: &str) -> Option<(&str, Scope)> {
    let (base, last) = raw.rsplit_once('.')?;
    if base.is_empty() {
        return None;
    }
    Scope::from_segment(last).map(|scope| (base, scope))
}

impl TryFrom<String> for Permission {
    type Error = PermissionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Permission::parse(value)
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.raw
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scoped_permission() {
        let p = Permission::parse("athletes.view.own").unwrap();
        assert_eq!(p.resource(), "athletes");
        assert_eq!(p.action(), Some("view"));
        assert_eq!(p.scope(), Some(Scope::Own));
        assert_eq!(p.base(), "athletes.view");
    }

    #[test]
    fn parse_unscoped_permission() {
        let p = Permission::parse("results.edit").unwrap();
        assert_eq!(p.scope(), None);
        assert_eq!(p.base(), "results.edit");
        assert_eq!(p.action(), Some("edit"));
    }

    #[test]
    fn opaque_identifiers_are_accepted() {
        let p = Permission::parse("reports").unwrap();
        assert_eq!(p.resource(), "reports");
        assert_eq!(p.action(), None);
        assert_eq!(p.base(), "reports");

        // A lone scope word is not a suffix.
        let p = Permission::parse("own").unwrap();
        assert_eq!(p.scope(), None);
    }

    #[test]
    fn wildcard_parses() {
        let p = Permission::parse(WILDCARD).unwrap();
        assert!(p.is_wildcard());
        assert_eq!(p.scope(), None);
    }

    #[test]
    fn rejects_empty_and_hollow_segments() {
        assert_eq!(Permission::parse(""), Err(PermissionParseError::Empty));
        assert!(matches!(
            Permission::parse("athletes..view"),
            Err(PermissionParseError::EmptySegment(_))
        ));
        assert!(Permission::parse(".own").is_err());
    }

    #[test]
    fn split_scope_on_raw_strings() {
        assert_eq!(
            split_scope("parents.view.all"),
            Some(("parents.view", Scope::All))
        );
        assert_eq!(split_scope("parents.view"), None);
        assert_eq!(split_scope("all"), None);
    }

    #[test]
    fn serde_uses_plain_strings() {
        let p: Permission = serde_json::from_str("\"coaches.view.all\"").unwrap();
        assert_eq!(p.scope(), Some(Scope::All));
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"coaches.view.all\"");
        assert!(serde_json::from_str::<Permission>("\"\"").is_err());
    }
}

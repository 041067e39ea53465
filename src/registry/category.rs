//! Route categories.
//!
//! A route may belong to several categories at once (`API | PUBLIC`), so the
//! category is a bit-flag set rather than an enum. Validator and handler
//! lookup work on individual flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Classification of a route driving validator and handler selection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RouteCategory: u16 {
        const API      = 0x0001;
        const PUBLIC   = 0x0002;
        const PRIVATE  = 0x0004;
        const ADMIN    = 0x0008;
        const WEBHOOK  = 0x0010;
        const INTERNAL = 0x0020;
    }
}

impl RouteCategory {
    /// Order in which contained flags are consulted when resolving a type
    /// handler for a combined category. Most specific first.
    pub const HANDLER_PRECEDENCE: [RouteCategory; 6] = [
        RouteCategory::ADMIN,
        RouteCategory::PRIVATE,
        RouteCategory::API,
        RouteCategory::PUBLIC,
        RouteCategory::WEBHOOK,
        RouteCategory::INTERNAL,
    ];

    /// Returns true if every flag of `other` is set in `self`.
    ///
    /// Alias of [`RouteCategory::contains`] that reads better at call sites
    /// such as `category.includes(RouteCategory::ADMIN)`.
    pub fn includes(&self, other: RouteCategory) -> bool {
        self.contains(other)
    }

    /// Lowercase name of a single flag, `None` for combined or empty sets.
    pub fn flag_name(&self) -> Option<&'static str> {
        let name = match *self {
            RouteCategory::API => "api",
            RouteCategory::PUBLIC => "public",
            RouteCategory::PRIVATE => "private",
            RouteCategory::ADMIN => "admin",
            RouteCategory::WEBHOOK => "webhook",
            RouteCategory::INTERNAL => "internal",
            _ => return None,
        };
        Some(name)
    }
}

impl Default for RouteCategory {
    fn default() -> Self {
        RouteCategory::PUBLIC
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{:#06x}", self.bits());
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

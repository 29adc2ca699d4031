//! Page routes and the view router.
//!
//! The site has a closed set of pages. A [`ViewRouter`] holds the one that is
//! currently shown and swaps it wholesale on navigation. There is no history
//! stack and no guard: any route can replace any other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    Services,
    FreshOil,
    Compliance,
    Contact,
}

impl Route {
    /// Every route, in navigation bar order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Services,
        Self::FreshOil,
        Self::Compliance,
        Self::Contact,
    ];

    /// Stable identifier used in URLs and logs.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::FreshOil => "fresh-oil",
            Self::Compliance => "compliance",
            Self::Contact => "contact",
        }
    }

    /// Request path that renders this route. Home lives at the site root.
    pub fn path(self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            other => format!("/{}", other.slug()),
        }
    }

    /// Label shown in the navigation bar.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Used Oil Collection",
            Self::FreshOil => "Fresh Oil Supply",
            Self::Compliance => "Compliance",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.slug() == s)
            .ok_or_else(|| RouteError::Unknown { slug: s.to_owned() })
    }
}

/// Holds the route currently on screen.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: Route,
}

impl ViewRouter {
    /// A router showing the home page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The route currently on screen.
    pub fn current(&self) -> Route {
        self.current
    }

    /// Replace the current route. Returns the route that was replaced.
    pub fn navigate(&mut self, target: Route) -> Route {
        std::mem::replace(&mut self.current, target)
    }
}

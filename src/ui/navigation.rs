use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Nested graph grouping the visit flow; entering it lands on its start
/// destination.
pub const VISIT_GRAPH: &str = "visit";

/// Screens reachable in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Properties,
    Clients,
    Visitors,
    ApplyVisit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no screen is registered for route '{0}'")]
pub struct NavigationError(pub String);

impl Route {
    pub const START: Route = Route::Properties;

    pub fn path(self) -> &'static str {
        match self {
            Route::Properties => "properties",
            Route::Clients => "clients",
            Route::Visitors => "visitors",
            Route::ApplyVisit => "applyvisit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Properties => "Properties",
            Route::Clients => "Clients",
            Route::Visitors => "Visitors",
            Route::ApplyVisit => "Apply for a visit",
        }
    }

    /// Resolve a route path; the `visit` graph resolves to its start
    /// destination.
    pub fn parse(path: &str) -> Result<Route, NavigationError> {
        match path.trim().trim_matches('/') {
            "properties" => Ok(Route::Properties),
            "clients" => Ok(Route::Clients),
            "visitors" => Ok(Route::Visitors),
            "applyvisit" | VISIT_GRAPH => Ok(Route::ApplyVisit),
            other => Err(NavigationError(other.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Route::parse(value)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Entry of the bottom navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarItem {
    pub title: &'static str,
    pub route: Route,
}

pub fn bar_items() -> [BarItem; 3] {
    [
        BarItem {
            title: "Properties",
            route: Route::Properties,
        },
        BarItem {
            title: "Clients",
            route: Route::Clients,
        },
        BarItem {
            title: "Visitors",
            route: Route::Visitors,
        },
    ]
}

/// Back stack of visited screens
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::START],
        }
    }

    pub fn current(&self) -> Route {
        // The start destination is never popped.
        self.stack.last().copied().unwrap_or(Route::START)
    }

    /// Push `route` unless it is already on top.
    pub fn navigate(&mut self, route: Route) {
        if self.current() != route {
            self.stack.push(route);
        }
    }

    pub fn navigate_to(&mut self, path: &str) -> Result<Route, NavigationError> {
        let route = Route::parse(path)?;
        self.navigate(route);
        Ok(route)
    }

    /// Pop the current screen. Returns false at the start destination.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

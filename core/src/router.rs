use std::fmt;
use std::str::FromStr;

use shipbox_common::error::ParseOptionError;
use tracing::debug;

/// The two screens of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    /// `/`, the add-box form.
    #[default]
    AddBox,
    /// `/box-list`, the searchable list.
    BoxList,
}

impl Route {
    pub const ALL: [Route; 2] = [Route::AddBox, Route::BoxList];

    pub const fn path(self) -> &'static str {
        match self {
            Route::AddBox => "/",
            Route::BoxList => "/box-list",
        }
    }

    /// Label shown in the header.
    pub const fn title(self) -> &'static str {
        match self {
            Route::AddBox => "Add Box",
            Route::BoxList => "Box List",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| ParseOptionError::new("route", s))
    }
}

#[derive(Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        if route != self.current {
            debug!("navigating {} -> {}", self.current, route);
        }
        self.current = route;
    }

    /// Whether the header should highlight `route`.
    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }
}

//! Route changes requested by commands.

use shopfront_core::Route;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Performs navigation; what that means is up to the host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// In-memory navigation history, starting at [`Route::Home`].
#[derive(Debug)]
pub struct RouteHistory {
    visited: Mutex<Vec<Route>>,
}

impl RouteHistory {
    pub fn new() -> Self {
        RouteHistory {
            visited: Mutex::new(vec![Route::Home]),
        }
    }

    /// The route navigated to last.
    pub fn current(&self) -> Route {
        let visited = self.visited.lock().unwrap_or_else(PoisonError::into_inner);
        visited.last().copied().unwrap_or(Route::Home)
    }

    /// Every route in visit order, oldest first.
    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteHistory {
    fn navigate(&self, route: Route) {
        debug!(%route, "Navigating");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}

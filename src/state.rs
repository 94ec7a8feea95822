/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 * - always Clone; anything added later must be cheap to clone (Arc inside)
 */
use crate::SERVICE_TITLE;

#[derive(Clone, Debug)]
pub struct AppState {
    pub title: &'static str,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            title: SERVICE_TITLE,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

//! Text renderings of the app screens. Every function is a pure function of
//! the UI state.

use crate::models::RentalProperty;
use crate::ui::navigation::{bar_items, Route};
use crate::ui::state::RentalUiState;
use std::fmt::Write;

pub const APP_NAME: &str = "Rental";
pub const LOADING_TEXT: &str = "Loading...";
pub const LOADING_FAILED_TEXT: &str = "Failed to load";

/// Render the screen registered for `route`
pub fn render(route: Route, state: &RentalUiState, base_url: &str) -> String {
    match route {
        Route::Properties => home_screen(state, base_url),
        Route::Clients => client_screen(state),
        Route::Visitors => visitors_screen(state),
        Route::ApplyVisit => apply_visit_screen(state),
    }
}

/// Full frame: top bar, the current screen, bottom bar
pub fn frame(route: Route, state: &RentalUiState, base_url: &str) -> String {
    format!(
        "{}\n{}\n{}",
        top_bar(),
        render(route, state, base_url),
        bottom_bar(route)
    )
}

pub fn top_bar() -> String {
    format!("=== {} ===", APP_NAME)
}

pub fn bottom_bar(selected: Route) -> String {
    bar_items()
        .iter()
        .map(|item| {
            if item.route == selected {
                format!("[{}]", item.title)
            } else {
                format!(" {} ", item.title)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn home_screen(state: &RentalUiState, base_url: &str) -> String {
    match state {
        RentalUiState::Loading => loading_screen(),
        RentalUiState::Success(properties) => result_screen(properties, base_url),
        RentalUiState::Error => error_screen(),
    }
}

pub fn loading_screen() -> String {
    LOADING_TEXT.to_string()
}

/// Static failure indicator
pub fn error_screen() -> String {
    format!("(!) {}", LOADING_FAILED_TEXT)
}

pub fn result_screen(properties: &[RentalProperty], base_url: &str) -> String {
    if properties.is_empty() {
        return "No properties available".to_string();
    }
    properties
        .iter()
        .map(|property| property_card(property, base_url))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn property_card(property: &RentalProperty, base_url: &str) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "+ [img] {}", property.picture_url(base_url));
    let _ = writeln!(card, "| Address: {}", property.address);
    let _ = writeln!(card, "| OpenTime1: {}", property.open_time_1);
    let _ = write!(card, "| OpenTime2: {}", property.open_time_2);
    card
}

pub fn client_screen(state: &RentalUiState) -> String {
    match state {
        RentalUiState::Loading => loading_screen(),
        RentalUiState::Success(_) => "Clients\nNo clients yet".to_string(),
        RentalUiState::Error => error_screen(),
    }
}

pub fn visitors_screen(state: &RentalUiState) -> String {
    match state {
        RentalUiState::Loading => loading_screen(),
        RentalUiState::Success(_) => "Visitors\nNo visits scheduled".to_string(),
        RentalUiState::Error => error_screen(),
    }
}

pub fn apply_visit_screen(state: &RentalUiState) -> String {
    match state {
        RentalUiState::Loading => loading_screen(),
        RentalUiState::Success(properties) => format!(
            "{}\n{} properties open for visits",
            Route::ApplyVisit.title(),
            properties.len()
        ),
        RentalUiState::Error => error_screen(),
    }
}

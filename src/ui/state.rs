use crate::models::RentalProperty;

/// State of the properties screen.
///
/// Exactly one variant is active at a time. `Success` always holds the list
/// from the most recent fetch that was applied, in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RentalUiState {
    #[default]
    Loading,
    Success(Vec<RentalProperty>),
    Error,
}

impl RentalUiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RentalUiState::Loading)
    }

    pub fn properties(&self) -> Option<&[RentalProperty]> {
        match self {
            RentalUiState::Success(properties) => Some(properties),
            RentalUiState::Loading | RentalUiState::Error => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalUiState::Loading => "loading",
            RentalUiState::Success(_) => "success",
            RentalUiState::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        assert_eq!(RentalUiState::default(), RentalUiState::Loading);
        assert!(RentalUiState::default().is_loading());
    }

    #[test]
    fn only_success_exposes_properties() {
        let property = RentalProperty {
            id: 1,
            address: "1 Main St".to_string(),
            picture_link: "p1.jpg".to_string(),
            open_time_1: 9,
            open_time_2: 17,
        };
        let success = RentalUiState::Success(vec![property.clone()]);

        assert_eq!(success.properties(), Some(&[property][..]));
        assert_eq!(success.label(), "success");
        assert_eq!(RentalUiState::Error.properties(), None);
        assert_eq!(RentalUiState::Loading.properties(), None);
    }
}

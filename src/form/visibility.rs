use serde::Serialize;

use super::models::AgeRequirement;

/// Whether the custom age range inputs are shown
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgeRangeVisibility {
    #[default]
    Hidden,
    Visible,
}

impl AgeRangeVisibility {
    /// State entered when `requirement` is selected, whatever the current state
    pub fn on_select(self, requirement: AgeRequirement) -> Self {
        match requirement {
            AgeRequirement::Custom => AgeRangeVisibility::Visible,
            AgeRequirement::Any | AgeRequirement::EighteenToThirtyFive => AgeRangeVisibility::Hidden,
        }
    }

    pub fn for_requirement(requirement: Option<AgeRequirement>) -> Self {
        requirement.map_or(AgeRangeVisibility::default(), |requirement| {
            AgeRangeVisibility::default().on_select(requirement)
        })
    }

    pub fn is_visible(self) -> bool {
        self == AgeRangeVisibility::Visible
    }
}

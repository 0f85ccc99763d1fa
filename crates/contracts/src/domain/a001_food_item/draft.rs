use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::{FoodItem, FoodItemId, FoodItemPatch};

/// Whether a draft creates a new item or updates an existing one.
///
/// Both go to the same webhook; the mode only decides how the result is
/// merged locally and which wording the notifications use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    Create,
    Update,
}

impl EditMode {
    pub fn is_add(self) -> bool {
        matches!(self, EditMode::Create)
    }
}

/// Typed payload of the add/edit form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodItemDraft {
    pub id: FoodItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub rating: f64,
    pub category: String,
    pub is_veg: bool,
}

/// First constraint a draft breaks.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftViolation {
    /// A required text field is blank; carries the form field name.
    Blank(&'static str),
    NegativePrice(f64),
    RatingOutOfRange(f64),
    /// Rating is not a multiple of 0.1.
    RatingGranularity(f64),
    InvalidImageUrl(String),
}

impl fmt::Display for DraftViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftViolation::Blank(field) => write!(f, "{} is required", field),
            DraftViolation::NegativePrice(v) => write!(f, "Price must be 0 or more, got {}", v),
            DraftViolation::RatingOutOfRange(v) => {
                write!(f, "Rating must be between 0 and 5, got {}", v)
            }
            DraftViolation::RatingGranularity(v) => {
                write!(f, "Rating must use steps of 0.1, got {}", v)
            }
            DraftViolation::InvalidImageUrl(v) => write!(f, "Image must be a valid URL, got '{}'", v),
        }
    }
}

impl FoodItemDraft {
    /// Empty create form with the allocator's proposed id.
    pub fn for_create(id: FoodItemId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Edit form pre-filled from an existing item.
    pub fn from_item(item: &FoodItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            rating: item.rating,
            category: item.category.clone(),
            is_veg: item.is_veg,
        }
    }

    /// Copy with surrounding whitespace removed from every text field.
    pub fn normalized(&self) -> Self {
        Self {
            id: FoodItemId::new(self.id.as_str().trim()),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            image: self.image.trim().to_string(),
            rating: self.rating,
            category: self.category.trim().to_string(),
            is_veg: self.is_veg,
        }
    }

    pub fn validate(&self) -> Result<(), DraftViolation> {
        let text_fields = [
            ("Id", self.id.as_str()),
            ("Name", self.name.as_str()),
            ("Description", self.description.as_str()),
            ("Image", self.image.as_str()),
            ("Category", self.category.as_str()),
        ];
        if let Some((field, _)) = text_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(DraftViolation::Blank(*field));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DraftViolation::NegativePrice(self.price));
        }

        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(DraftViolation::RatingOutOfRange(self.rating));
        }
        let tenths = self.rating * 10.0;
        if (tenths - tenths.round()).abs() > 1e-6 {
            return Err(DraftViolation::RatingGranularity(self.rating));
        }

        match url::Url::parse(self.image.trim()) {
            Ok(parsed) if parsed.has_host() => {}
            _ => return Err(DraftViolation::InvalidImageUrl(self.image.clone())),
        }

        Ok(())
    }

    /// New collection entry built from an accepted create draft.
    pub fn to_item(&self) -> FoodItem {
        FoodItem {
            id: self.id.clone(),
            title: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: self.price,
            rating: self.rating,
            image: self.image.clone(),
            is_veg: self.is_veg,
        }
    }

    /// Full-field patch built from an accepted update draft.
    pub fn to_patch(&self) -> FoodItemPatch {
        FoodItemPatch {
            title: Some(self.name.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: Some(self.price),
            rating: Some(self.rating),
            image: Some(self.image.clone()),
            is_veg: Some(self.is_veg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn valid() -> FoodItemDraft {
        FoodItemDraft {
            id: "8".into(),
            name: "Dosa".into(),
            description: "d".into(),
            price: 50.0,
            image: "http://x/y.png".into(),
            rating: 4.0,
            category: "Breakfast".into(),
            is_veg: true,
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[rstest]
    #[case(FoodItemDraft { name: "  ".into(), ..valid() }, DraftViolation::Blank("Name"))]
    #[case(FoodItemDraft { category: "".into(), ..valid() }, DraftViolation::Blank("Category"))]
    #[case(FoodItemDraft { price: -1.0, ..valid() }, DraftViolation::NegativePrice(-1.0))]
    #[case(FoodItemDraft { rating: 5.5, ..valid() }, DraftViolation::RatingOutOfRange(5.5))]
    #[case(FoodItemDraft { rating: 4.25, ..valid() }, DraftViolation::RatingGranularity(4.25))]
    #[case(FoodItemDraft { image: "not a url".into(), ..valid() }, DraftViolation::InvalidImageUrl("not a url".into()))]
    fn test_violations(#[case] draft: FoodItemDraft, #[case] expected: DraftViolation) {
        assert_eq!(draft.validate(), Err(expected));
    }

    #[test]
    fn test_rating_bounds_inclusive() {
        assert!(FoodItemDraft { rating: 0.0, ..valid() }.validate().is_ok());
        assert!(FoodItemDraft { rating: 5.0, ..valid() }.validate().is_ok());
        assert!(FoodItemDraft { rating: 4.3, ..valid() }.validate().is_ok());
    }

    #[test]
    fn test_normalized_trims_text() {
        let draft = FoodItemDraft {
            name: "  Dosa ".into(),
            category: " Breakfast".into(),
            ..valid()
        }
        .normalized();
        assert_eq!(draft.name, "Dosa");
        assert_eq!(draft.category, "Breakfast");
    }

    #[test]
    fn test_round_trip_through_item() {
        let draft = valid();
        let item = draft.to_item();
        assert_eq!(item.title, "Dosa");
        assert_eq!(FoodItemDraft::from_item(&item), draft);
    }
}

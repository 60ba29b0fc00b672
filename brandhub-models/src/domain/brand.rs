//! Wire form of the brand aggregate.
//!
//! A [`Brand`] travels as one JSON document but is stored across the brand, owner, contact,
//! statistic, price, product and media tables. The `to_active_model` helpers produce the rows
//! for each table; the `From<*Model>` impls go the other way.

use crate::{
    entities::prelude::{
        BrandActiveModel, BrandModel, ContactActiveModel, ContactModel, OwnerActiveModel,
        OwnerModel, PriceActiveModel, PriceModel, ProductActiveModel, ProductModel,
        StatisticActiveModel, StatisticModel,
    },
    enums::contact::ContactKind,
};
use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Store-assigned; absent until the aggregate has been written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 50, message = "brand name must be 1..=50 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub location: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_by: Option<i32>,
    #[serde(default)]
    #[validate(nested)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    #[validate(nested)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    #[validate(nested)]
    pub statistics: Vec<Statistic>,
    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[validate(nested)]
    pub person: Person,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[validate(length(max = 50))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub surname: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub fathername: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub bio_info: String,
}

/// Placeholder for an owner's history; carries no data yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub type_of: ContactKind,
    #[validate(length(min = 1, max = 100, message = "contact link must be 1..=100 characters"))]
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_period"))]
pub struct Statistic {
    #[validate(length(max = 50))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub description: String,
    pub start_period: NaiveDate,
    pub end_period: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[validate(length(min = 1, max = 50, message = "product name must be 1..=50 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub description: String,
    #[validate(nested)]
    pub price: Price,
    /// Inline base64 payloads on the way in, data URIs on the way out.
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price_range"))]
pub struct Price {
    pub low_end: i32,
    pub high_end: i32,
    #[validate(length(max = 20))]
    pub currency: String,
}

fn validate_period(stat: &Statistic) -> Result<(), ValidationError> {
    if stat.start_period > stat.end_period {
        let mut err = ValidationError::new("period");
        err.message = Some("startPeriod must not be after endPeriod".into());
        return Err(err);
    }
    Ok(())
}

fn validate_price_range(price: &Price) -> Result<(), ValidationError> {
    if price.low_end > price.high_end {
        let mut err = ValidationError::new("price_range");
        err.message = Some("lowEnd must not exceed highEnd".into());
        return Err(err);
    }
    Ok(())
}

impl Brand {
    /// Core row for insertion; `id` is left to the store.
    pub fn to_active_model(&self, added_by: i32) -> BrandActiveModel {
        let now = Utc::now();
        BrandActiveModel {
            id: NotSet,
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            location: Set(self.location.clone()),
            is_open: Set(self.is_open),
            added_by: Set(Some(added_by)),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
        }
    }

    /// Core-field patch for an existing row. `id`, `added_by` and `created_at` are untouched.
    pub fn to_update_model(&self, id: i32) -> BrandActiveModel {
        BrandActiveModel {
            id: Set(id),
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            location: Set(self.location.clone()),
            is_open: Set(self.is_open),
            added_by: NotSet,
            created_at: NotSet,
            updated_at: Set(Some(Utc::now())),
        }
    }

    /// The aggregate without creator and store identifiers, for public listings.
    pub fn into_public(mut self) -> Self {
        self.id = None;
        self.added_by = None;
        self
    }

    pub fn image_count(&self) -> usize {
        self.products.iter().map(|p| p.images.len()).sum()
    }
}

impl From<BrandModel> for Brand {
    fn from(model: BrandModel) -> Self {
        Brand {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            location: model.location,
            is_open: model.is_open,
            added_by: model.added_by,
            ..Default::default()
        }
    }
}

impl Owner {
    pub fn new(person: Person) -> Self {
        Owner {
            person,
            history: Vec::new(),
        }
    }

    pub fn to_active_model(&self) -> OwnerActiveModel {
        OwnerActiveModel {
            id: NotSet,
            name: Set(self.person.name.clone()),
            surname: Set(self.person.surname.clone()),
            fathername: Set(self.person.fathername.clone()),
            bio_info: Set(self.person.bio_info.clone()),
            history_id: NotSet,
        }
    }
}

impl From<OwnerModel> for Owner {
    fn from(model: OwnerModel) -> Self {
        Owner::new(Person {
            name: model.name,
            surname: model.surname,
            fathername: model.fathername,
            bio_info: model.bio_info,
        })
    }
}

impl Contact {
    pub fn new(type_of: &str, link: impl Into<String>) -> Self {
        Contact {
            type_of: ContactKind::normalize(type_of),
            link: link.into(),
        }
    }

    pub fn to_active_model(&self) -> ContactActiveModel {
        ContactActiveModel {
            id: NotSet,
            kind: Set(self.type_of),
            link: Set(self.link.clone()),
        }
    }
}

impl From<ContactModel> for Contact {
    fn from(model: ContactModel) -> Self {
        Contact {
            type_of: model.kind,
            link: model.link,
        }
    }
}

impl Statistic {
    pub fn to_active_model(&self, brand_id: i32) -> StatisticActiveModel {
        StatisticActiveModel {
            id: NotSet,
            brand_id: Set(brand_id),
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
            start_period: Set(self.start_period),
            end_period: Set(self.end_period),
            value: Set(self.value),
        }
    }
}

impl From<StatisticModel> for Statistic {
    fn from(model: StatisticModel) -> Self {
        Statistic {
            name: model.name,
            description: model.description,
            start_period: model.start_period,
            end_period: model.end_period,
            value: model.value,
        }
    }
}

impl Product {
    pub fn to_active_model(&self, brand_id: i32, price_id: i32) -> ProductActiveModel {
        ProductActiveModel {
            id: NotSet,
            brand_id: Set(brand_id),
            price_id: Set(price_id),
            name: Set(self.name.clone()),
            description: Set(self.description.clone()),
        }
    }

    /// Rebuild a product from its row, its price and already-resolved images.
    pub fn from_parts(model: ProductModel, price: Price, images: Vec<String>) -> Self {
        Product {
            name: model.name,
            description: model.description,
            price,
            images,
        }
    }
}

impl Price {
    pub fn to_active_model(&self, brand_id: i32) -> PriceActiveModel {
        PriceActiveModel {
            id: NotSet,
            brand_id: Set(brand_id),
            low_end: Set(self.low_end),
            high_end: Set(self.high_end),
            currency: Set(self.currency.clone()),
        }
    }
}

impl From<PriceModel> for Price {
    fn from(model: PriceModel) -> Self {
        Price {
            low_end: model.low_end,
            high_end: model.high_end,
            currency: model.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe() -> Brand {
        serde_json::from_value(serde_json::json!({
            "name": "Cafe A",
            "products": [{
                "name": "Latte",
                "price": {"lowEnd": 120, "highEnd": 150, "currency": "USD"},
                "images": []
            }],
            "owners": [],
            "contacts": [{"typeOf": "PHONE", "link": "+1-555"}],
            "statistics": []
        }))
        .unwrap()
    }

    #[test]
    fn test_wire_shape() {
        let brand = cafe();
        assert_eq!(brand.contacts[0].type_of, ContactKind::Phone);
        assert!(brand.id.is_none());
        assert!(brand.validate().is_ok());

        let json = serde_json::to_value(&brand).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("addedBy").is_none());
        assert_eq!(json["contacts"][0]["typeOf"], "phone");
        assert_eq!(json["products"][0]["price"]["lowEnd"], 120);
    }

    #[test]
    fn test_validation_rejects_bad_ranges() {
        let mut brand = cafe();
        brand.products[0].price.low_end = 200;
        assert!(brand.validate().is_err());

        let mut brand = cafe();
        brand.name.clear();
        assert!(brand.validate().is_err());

        let mut brand = cafe();
        brand.statistics.push(Statistic {
            name: "visits".into(),
            description: String::new(),
            start_period: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_period: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            value: 1.0,
        });
        assert!(brand.validate().is_err());
    }

    #[test]
    fn test_owner_history_round_trips_as_empty_objects() {
        let owner: Owner = serde_json::from_str(
            r#"{"person":{"name":"Ivan","surname":"P","fathername":"S","bioInfo":"b"},"history":[{}]}"#,
        )
        .unwrap();
        assert_eq!(owner.person.bio_info, "b");
        assert_eq!(owner.history.len(), 1);
        assert_eq!(owner.to_active_model().bio_info, Set("b".to_string()));
    }

    #[test]
    fn test_update_model_preserves_identity_columns() {
        let model = cafe().to_update_model(7);
        assert_eq!(model.id, Set(7));
        assert_eq!(model.added_by, NotSet);
        assert_eq!(model.created_at, NotSet);
    }
}

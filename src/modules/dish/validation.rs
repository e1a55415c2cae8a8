use super::repository::DishPayload;
use crate::utils::validation::{self, Checked};
use serde::Deserialize;
use serde_json::Value;

const PRICE_MESSAGE: &str = "Dish must have a price that is an integer greater than 0";

/// Dish attributes exactly as they arrived in the request body.
#[derive(Deserialize, Default, Debug)]
pub struct RawDish {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

/// name → description → price → image_url → price is a positive number
pub fn validate(raw: &RawDish) -> Checked<DishPayload> {
    let name = validation::required_text(&raw.name, "Dish must include a name")?;
    let description =
        validation::required_text(&raw.description, "Dish must include a description")?;
    let price = validation::required(&raw.price, "Dish must include a price")?;
    let image_url = validation::required_text(&raw.image_url, "Dish must include a image_url")?;
    let price = validation::positive_number(price, PRICE_MESSAGE)?;

    Ok(DishPayload {
        name,
        description,
        price,
        image_url,
    })
}

/// Same as [`validate`], preceded by the route/body id check.
pub fn validate_update(raw: &RawDish, dish_id: &str) -> Checked<DishPayload> {
    validation::id_matches(&raw.id, dish_id, |id| {
        format!("Dish id does not match route id. Dish: {id}, Route: {dish_id}")
    })?;

    validate(raw)
}

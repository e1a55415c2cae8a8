use super::repository::{CreateOrderPayload, OrderDish, OrderStatus, UpdateOrderPayload};
use crate::utils::validation::{self, Checked};
use serde::Deserialize;
use serde_json::{Map, Value};

const STATUS_MESSAGE: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Order attributes exactly as they arrived in the request body.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

fn dish_reference(entry: &Value, index: usize) -> String {
    match entry.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => index.to_string(),
    }
}

fn order_dish(entry: &Value, index: usize) -> Checked<OrderDish> {
    let reference = dish_reference(entry, index);
    let quantity = validation::positive_integer(
        entry.get("quantity"),
        &format!("Dish {reference} must have a quantity that is an integer greater than 0"),
    )?;

    let mut details = entry.as_object().cloned().unwrap_or_else(Map::new);
    details.remove("quantity");

    Ok(OrderDish { quantity, details })
}

/// Every line must carry a positive integer quantity.
fn order_dishes(dishes: &Value) -> Checked<Vec<OrderDish>> {
    validation::non_empty_array(dishes, "Order must include at least one dish")?
        .iter()
        .enumerate()
        .map(|(index, entry)| order_dish(entry, index))
        .collect()
}

/// deliverTo → mobileNumber → dishes → non-empty dishes → quantities
pub fn validate_create(raw: &RawOrder) -> Checked<CreateOrderPayload> {
    let deliver_to = validation::required_text(&raw.deliver_to, "Order must include a deliverTo")?;
    let mobile_number =
        validation::required_text(&raw.mobile_number, "Order must include a mobileNumber")?;
    let dishes = validation::required(&raw.dishes, "Order must include a dish")?;
    let dishes = order_dishes(dishes)?;

    Ok(CreateOrderPayload {
        deliver_to,
        mobile_number,
        dishes,
    })
}

/// id match → deliverTo → mobileNumber → dishes → status → non-empty dishes → quantities
pub fn validate_update(raw: &RawOrder, order_id: &str) -> Checked<UpdateOrderPayload> {
    validation::id_matches(&raw.id, order_id, |id| {
        format!("Order id does not match route id. Order: {id}, Route: {order_id}.")
    })?;

    let deliver_to = validation::required_text(&raw.deliver_to, "Order must include a deliverTo")?;
    let mobile_number =
        validation::required_text(&raw.mobile_number, "Order must include a mobileNumber")?;
    let dishes = validation::required(&raw.dishes, "Order must include a dish")?;
    let status = validation::required_text(&raw.status, STATUS_MESSAGE)?;
    let status = validation::one_of::<OrderStatus>(&status, STATUS_MESSAGE)?;
    let dishes = order_dishes(dishes)?;

    Ok(UpdateOrderPayload {
        deliver_to,
        mobile_number,
        status,
        dishes,
    })
}

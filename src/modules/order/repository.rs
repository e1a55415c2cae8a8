use crate::utils::{
    id,
    repository::{Deletion, Entity, Repository},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out-for-delivery",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "out-for-delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// One line of an order. Everything besides `quantity`, the dish `id`
/// included, is kept exactly as sent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDish {
    pub quantity: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub enum Error {
    UnexpectedError,
}

pub fn is_deletable(order: &Order) -> bool {
    order.status == OrderStatus::Pending
}

pub async fn find_many(repo: &dyn Repository<Order>) -> Result<Vec<Order>, Error> {
    repo.find_many().await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch orders: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id(repo: &dyn Repository<Order>, id: String) -> Result<Option<Order>, Error> {
    repo.find_by_id(&id).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch an order by id: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create(
    repo: &dyn Repository<Order>,
    payload: CreateOrderPayload,
) -> Result<Order, Error> {
    repo.create(Order {
        id: id::next_id(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: OrderStatus::default(),
        dishes: payload.dishes,
    })
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn update_by_id(
    repo: &dyn Repository<Order>,
    id: String,
    payload: UpdateOrderPayload,
) -> Result<Option<Order>, Error> {
    let order = Order {
        id: id.clone(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };

    repo.update_by_id(&id, order).await.map_err(|err| {
        tracing::error!("Error occurred while trying to update an order: {}", err);
        Error::UnexpectedError
    })
}

/// Removes the order only while it is still deletable.
pub async fn delete_by_id(
    repo: &dyn Repository<Order>,
    id: String,
) -> Result<Deletion<Order>, Error> {
    repo.delete_by_id_if(&id, is_deletable).await.map_err(|err| {
        tracing::error!("Error occurred while trying to delete an order: {}", err);
        Error::UnexpectedError
    })
}

fn seed_line(dish_id: &str, quantity: u32) -> OrderDish {
    let mut details = Map::new();
    details.insert(String::from("id"), Value::from(dish_id));

    OrderDish { quantity, details }
}

pub fn seed() -> Vec<Order> {
    vec![
        Order {
            id: String::from("01HZX4B2C7D8E9F0G1H2J3K4LM"),
            deliver_to: String::from("308 Negra Arroyo Lane, Albuquerque, NM"),
            mobile_number: String::from("(505) 143-3369"),
            status: OrderStatus::Delivered,
            dishes: vec![seed_line("01HZX3V9Q4T5K7M2N8P6R1S3AB", 2)],
        },
        Order {
            id: String::from("01HZX4B2C7D8E9F0G1H2J3K4LN"),
            deliver_to: String::from("1600 Pennsylvania Avenue NW, Washington, DC 20500"),
            mobile_number: String::from("(202) 456-1111"),
            status: OrderStatus::Pending,
            dishes: vec![
                seed_line("01HZX3V9Q4T5K7M2N8P6R1S3AC", 1),
                seed_line("01HZX3V9Q4T5K7M2N8P6R1S3AE", 3),
            ],
        },
        Order {
            id: String::from("01HZX4B2C7D8E9F0G1H2J3K4LP"),
            deliver_to: String::from("221B Baker Street, London"),
            mobile_number: String::from("(020) 7224-3688"),
            status: OrderStatus::OutForDelivery,
            dishes: vec![seed_line("01HZX3V9Q4T5K7M2N8P6R1S3AD", 1)],
        },
    ]
}

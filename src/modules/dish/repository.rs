use crate::utils::{
    id,
    repository::{Entity, Repository},
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Entity for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Validated dish attributes, everything but the id.
#[derive(Clone, Debug, PartialEq)]
pub struct DishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl DishPayload {
    fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

pub enum Error {
    UnexpectedError,
}

pub async fn find_many(repo: &dyn Repository<Dish>) -> Result<Vec<Dish>, Error> {
    repo.find_many().await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch dishes: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id(repo: &dyn Repository<Dish>, id: String) -> Result<Option<Dish>, Error> {
    repo.find_by_id(&id).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch a dish by id: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create(repo: &dyn Repository<Dish>, payload: DishPayload) -> Result<Dish, Error> {
    repo.create(payload.into_dish(id::next_id()))
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a dish: {}", err);
            Error::UnexpectedError
        })
}

pub async fn update_by_id(
    repo: &dyn Repository<Dish>,
    id: String,
    payload: DishPayload,
) -> Result<Option<Dish>, Error> {
    repo.update_by_id(&id, payload.into_dish(id.clone()))
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to update a dish: {}", err);
            Error::UnexpectedError
        })
}

fn seed_dish(id: &str, name: &str, description: &str, price: u64, image_url: &str) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Number::from(price),
        image_url: image_url.to_string(),
    }
}

/// The menu the service starts with when seeding is enabled.
pub fn seed() -> Vec<Dish> {
    vec![
        seed_dish(
            "01HZX3V9Q4T5K7M2N8P6R1S3AB",
            "Dolcelatte and chickpea spaghetti",
            "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            19,
            "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg?h=530&w=350",
        ),
        seed_dish(
            "01HZX3V9Q4T5K7M2N8P6R1S3AC",
            "Falafel and tahini bagel",
            "A warm bagel filled with falafel and tahini",
            6,
            "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg?h=530&w=350",
        ),
        seed_dish(
            "01HZX3V9Q4T5K7M2N8P6R1S3AD",
            "Goat cheese and pickled beet salad",
            "Roasted beets, creamy goat cheese and candied walnuts",
            11,
            "https://images.pexels.com/photos/1211887/pexels-photo-1211887.jpeg?h=530&w=350",
        ),
        seed_dish(
            "01HZX3V9Q4T5K7M2N8P6R1S3AE",
            "Mushroom risotto",
            "Arborio rice slow-cooked with porcini and parmesan",
            16,
            "https://images.pexels.com/photos/6406460/pexels-photo-6406460.jpeg?h=530&w=350",
        ),
    ]
}

//! Meal Commands

use std::collections::BTreeMap;

use ipc_contract::{MealCmd, MealMap, MealReply};
use uuid::Uuid;

use super::{Expected, Ipc, Reported};

pub async fn get_meals(ipc: &Ipc) -> Result<MealMap, Reported> {
    let expected = Expected::One("gotMeals");
    match ipc.request::<MealReply>(MealCmd::GetMeals, expected).await? {
        MealReply::GotMeals { data } => Ok(data),
        other => ipc.unexpected(expected, &other),
    }
}

pub async fn add_meal(
    ipc: &Ipc,
    name: String,
    short: String,
    components: BTreeMap<Uuid, Option<Uuid>>,
) -> Result<(), Reported> {
    let expected = Expected::One("addedMeal");
    match ipc.request::<MealReply>(MealCmd::AddMeal { name, short, components }, expected).await? {
        MealReply::AddedMeal => Ok(()),
        other => ipc.unexpected(expected, &other),
    }
}

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub name: Option<String>,
    pub model: String,
    pub vin: String,
    pub trim_badging: Option<String>,
    pub exterior_color: Option<String>,
}

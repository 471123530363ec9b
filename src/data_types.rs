use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// One normalized week of canteen data, keyed by "YYYY-MM-DD" for Monday
/// through Friday. `info` is present only when the payload carried an
/// account section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekMenu {
    #[serde(flatten)]
    pub days: BTreeMap<String, DayRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<AccountInfo>,
}

/// A single day. A closed day serializes to exactly `{"isCooking": false}`
/// with no other fields.
#[derive(Debug, Clone, PartialEq)]
pub enum DayRecord {
    Closed,
    Cooking(DayMenu),
}

impl DayRecord {
    pub fn is_cooking(&self) -> bool {
        matches!(self, DayRecord::Cooking(_))
    }
}

impl Serialize for DayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayRecord::Closed => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("isCooking", &false)?;
                map.end()
            }
            DayRecord::Cooking(day) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("isCooking", &true)?;
                // pass-through flag, omitted entirely when absent upstream
                if let Some(flag) = &day.is_rating {
                    map.serialize_entry("isRating", flag)?;
                }
                map.serialize_entry("pick", &day.pick)?;
                map.serialize_entry("menus", &day.menus)?;
                map.serialize_entry("reviews", &day.reviews)?;
                map.end()
            }
        }
    }
}

/// Cooking-day contents, keyed by menu index "1"/"2".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayMenu {
    pub is_rating: Option<Value>,
    pub pick: MealPick,
    pub menus: BTreeMap<String, Vec<MenuItem>>,
    pub reviews: BTreeMap<String, ReviewSummary>,
}

/// The boarder's recorded selection for a day, serialized as 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MealPick {
    #[default]
    None,
    First,
    Second,
}

impl MealPick {
    pub fn as_number(self) -> u8 {
        match self {
            MealPick::None => 0,
            MealPick::First => 1,
            MealPick::Second => 2,
        }
    }
}

impl Serialize for MealPick {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub weight: u32,
}

/// Aggregated ratings for one menu index. `NoData` is kept as its own
/// variant internally and only encoded as `{"average": -1.0, "amount": 0}`
/// at the serialization boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewSummary {
    NoData,
    Rated { average: f64, amount: u32 },
}

impl ReviewSummary {
    pub fn average(&self) -> f64 {
        match self {
            ReviewSummary::NoData => -1.0,
            ReviewSummary::Rated { average, .. } => *average,
        }
    }

    pub fn amount(&self) -> u32 {
        match self {
            ReviewSummary::NoData => 0,
            ReviewSummary::Rated { amount, .. } => *amount,
        }
    }
}

impl Serialize for ReviewSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("average", &self.average())?;
        map.serialize_entry("amount", &self.amount())?;
        map.end()
    }
}

/// Boarder identity and credit metadata from the payload's account section.
/// `credit` and `days` are upstream values passed through verbatim, null
/// when the payload lacks them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub id: Option<i64>,
    pub credit: Value,
    pub days: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<BoarderName>,
}

/// Name fields are independently optional; the struct itself is only built
/// when at least one of them exists upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoarderName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<Value>,
}

/// Meal slot of the day; the numeric index the order endpoint keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlotKind {
    Snack,
    Lunch,
    AfternoonSnack,
}

impl MealSlotKind {
    pub fn index(self) -> u8 {
        match self {
            MealSlotKind::Snack => 1,
            MealSlotKind::Lunch => 2,
            MealSlotKind::AfternoonSnack => 3,
        }
    }
}

use std::time::Instant;

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::constants::{CHOICE_LETTERS, SIGN_OFF_CHOICE};
use crate::data_types::MealSlotKind;
use crate::errors::MenuError;
use crate::session::EdupageSession;

/// Order menu `number` (1-based, menu 1 = choice "A") for a day's slot.
pub async fn choose_meal(
    session: &EdupageSession,
    boarder_id: i64,
    date: NaiveDate,
    slot: MealSlotKind,
    number: u8,
) -> Result<(), MenuError> {
    let choice = (number as usize)
        .checked_sub(1)
        .and_then(|i| CHOICE_LETTERS.get(i..i + 1))
        .ok_or(MenuError::MealChangeRejected)?;

    submit_choice(session, boarder_id, date, slot, choice).await
}

/// Withdraw the boarder's order for a day's slot.
pub async fn sign_off_meal(
    session: &EdupageSession,
    boarder_id: i64,
    date: NaiveDate,
    slot: MealSlotKind,
) -> Result<(), MenuError> {
    submit_choice(session, boarder_id, date, slot, SIGN_OFF_CHOICE).await
}

async fn submit_choice(
    session: &EdupageSession,
    boarder_id: i64,
    date: NaiveDate,
    slot: MealSlotKind,
    choice: &str,
) -> Result<(), MenuError> {
    if !session.is_logged_in() {
        return Err(MenuError::NotAuthenticated);
    }

    let mut jids = Map::new();
    jids.insert(slot.index().to_string(), Value::String(choice.to_string()));

    let boarder_menu = json!({
        "stravnikid": boarder_id.to_string(),
        "mysqlDate": date.format("%Y-%m-%d").to_string(),
        "jids": jids,
        "view": "pc_listok",
        "pravo": "Student",
    });

    let form = [
        ("akcia", "ulozJedlaStravnika".to_string()),
        ("jedlaStravnika", boarder_menu.to_string()),
    ];

    let now = Instant::now();
    let response = session.post_form(&session.menu_url(), &form).await?;
    log::debug!("meal change response: {:.2?}", now.elapsed());

    // an empty error string is the success marker
    match parse_action_response(&response)?.get("error").and_then(Value::as_str) {
        Some("") => Ok(()),
        _ => Err(MenuError::MealChangeRejected),
    }
}

/// Rate the day's lunch: both scores are the upstream 1..=5 scale.
pub async fn rate_meal(
    session: &EdupageSession,
    boarder_id: i64,
    date: NaiveDate,
    quality: u8,
    quantity: u8,
) -> Result<(), MenuError> {
    if !session.is_logged_in() {
        return Err(MenuError::NotAuthenticated);
    }

    let form = [
        ("akcia", "ulozHodnotenia".to_string()),
        ("stravnikid", boarder_id.to_string()),
        ("mysqlDate", date.format("%Y-%m-%d").to_string()),
        ("jedlo_dna", MealSlotKind::Lunch.index().to_string()),
        ("kvalita", quality.to_string()),
        ("mnozstvo", quantity.to_string()),
    ];

    let now = Instant::now();
    let response = session.post_form(&session.menu_url(), &form).await?;
    log::debug!("rating response: {:.2?}", now.elapsed());

    // here a missing error field also means failure, matching upstream
    match parse_action_response(&response)?.get("error").and_then(Value::as_str) {
        Some("") => Ok(()),
        _ => Err(MenuError::RatingRejected),
    }
}

fn parse_action_response(response: &str) -> Result<Value, MenuError> {
    serde_json::from_str(response).map_err(|e| MenuError::MalformedPayload(e.to_string()))
}

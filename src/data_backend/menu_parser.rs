use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{Datelike, Duration, NaiveDate};
use serde_json::{Map, Value};

use crate::constants::{
    FIRST_MENU_CODE, MENU_INDEXES, NOT_COOKING_FLAG, OPERATOR_KEY, PAYLOAD_DELIMITER,
    PAYLOAD_MARKER, PRIMARY_SLOT_CODE, SECOND_MENU_CODE, SLOT_CODES, UPDATED_MENU_KEY,
    WITHDRAWN_STATUS,
};
use crate::data_backend::{clean_dish_name, coerce_weight, is_truthy, value_as_f64, value_as_i64};
use crate::data_types::{
    AccountInfo, BoarderName, DayMenu, DayRecord, MealPick, MenuItem, ReviewSummary, WeekMenu,
};
use crate::errors::MenuError;
use crate::session::EdupageSession;

/// Fetch the canteen page for the week containing `date` and normalize it.
pub async fn fetch_week_menu(
    session: &EdupageSession,
    date: NaiveDate,
) -> Result<WeekMenu, MenuError> {
    if !session.is_logged_in() {
        return Err(MenuError::NotAuthenticated);
    }

    let url = format!("{}?date={}", session.menu_url(), date.format("%Y%m%d"));

    let now = Instant::now();
    let body = session.get_text(&url).await?;
    log::debug!("menu response: {:.2?}", now.elapsed());

    let payload = extract_embedded_payload(&body)?;
    Ok(assemble_week(date, &payload))
}

/// Isolate and parse the JSON literal embedded in the /menu/ script
/// response: everything after the marker, up to the first delimiter.
pub fn extract_embedded_payload(response: &str) -> Result<Value, MenuError> {
    let (_, after_marker) = response.split_once(PAYLOAD_MARKER).ok_or_else(|| {
        MenuError::MalformedPayload(format!("marker {PAYLOAD_MARKER:?} not found"))
    })?;

    let literal = after_marker
        .split(PAYLOAD_DELIMITER)
        .next()
        .unwrap_or(after_marker);

    serde_json::from_str(literal).map_err(|e| MenuError::MalformedPayload(e.to_string()))
}

/// Normalize the Monday..Friday of the week containing `reference_date`.
/// Days the payload does not mention come out as closed.
pub fn assemble_week(reference_date: NaiveDate, payload: &Value) -> WeekMenu {
    let root = week_root(payload);

    let monday =
        reference_date - Duration::days(reference_date.weekday().num_days_from_monday() as i64);

    let mut days = BTreeMap::new();
    for offset in 0..5 {
        let date_key = (monday + Duration::days(offset)).format("%Y-%m-%d").to_string();
        let record = match root.get(&date_key) {
            Some(raw_day) => normalize_day(raw_day),
            None => DayRecord::Closed,
        };
        days.insert(date_key, record);
    }

    WeekMenu {
        days,
        info: extract_account_info(root),
    }
}

/// The per-day records live either in the operator's updated schedule, in
/// the operator section directly, or at the payload root. First object wins.
fn week_root(payload: &Value) -> &Value {
    if let Some(updated) = payload.pointer(&format!("/{OPERATOR_KEY}/{UPDATED_MENU_KEY}")) {
        if updated.is_object() {
            return updated;
        }
    }

    if let Some(operator) = payload.get(OPERATOR_KEY) {
        if operator.is_object() {
            return operator;
        }
    }

    payload
}

/// Turn one day's raw slot variants into the uniform day record.
pub fn normalize_day(raw_day: &Value) -> DayRecord {
    let Some(merged) = merge_slot_variants(raw_day) else {
        return DayRecord::Closed;
    };

    let mut day = DayMenu {
        is_rating: merged.get("isRating").cloned(),
        pick: derive_pick(merged.get("evidencia")),
        ..DayMenu::default()
    };

    for index in MENU_INDEXES {
        day.menus
            .insert(index.to_string(), menu_rows(merged.get("menus"), index));
        day.reviews.insert(
            index.to_string(),
            aggregate_reviews(merged.get("hodnotenia").and_then(|h| h.get(index))),
        );
    }

    DayRecord::Cooking(day)
}

/// Pick the authoritative slot variant for a day. Code "2" is taken
/// wholesale when present; otherwise the remaining codes are overlaid in
/// fixed order, later codes winning on key conflicts. Returns None when
/// the day ends up not cooking.
pub(crate) fn merge_slot_variants(raw_day: &Value) -> Option<Map<String, Value>> {
    let variants = raw_day.as_object()?;

    let mut merged = match variants.get(PRIMARY_SLOT_CODE) {
        Some(Value::Object(primary)) => primary.clone(),
        _ => {
            let mut acc = Map::new();
            for code in SLOT_CODES {
                if let Some(Value::Object(variant)) = variants.get(code) {
                    for (key, value) in variant {
                        acc.insert(key.clone(), value.clone());
                    }
                }
            }
            acc
        }
    };

    merged.remove(NOT_COOKING_FLAG);

    if merged.get("isCooking").is_some_and(is_truthy) {
        Some(merged)
    } else {
        None
    }
}

/// Selection state from the day's evidencia record. The withdrawal status
/// wins over any choice code; unknown codes count as no selection.
fn derive_pick(record: Option<&Value>) -> MealPick {
    let Some(record) = record.and_then(Value::as_object) else {
        return MealPick::None;
    };

    if record.get("stav").and_then(Value::as_str) == Some(WITHDRAWN_STATUS) {
        return MealPick::None;
    }

    match record.get("obj").and_then(Value::as_str) {
        Some(FIRST_MENU_CODE) => MealPick::First,
        Some(SECOND_MENU_CODE) => MealPick::Second,
        Some(other) => {
            log::warn!("unknown meal selection code {other:?}, treating as no selection");
            MealPick::None
        }
        None => MealPick::None,
    }
}

/// Dish rows for one menu index, in payload order. Rows without a usable
/// name after cleaning are dropped.
fn menu_rows(menus: Option<&Value>, index: &str) -> Vec<MenuItem> {
    let Some(rows) = menus
        .and_then(|m| m.get(index))
        .and_then(|m| m.get("rows"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for row in rows {
        let Some(row) = row.as_object() else { continue };

        let name = clean_dish_name(row.get("nazov"));
        if name.is_empty() {
            continue;
        }

        items.push(MenuItem {
            name,
            weight: coerce_weight(row),
        });
    }

    items
}

/// Collapse a menu index's rating entries into average + count. The count
/// comes from the first raw entry only; entries without a usable average
/// are ignored, and no usable entries at all means no data.
pub(crate) fn aggregate_reviews(entries: Option<&Value>) -> ReviewSummary {
    let Some(entries) = entries.and_then(Value::as_array) else {
        return ReviewSummary::NoData;
    };

    let averages: Vec<f64> = entries
        .iter()
        .filter_map(|entry| entry.get("priemer"))
        .filter_map(value_as_f64)
        .collect();

    if averages.is_empty() {
        return ReviewSummary::NoData;
    }

    let mean = averages.iter().sum::<f64>() / averages.len() as f64;
    let amount = entries
        .first()
        .and_then(|entry| entry.get("pocet"))
        .and_then(value_as_i64)
        .unwrap_or(0)
        .max(0) as u32;

    ReviewSummary::Rated {
        average: (mean * 100.0).round() / 100.0,
        amount,
    }
}

/// Boarder identity/credit metadata from the account section, under either
/// casing of its key. None means the payload carried no such section and
/// the `info` key is omitted from the result.
pub fn extract_account_info(root: &Value) -> Option<AccountInfo> {
    let section = [root.get("addInfo"), root.get("addinfo")]
        .into_iter()
        .flatten()
        .find(|section| is_truthy(section))?
        .as_object()?;

    let id = section
        .get("stravnikid")
        .filter(|sid| is_truthy(sid))
        .or_else(|| {
            section
                .get("strRow")
                .and_then(Value::as_object)
                .and_then(|row| row.get("stravnikid"))
        })
        .and_then(value_as_i64);

    let credit = match section.get("kredit") {
        Some(credit) if !credit.is_null() => credit.clone(),
        _ => section
            .get("info2")
            .and_then(|info2| info2.pointer("/kredit"))
            .cloned()
            .unwrap_or(Value::Null),
    };

    let days = section
        .get("info2")
        .and_then(|info2| info2.pointer("/pocetDni"))
        .cloned()
        .unwrap_or(Value::Null);

    let user = section
        .get("strRow")
        .and_then(Value::as_object)
        .and_then(|row| {
            let user = BoarderName {
                name: row.get("meno").cloned(),
                surname: row.get("priezvisko").cloned(),
            };
            (user.name.is_some() || user.surname.is_some()).then_some(user)
        });

    Some(AccountInfo {
        id,
        credit,
        days,
        user,
    })
}

use chrono::NaiveDate;
use serde_json::json;

use edupage_menu_rs::{assemble_week, extract_account_info};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

#[test]
fn info_is_omitted_without_an_account_section() {
    let week = assemble_week(reference(), &json!({"robotnik": {}}));
    assert!(week.info.is_none());

    let serialized = serde_json::to_value(&week).unwrap();
    assert!(serialized.get("info").is_none());

    // an empty section counts as absent too
    let week = assemble_week(reference(), &json!({"addInfo": {}}));
    assert!(week.info.is_none());
}

#[test]
fn full_account_section_is_extracted() {
    let root = json!({
        "addInfo": {
            "stravnikid": "12345",
            "kredit": 14.2,
            "info2": {"pocetDni": 21},
            "strRow": {"meno": "Jana", "priezvisko": "Nováková"},
        }
    });

    let info = extract_account_info(&root).unwrap();
    assert_eq!(info.id, Some(12345));
    assert_eq!(info.credit, json!(14.2));
    assert_eq!(info.days, json!(21));

    let user = info.user.unwrap();
    assert_eq!(user.name, Some(json!("Jana")));
    assert_eq!(user.surname, Some(json!("Nováková")));
}

#[test]
fn lowercase_section_key_is_a_fallback() {
    let root = json!({"addinfo": {"stravnikid": 99}});

    let info = extract_account_info(&root).unwrap();
    assert_eq!(info.id, Some(99));
}

#[test]
fn boarder_id_falls_back_to_the_detail_record() {
    let root = json!({
        "addInfo": {"strRow": {"stravnikid": "314"}}
    });

    let info = extract_account_info(&root).unwrap();
    assert_eq!(info.id, Some(314));
}

#[test]
fn unparseable_boarder_id_is_explicit_null() {
    let root = json!({"addInfo": {"stravnikid": "abc", "kredit": 1}});

    let info = extract_account_info(&root).unwrap();
    assert_eq!(info.id, None);

    let serialized = serde_json::to_value(&info).unwrap();
    assert_eq!(serialized.get("id"), Some(&json!(null)));
}

#[test]
fn null_credit_falls_back_to_secondary_info() {
    let root = json!({
        "addInfo": {
            "stravnikid": 5,
            "kredit": null,
            "info2": {"kredit": "7.50", "pocetDni": 3},
        }
    });

    let info = extract_account_info(&root).unwrap();
    assert_eq!(info.credit, json!("7.50"));
    assert_eq!(info.days, json!(3));
}

#[test]
fn user_is_built_from_whichever_name_fields_exist() {
    let root = json!({"addInfo": {"stravnikid": 5, "strRow": {"priezvisko": "Novák"}}});
    let info = extract_account_info(&root).unwrap();
    let user = info.user.unwrap();
    assert_eq!(user.name, None);
    assert_eq!(user.surname, Some(json!("Novák")));

    let serialized = serde_json::to_value(&user).unwrap();
    assert_eq!(serialized, json!({"surname": "Novák"}));

    // a detail record without name fields means no user at all
    let root = json!({"addInfo": {"stravnikid": 5, "strRow": {"trieda": "3.B"}}});
    assert!(extract_account_info(&root).unwrap().user.is_none());
}

#[test]
fn account_info_rides_along_with_the_week() {
    let payload = json!({
        "robotnik": {"novyListok": {
            "addInfo": {"stravnikid": "8", "kredit": 2},
        }}
    });

    let week = assemble_week(reference(), &payload);
    let info = week.info.unwrap();
    assert_eq!(info.id, Some(8));
    assert_eq!(info.credit, json!(2));
    assert_eq!(info.days, json!(null));
}

/// Textual marker preceding the JSON literal embedded in the /menu/ response.
pub const PAYLOAD_MARKER: &str = "edupageData: ";
/// Delimiter terminating the embedded JSON literal.
pub const PAYLOAD_DELIMITER: &str = ",\r\n";

/// Top-level payload section holding the canteen operator's data.
pub const OPERATOR_KEY: &str = "robotnik";
/// Updated week schedule nested inside the operator section.
pub const UPDATED_MENU_KEY: &str = "novyListok";

/// Slot variant codes a single day can appear under, in overlay order.
pub const SLOT_CODES: [&str; 3] = ["2", "0", "4"];
/// The richest variant; used exclusively when present.
pub const PRIMARY_SLOT_CODE: &str = "2";
/// Synthetic "not cooking" noise flag, always dropped after merging.
pub const NOT_COOKING_FLAG: &str = "nevarisa";

/// The two alternative menus offered per day.
pub const MENU_INDEXES: [&str; 2] = ["1", "2"];

/// Dish weight shows up under any of these keys; probed in order.
pub const WEIGHT_KEYS: [&str; 4] = ["hmotnostiStr", "hmotnostStr", "hmotnosti", "hmotnost"];

/// evidencia status meaning the boarder withdrew their order.
pub const WITHDRAWN_STATUS: &str = "X";
/// evidencia choice code for the first menu.
pub const FIRST_MENU_CODE: &str = "A";
/// evidencia choice code for the second menu.
pub const SECOND_MENU_CODE: &str = "B";

/// Choice letters accepted by the order endpoint, menu number 1 = 'A'.
pub const CHOICE_LETTERS: &str = "ABCDEFGH";
/// Choice string that signs the boarder off a day.
pub const SIGN_OFF_CHOICE: &str = "AX";

//! Client for the EduPage school canteen. Fetches the weekly menu page,
//! normalizes the loosely structured payload embedded in it into a uniform
//! Monday..Friday structure, and submits meal choices and ratings.

pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod session;

pub use data_backend::menu_actions::{choose_meal, rate_meal, sign_off_meal};
pub use data_backend::menu_parser::{
    assemble_week, extract_account_info, extract_embedded_payload, fetch_week_menu, normalize_day,
};
pub use data_types::{
    AccountInfo, BoarderName, DayMenu, DayRecord, MealPick, MealSlotKind, MenuItem, ReviewSummary,
    WeekMenu,
};
pub use errors::MenuError;
pub use session::EdupageSession;

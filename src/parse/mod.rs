mod menu_table;
mod menu_text;
mod static_selector;

pub use menu_table::{extract, NO_MENU_NOTICE};
pub use menu_text::{parse_menu, ParsedMenu};

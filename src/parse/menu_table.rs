use chrono::Weekday;
use scraper::Html;

use crate::menu::MenuItem;
use crate::static_selector;

/// Meal categories published on the co-op board. Rows carrying any other
/// label (weekday headers, notices, breakfast rows) are skipped.
const CATEGORIES: [&str; 3] = ["중식(백반)", "중식(일품)", "석식"];

/// Table column for each weekday, indexed by days from Sunday.
/// The board lays out Mon..Sat in columns 1..=6 and keeps Sunday in a
/// trailing column 7, so this must stay a lookup table, not a formula.
const DAY_COLUMNS: [usize; 7] = [7, 1, 2, 3, 4, 5, 6];

/// Placeholder the board shows when a cell has no menu registered.
pub const NO_MENU_NOTICE: &str = "❝오늘 등록된 메뉴가 없습니다.❞";

/// Pulls today's cell for each known meal category out of the menu board
/// markup, in document row order.
///
/// Structural absences are data, not errors: a missing `#menuBox` table
/// yields an empty list, and an absent or blank cell yields
/// [`NO_MENU_NOTICE`] as the menu text.
pub fn extract(html: &str, today: Weekday) -> Vec<MenuItem> {
    static_selector!(ROW_SELECTOR <- "#menuBox tr");
    static_selector!(CELL_SELECTOR <- "td");

    let document = Html::parse_document(html);
    let column = DAY_COLUMNS[today.num_days_from_sunday() as usize];

    let mut items = Vec::new();
    for row in document.select(&ROW_SELECTOR) {
        let cells = row.select(&CELL_SELECTOR).collect::<Vec<_>>();
        if cells.len() < 2 {
            continue;
        }
        let category = cells[0].text().collect::<String>();
        let category = category.trim();
        if !CATEGORIES.contains(&category) {
            continue;
        }
        let menu = cells
            .get(column)
            .map(|cell| cell.inner_html().trim().replace("<br>", "\n"))
            .filter(|menu| !menu.is_empty())
            .unwrap_or_else(|| NO_MENU_NOTICE.to_owned());
        items.push(MenuItem {
            category: category.to_owned(),
            menu,
        });
    }
    items
}

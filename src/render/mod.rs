use crate::menu::RestaurantMenu;
use crate::parse::{parse_menu, ParsedMenu};

const PAGE_TITLE: &str = "인천대 오늘의 학식";

/// Renders the daily menu page for a list of venues. With nothing to
/// show the page carries a loading indicator instead of an empty table.
pub fn page(menus: &[RestaurantMenu]) -> String {
    let mut body = String::new();
    if menus.is_empty() {
        body.push_str("<p class=\"loading\">Loading...</p>");
    } else {
        for menu in menus {
            restaurant_section(&mut body, menu);
        }
    }
    format!(
        "<!DOCTYPE html>\
         <html lang=\"ko\">\
         <head><meta charset=\"utf-8\"><title>{PAGE_TITLE}</title></head>\
         <body><h1>{PAGE_TITLE}</h1>{body}</body>\
         </html>"
    )
}

fn restaurant_section(out: &mut String, menu: &RestaurantMenu) {
    out.push_str(&format!(
        "<section><h2>{}</h2>\
         <table><tr><th>Category</th><th>Menu</th></tr>",
        escape(&menu.restaurant)
    ));
    for item in &menu.items {
        let ParsedMenu {
            items,
            kcal,
            general_price,
            member_price,
        } = parse_menu(&item.menu);
        out.push_str(&format!(
            "<tr><td>{}<br>{}<br>일반인 {}<br>구성원 {}</td><td>",
            escape(&item.category),
            escape(&kcal),
            escape(&general_price),
            escape(&member_price),
        ));
        for line in &items {
            out.push_str(&format!("<div>{}</div>", escape(line)));
        }
        out.push_str("</td></tr>");
    }
    out.push_str("</table></section>");
}

/// Scraped cell markup is untrusted; everything interpolated into the
/// page goes through here first.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuItem;

    #[test]
    fn test_empty_menus_show_loading_indicator() {
        let html = page(&[]);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_page_renders_parsed_fields() {
        let menus = [RestaurantMenu {
            restaurant: "학생 식당".to_owned(),
            items: vec![MenuItem {
                category: "중식(백반)".to_owned(),
                menu: "백미밥\n열량 850kcal\n일반 5,500원 / 구성원 4,500원".to_owned(),
            }],
        }];
        let html = page(&menus);
        assert!(html.contains("<h2>학생 식당</h2>"));
        assert!(html.contains("일반인 5,500원"));
        assert!(html.contains("구성원 4,500원"));
        assert!(html.contains("열량 850kcal"));
        assert!(html.contains("<div>백미밥</div>"));
    }

    #[test]
    fn test_scraped_markup_is_escaped() {
        let menus = [RestaurantMenu {
            restaurant: "학생 식당".to_owned(),
            items: vec![MenuItem {
                category: "석식".to_owned(),
                menu: "<script>alert(1)</script>".to_owned(),
            }],
        }];
        let html = page(&menus);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

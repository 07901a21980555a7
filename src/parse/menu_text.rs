use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// The board appends notices to each cell after a run of dashes; nothing
/// past the first separator is menu data.
const FOOTER_SEPARATOR: &str = "--------------";

/// Display-ready fields derived from one category cell's raw text.
/// Recomputed on every render, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMenu {
    pub items: Vec<String>,
    pub kcal: String,
    pub general_price: String,
    pub member_price: String,
}

/// Splits a raw cell blob into menu lines plus the calorie line and the
/// two price tiers (general public, then co-op members).
///
/// Lines stay in source order. A cell holding only the no-menu
/// placeholder is not special-cased; it falls out as a single item line
/// with empty metadata.
pub fn parse_menu(raw: &str) -> ParsedMenu {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    // 1-2 digits, optional thousands comma, up to 3 more digits, won sign
    let price_re = PRICE_RE
        .get_or_init(|| Regex::new(r"[0-9]{1,2},?[0-9]{0,3}원").expect("regex should be valid"));

    let body = raw.split(FOOTER_SEPARATOR).next().unwrap_or_default().trim();
    let lines = body.split('\n').collect::<Vec<_>>();

    let kcal = lines
        .iter()
        .find(|line| line.to_lowercase().contains("kcal"))
        .map_or_else(String::new, |line| (*line).to_owned());

    let mut prices = lines
        .iter()
        .find(|line| line.contains('원'))
        .map(|line| price_re.find_iter(line))
        .into_iter()
        .flatten()
        .map(|found| found.as_str().to_owned());
    let general_price = prices.next().unwrap_or_default();
    let member_price = prices.next().unwrap_or_default();

    let items = lines
        .iter()
        .filter(|line| !line.contains('원') && !line.to_lowercase().contains("kcal"))
        .map(|line| (*line).to_owned())
        .collect();

    ParsedMenu {
        items,
        kcal,
        general_price,
        member_price,
    }
}

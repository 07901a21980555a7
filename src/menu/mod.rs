use serde::Serialize;

/// One category's cell for the day, exactly as scraped. `menu` is
/// newline-delimited and may hold the board's no-menu placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub category: String,
    pub menu: String,
}

/// One venue's categories for the day. The display name is chosen by
/// the caller, not read off the scraped page.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantMenu {
    pub restaurant: String,
    pub items: Vec<MenuItem>,
}

/// Envelope returned by the query endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MenuResponse {
    pub menus: Vec<RestaurantMenu>,
}

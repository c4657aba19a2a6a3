use serde::{Deserialize, Serialize};

use lv_types::{CalendarDay, MenuId, RestaurantId};

/// Course category for a menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Appetizer,
    MainCourse,
    Dessert,
    Beverage,
}

/// A single dish or drink on a menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit.
    pub price_cents: u32,
    pub category: MenuCategory,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price_cents: u32, category: MenuCategory) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price_cents,
            category,
            is_available: true,
        }
    }
}

/// A restaurant's published offering for one calendar date.
///
/// At most one menu exists per restaurant per date; the directory enforces
/// that at publish time. Only published menus are eligible for voting and
/// ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub restaurant: RestaurantId,
    pub date: CalendarDay,
    pub is_published: bool,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// A new published menu with no items yet.
    pub fn new(restaurant: RestaurantId, date: CalendarDay) -> Self {
        Self {
            id: MenuId::new(),
            restaurant,
            date,
            is_published: true,
            items: Vec::new(),
        }
    }

    /// Builder-style item attachment.
    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }
}

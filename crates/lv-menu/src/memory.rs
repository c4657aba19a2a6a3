use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use lv_types::{CalendarDay, MenuId, RestaurantId};

use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::MenuDirectory;
use crate::types::Menu;

/// In-memory menu directory for tests, local demos, and embedding.
pub struct InMemoryDirectory {
    inner: RwLock<DirectoryState>,
}

#[derive(Default)]
struct DirectoryState {
    menus: HashMap<MenuId, Menu>,
    // One menu per (restaurant, date), published or not.
    slots: HashSet<(RestaurantId, CalendarDay)>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryState::default()),
        }
    }

    /// Publish a menu. Rejects a second menu for the same restaurant and date.
    pub fn publish(&self, menu: Menu) -> DirectoryResult<MenuId> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| DirectoryError::Storage("directory write lock poisoned".into()))?;

        let slot = (menu.restaurant, menu.date);
        if state.slots.contains(&slot) {
            return Err(DirectoryError::DuplicateMenu {
                restaurant: menu.restaurant,
                day: menu.date,
            });
        }

        let id = menu.id;
        tracing::debug!(menu = %id.short_id(), date = %menu.date, "menu published");
        state.slots.insert(slot);
        state.menus.insert(id, menu);
        Ok(id)
    }

    /// Flip a menu's published flag. Returns the previous value.
    pub fn set_published(&self, id: &MenuId, published: bool) -> DirectoryResult<bool> {
        let mut state = self
            .inner
            .write()
            .map_err(|_| DirectoryError::Storage("directory write lock poisoned".into()))?;

        let menu = state
            .menus
            .get_mut(id)
            .ok_or(DirectoryError::MenuNotFound(*id))?;
        let previous = menu.is_published;
        menu.is_published = published;
        Ok(previous)
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuDirectory for InMemoryDirectory {
    fn get(&self, id: &MenuId) -> DirectoryResult<Option<Menu>> {
        let state = self
            .inner
            .read()
            .map_err(|_| DirectoryError::Storage("directory read lock poisoned".into()))?;
        Ok(state.menus.get(id).cloned())
    }

    fn published_on(&self, day: CalendarDay) -> DirectoryResult<Vec<Menu>> {
        let state = self
            .inner
            .read()
            .map_err(|_| DirectoryError::Storage("directory read lock poisoned".into()))?;

        let mut menus: Vec<Menu> = state
            .menus
            .values()
            .filter(|m| m.date == day && m.is_published)
            .cloned()
            .collect();
        menus.sort_by_key(|m| m.id);
        Ok(menus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> CalendarDay {
        CalendarDay::from_ymd(2024, 6, 14).unwrap()
    }

    #[test]
    fn publish_and_get() {
        let directory = InMemoryDirectory::new();
        let menu = Menu::new(RestaurantId::new(), day());
        let id = directory.publish(menu.clone()).unwrap();

        let found = directory.get(&id).unwrap().unwrap();
        assert_eq!(found, menu);
        assert!(directory.get(&MenuId::new()).unwrap().is_none());
    }

    #[test]
    fn one_menu_per_restaurant_per_day() {
        let directory = InMemoryDirectory::new();
        let restaurant = RestaurantId::new();

        directory.publish(Menu::new(restaurant, day())).unwrap();
        let error = directory.publish(Menu::new(restaurant, day())).unwrap_err();
        assert_eq!(
            error,
            DirectoryError::DuplicateMenu {
                restaurant,
                day: day()
            }
        );

        // A different day is a different slot.
        directory
            .publish(Menu::new(restaurant, day().succ()))
            .unwrap();
    }

    #[test]
    fn published_on_filters_day_and_flag() {
        let directory = InMemoryDirectory::new();
        let today = directory.publish(Menu::new(RestaurantId::new(), day())).unwrap();
        directory
            .publish(Menu::new(RestaurantId::new(), day().succ()))
            .unwrap();
        let hidden = directory
            .publish(Menu::new(RestaurantId::new(), day()))
            .unwrap();
        directory.set_published(&hidden, false).unwrap();

        let menus = directory.published_on(day()).unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].id, today);
    }

    #[test]
    fn published_on_is_ordered_by_id() {
        let directory = InMemoryDirectory::new();
        for _ in 0..4 {
            directory.publish(Menu::new(RestaurantId::new(), day())).unwrap();
        }
        let menus = directory.published_on(day()).unwrap();
        let ids: Vec<MenuId> = menus.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 4);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn set_published_requires_existing_menu() {
        let directory = InMemoryDirectory::new();
        let missing = MenuId::new();
        assert_eq!(
            directory.set_published(&missing, false).unwrap_err(),
            DirectoryError::MenuNotFound(missing)
        );
    }
}

use lv_types::{CalendarDay, MenuId, RestaurantId};
use thiserror::Error;

/// Errors produced by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("restaurant {restaurant} already has a menu for {day}")]
    DuplicateMenu {
        restaurant: RestaurantId,
        day: CalendarDay,
    },

    #[error("menu not found: {0}")]
    MenuNotFound(MenuId),

    #[error("directory storage error: {0}")]
    Storage(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

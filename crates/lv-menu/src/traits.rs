use lv_types::{CalendarDay, MenuId};

use crate::error::DirectoryResult;
use crate::types::Menu;

/// Read boundary over published menus.
///
/// All implementations must satisfy these invariants:
/// - At most one menu per restaurant per date.
/// - Lookups never invent menus: `Ok(None)` means the id does not exist.
/// - `published_on` returns only menus with `is_published = true` for the
///   requested day, in a stable order.
/// - Storage errors are propagated, never silently ignored.
pub trait MenuDirectory: Send + Sync {
    /// Look up a menu by id. Returns `Ok(None)` if it does not exist.
    fn get(&self, id: &MenuId) -> DirectoryResult<Option<Menu>>;

    /// All published menus for the given day.
    fn published_on(&self, day: CalendarDay) -> DirectoryResult<Vec<Menu>>;
}

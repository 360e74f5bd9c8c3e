use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::menu::{MenuError, MenuEvent, MenuItem, MenuItemPatch, NewMenuItem, SharedMenuItem};
use crate::event_sourcing::EventStore;
use super::id_allocator::IdAllocator;

// ============================================================================
// Menu Catalog - sole owner of menu items
// ============================================================================
//
// Orchestrates: Payload → validated MenuItem → Catalog → Journal
//
// Order lines hold clones of the shared handle, so removing an item from the
// catalog never invalidates an existing order.
//
// ============================================================================

#[derive(Debug)]
pub struct MenuCatalog {
    ids: IdAllocator,
    items: Vec<SharedMenuItem>,
    journal: EventStore<MenuEvent>,
}

impl MenuCatalog {
    pub fn new(id_width: usize) -> Self {
        Self {
            ids: IdAllocator::new(id_width),
            items: Vec::new(),
            journal: EventStore::new("MenuItem"),
        }
    }

    /// Validate and add a new item. No id is consumed when validation fails.
    pub fn create(&mut self, draft: NewMenuItem) -> Result<SharedMenuItem, MenuError> {
        // Dry run so a failure leaves the id counter untouched
        MenuItem::new(String::new(), draft.clone())?;
        let item = MenuItem::new(self.ids.next(), draft)?;

        tracing::debug!(
            menu_item_id = item.id(),
            variant = %item.variant(),
            name = item.name(),
            "Menu item created"
        );
        let event = MenuEvent::Created {
            variant: item.variant(),
            name: item.name().to_string(),
            price: item.price(),
        };
        let id = item.id().to_string();
        let shared = Rc::new(RefCell::new(item));
        self.items.push(shared.clone());
        self.record(&id, event);

        Ok(shared)
    }

    /// Apply a partial edit atomically.
    ///
    /// `Ok(None)` when the id is unknown; on a validation error the stored
    /// item is left exactly as it was.
    pub fn edit(&mut self, id: &str, patch: &MenuItemPatch) -> Result<Option<SharedMenuItem>, MenuError> {
        let Some(shared) = self.find(id) else {
            return Ok(None);
        };

        let (edited, notice) = shared.borrow().patched(patch)?;
        let name = edited.name().to_string();
        *shared.borrow_mut() = edited;

        tracing::debug!(menu_item_id = id, "Menu item edited");
        self.record(id, MenuEvent::Edited { name });
        if let Some(notice) = notice {
            tracing::info!(menu_item_id = id, "{}", notice.message());
            self.record(id, notice.into());
        }

        Ok(Some(shared))
    }

    /// Toggle availability. Returns false if the id is unknown.
    pub fn set_available(&mut self, id: &str, available: bool) -> bool {
        let Some(shared) = self.find(id) else {
            return false;
        };

        let notice = shared.borrow_mut().set_available(available);
        if let Some(notice) = notice {
            tracing::info!(menu_item_id = id, "{}", notice.message());
            self.record(id, notice.into());
        }
        true
    }

    /// Remove by id. Returns false if the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.borrow().id() == id) else {
            return false;
        };

        let removed = self.items.remove(index);
        let name = removed.borrow().name().to_string();
        tracing::debug!(menu_item_id = id, name = %name, "Menu item removed");
        self.record(id, MenuEvent::Removed { name });
        true
    }

    pub fn find(&self, id: &str) -> Option<SharedMenuItem> {
        self.items.iter().find(|item| item.borrow().id() == id).cloned()
    }

    pub fn describe(&self, id: &str) -> Option<String> {
        self.find(id).map(|item| item.borrow().describe())
    }

    /// Items in insertion order
    pub fn list(&self) -> &[SharedMenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn journal(&self) -> &EventStore<MenuEvent> {
        &self.journal
    }

    fn record(&mut self, id: &str, event: MenuEvent) {
        self.journal.append(id, event, None);
    }
}

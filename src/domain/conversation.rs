use crate::domain::{CustomerId, MenuEntry, OrderLine, OrderStore};

/// The ordering conversation held with one customer.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait
/// (see [`conversation_actor`](crate::conversation_actor)), so each customer's
/// order lives in its own entry of the conversation actor's store.
///
/// `selected` is the product a bare number applies to. It is set when a new line
/// is inserted and cleared with the order, so it always names the most recently
/// inserted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub customer_id: CustomerId,
    pub order: OrderStore,
    pub selected: Option<String>,
}

/// Outcome of picking a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Added,
    AlreadyInOrder,
}

impl Conversation {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            order: OrderStore::new(),
            selected: None,
        }
    }

    /// Adds `entry` to the order with quantity 0 and points the cursor at it.
    /// Re-selecting a product already in the order changes nothing.
    pub fn select(&mut self, entry: &MenuEntry) -> Selection {
        if self.order.insert(&entry.name, entry.price) {
            self.selected = Some(entry.name.clone());
            Selection::Added
        } else {
            Selection::AlreadyInOrder
        }
    }

    /// Overwrites the quantity of the selected line.
    pub fn set_quantity(&mut self, quantity: u32) -> Option<&OrderLine> {
        let product = self.selected.as_deref()?;
        self.order.set_quantity(product, quantity)
    }

    /// Drops the order and the cursor.
    pub fn reset(&mut self) {
        self.order.clear();
        self.selected = None;
    }
}

/// Payload for opening a conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationOpen;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn entry(code: &str, name: &str) -> MenuEntry {
        MenuEntry::new(code, name, Decimal::new(1000, 2))
    }

    #[test]
    fn test_cursor_follows_new_selections_only() {
        let mut conversation = Conversation::new(CustomerId::from("+15550200"));
        assert_eq!(conversation.select(&entry("a", "Pepperoni Pizza")), Selection::Added);
        assert_eq!(conversation.select(&entry("b", "Hawaiian Pizza")), Selection::Added);
        assert_eq!(
            conversation.select(&entry("a", "Pepperoni Pizza")),
            Selection::AlreadyInOrder
        );
        assert_eq!(conversation.selected.as_deref(), Some("Hawaiian Pizza"));

        let line = conversation.set_quantity(4).unwrap();
        assert_eq!(line.product_name, "Hawaiian Pizza");
        assert_eq!(conversation.order.line("Pepperoni Pizza").unwrap().quantity, 0);
    }

    #[test]
    fn test_set_quantity_without_selection() {
        let mut conversation = Conversation::new(CustomerId::from("+15550201"));
        assert!(conversation.set_quantity(2).is_none());
        assert!(conversation.order.is_empty());
    }

    #[test]
    fn test_reset_clears_cursor() {
        let mut conversation = Conversation::new(CustomerId::from("+15550202"));
        conversation.select(&entry("a", "Pepperoni Pizza"));
        conversation.reset();
        assert!(conversation.order.is_empty());
        assert!(conversation.selected.is_none());
    }
}

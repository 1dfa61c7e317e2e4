//! # Conversation Engine
//!
//! Maps one inbound text to a [`Reply`] and applies the matching change to the
//! customer's [`Conversation`]. The engine is synchronous and does no I/O; the
//! conversation actor calls it while holding the only reference to the
//! conversation.
//!
//! The text is lower-cased once, then matched against these rules, first match wins:
//!
//! | # | Rule | Effect |
//! |---|------|--------|
//! | 1 | exactly `menu` | list the catalog |
//! | 2 | contains `order` | clear the order, ask for a pizza |
//! | 3 | exactly a menu code | add the product (or say it is already there) |
//! | 4 | only ASCII digits | set the selected line's quantity |
//! | 5 | contains `done` | print the total, clear the order |
//! | 6 | anything else | help text |

use crate::domain::{format_usd, Conversation, MenuCatalog, Selection};
use std::fmt::{self, Display, Write};

/// Everything the service can text back.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// First message ever received from a customer.
    Welcome,
    /// Rendered menu lines, one `"{code}. {name} - ${price}\n"` per item.
    Menu { listing: String },
    OrderStarted,
    Selected { product: String },
    /// The product is already in the order; nothing was changed.
    AlreadyAdded { product: String },
    SelectFirst,
    /// The digits do not fit a quantity; nothing was changed.
    QuantityTooLarge,
    Ordered { summary: String },
    Completed { summary: String, total: String },
    NotUnderstood,
}

impl Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Welcome => f.write_str(
                "Welcome to Domino's! How can we assist you today? \
                 Type 'menu' to see the menu or 'order' to start your order.",
            ),
            Reply::Menu { listing } => write!(f, "Here are our menu items:\n\n{listing}"),
            Reply::OrderStarted => f.write_str(
                "Great! Let's get started with your order. \
                 What type of pizza would you like? (Please reply with a letter)",
            ),
            Reply::Selected { product } => {
                write!(f, "You've selected {product}. How many would you like to order?")
            }
            Reply::AlreadyAdded { product } => write!(
                f,
                "You've already added {product} to your order. How many more would you like?"
            ),
            Reply::SelectFirst => f.write_str("Please select a pizza from the menu first."),
            Reply::QuantityTooLarge => f.write_str(
                "That's more pizzas than we can make in one order. \
                 Please reply with a smaller number.",
            ),
            Reply::Ordered { summary } => write!(
                f,
                "You've ordered:\n{summary}\
                 Reply with 'menu' to add another pizza or 'done' to complete your order."
            ),
            Reply::Completed { summary, total } => {
                write!(f, "Thanks for your order!\n{summary}Total: {total}")
            }
            Reply::NotUnderstood => f.write_str(
                "I'm sorry, I didn't understand your message. \
                 Please reply with 'menu' to see our menu, \
                 'order' to start your order, or 'done' to complete your order.",
            ),
        }
    }
}

/// Runs one step of the ordering script.
pub fn handle_message(text: &str, conversation: &mut Conversation, menu: &MenuCatalog) -> Reply {
    let text = text.to_lowercase();

    if text == "menu" {
        return Reply::Menu {
            listing: menu_listing(menu),
        };
    }

    if text.contains("order") {
        conversation.reset();
        return Reply::OrderStarted;
    }

    if let Some(entry) = menu.get(&text) {
        let product = entry.name.clone();
        return match conversation.select(entry) {
            Selection::Added => Reply::Selected { product },
            Selection::AlreadyInOrder => Reply::AlreadyAdded { product },
        };
    }

    if is_quantity(&text) {
        if conversation.order.is_empty() {
            return Reply::SelectFirst;
        }
        let Ok(quantity) = text.parse::<u32>() else {
            return Reply::QuantityTooLarge;
        };
        if let Some(product) = conversation.selected.as_deref() {
            if conversation.order.total_with_quantity(product, quantity).is_none() {
                return Reply::QuantityTooLarge;
            }
        }
        if conversation.set_quantity(quantity).is_none() {
            return Reply::SelectFirst;
        }
        return Reply::Ordered {
            summary: conversation.order.summary(),
        };
    }

    if text.contains("done") {
        // Quantities are only accepted while the total stays in range.
        let Some(total) = conversation.order.total() else {
            return Reply::QuantityTooLarge;
        };
        let reply = Reply::Completed {
            summary: conversation.order.summary(),
            total: format_usd(total),
        };
        conversation.reset();
        return reply;
    }

    Reply::NotUnderstood
}

fn is_quantity(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn menu_listing(menu: &MenuCatalog) -> String {
    menu.entries().iter().fold(String::new(), |mut out, entry| {
        let _ = writeln!(out, "{}. {} - {}", entry.code, entry.name, format_usd(entry.price));
        out
    })
}

//! Composed read model for rendering a full board.
//!
//! The composition query returns one nested object graph: board, labels,
//! lists ordered by position, cards ordered by position within each list,
//! and every card's nested relations. Ordering is applied here rather than
//! trusted from storage; duplicate or gappy positions must sort stably
//! instead of failing.

use serde::Serialize;

use crate::domain::{Attachment, Board, Card, Checklist, ChecklistItem, Comment, Label, List};
use crate::domain::UserId;

/// A checklist together with its ordered items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChecklistView {
    /// The checklist itself.
    pub checklist: Checklist,
    /// Items ordered ascending by position.
    pub items: Vec<ChecklistItem>,
}

/// A card together with all nested relations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    /// The card itself.
    pub card: Card,
    /// Labels linked to the card.
    pub labels: Vec<Label>,
    /// Users assigned to the card.
    pub assignees: Vec<UserId>,
    /// Comments, oldest first.
    pub comments: Vec<Comment>,
    /// Checklists ordered ascending by position.
    pub checklists: Vec<ChecklistView>,
    /// Attachment descriptors.
    pub attachments: Vec<Attachment>,
}

/// A list together with its ordered cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    /// The list itself.
    pub list: List,
    /// Cards ordered ascending by position.
    pub cards: Vec<CardView>,
}

/// The full board graph served by the composition query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// The board itself.
    pub board: Board,
    /// Labels defined on the board.
    pub labels: Vec<Label>,
    /// Lists ordered ascending by position.
    pub lists: Vec<ListView>,
}

/// Sort lists ascending by position. Stable, so duplicate positions keep
/// their relative input order.
pub fn sort_lists(lists: &mut [List]) {
    lists.sort_by_key(|list| list.position);
}

/// Sort card views ascending by the card's position.
pub fn sort_card_views(cards: &mut [CardView]) {
    cards.sort_by_key(|view| view.card.position);
}

/// Sort checklist items ascending by position.
pub fn sort_checklist_items(items: &mut [ChecklistItem]) {
    items.sort_by_key(|item| item.position);
}

//! This module provides the syntax model that ownership assignment operates
//! on: tokens with attached trivia, items, and separated lists.

mod list_element;
mod separated_list;
mod syntax_item;
mod syntax_node;
mod syntax_token;

pub use list_element::ListElement;
pub use separated_list::SeparatedList;
pub use syntax_item::SyntaxItem;
pub use syntax_node::SyntaxNode;
pub use syntax_token::SyntaxToken;

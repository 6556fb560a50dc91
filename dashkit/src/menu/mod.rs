//! Navigation menu model.
//!
//! A menu is an ordered list of groups, each holding a tree of items.

mod defaults;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

pub use defaults::default_menu;

/// Colour of a menu badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Danger,
}

/// Small label shown next to a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
}

/// A menu entry; either a link, a parent of children, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            href: None,
            badge: None,
            children: Vec::new(),
        }
    }

    /// Creates an item linking to `href`.
    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(id, label).href(href)
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn badge(mut self, text: impl Into<String>, variant: BadgeVariant) -> Self {
        self.badge = Some(Badge {
            text: text.into(),
            variant,
        });
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A titled group of menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: String,
    pub label: String,
    pub items: Vec<MenuItem>,
}

impl MenuGroup {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        items: impl IntoIterator<Item = MenuItem>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            items: items.into_iter().collect(),
        }
    }
}

/// The whole navigation menu.
///
/// # Example
///
/// ```
/// use dashkit::menu::default_menu;
///
/// let menu = default_menu();
/// let trail = menu.trail_for_href("/admin/users/roles").unwrap();
///
/// assert_eq!(trail, vec!["management", "users", "users-roles"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    groups: Vec<MenuGroup>,
}

impl Menu {
    pub fn new(groups: Vec<MenuGroup>) -> Self {
        Self { groups }
    }

    /// Parses a JSON array of groups.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::json("menu", e))
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// All items, depth-first in display order.
    pub fn iter(&self) -> MenuIter<'_> {
        let mut stack: Vec<&MenuItem> = self.groups.iter().flat_map(|g| &g.items).collect();
        stack.reverse();
        MenuIter { stack }
    }

    /// Finds an item by id anywhere in the tree.
    pub fn find(&self, id: &str) -> Option<&MenuItem> {
        self.iter().find(|item| item.id == id)
    }

    /// Ids leading to the item linking to `href`: the group id, then every
    /// ancestor item, then the item itself.
    pub fn trail_for_href(&self, href: &str) -> Option<Vec<&str>> {
        self.groups.iter().find_map(|group| {
            let mut trail = vec![group.id.as_str()];
            group
                .items
                .iter()
                .any(|item| trail_in(item, href, &mut trail))
                .then_some(trail)
        })
    }
}

fn trail_in<'a>(item: &'a MenuItem, href: &str, trail: &mut Vec<&'a str>) -> bool {
    trail.push(&item.id);
    if item.href.as_deref() == Some(href)
        || item.children.iter().any(|child| trail_in(child, href, trail))
    {
        return true;
    }
    trail.pop();
    false
}

/// Depth-first iterator over menu items.
#[derive(Debug, Clone)]
pub struct MenuIter<'a> {
    stack: Vec<&'a MenuItem>,
}

impl<'a> Iterator for MenuIter<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = MenuIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

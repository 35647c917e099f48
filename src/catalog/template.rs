use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::CatalogError;
use crate::graph::{Node, NodeData, NodeKind};

/// A catalog definition of an insertable node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    pub id: String,
    pub label: String,
    #[serde(alias = "iconName")]
    pub icon: String,
    pub category: String,
    pub color: String,
}

impl NodeTemplate {
    /// Materializes a canvas node from this template.
    ///
    /// The node starts at position (0,0); real coordinates are assigned by
    /// the next layout pass.
    pub fn materialize(&self, node_id: &str) -> Node {
        Node::new(
            node_id,
            NodeKind::Action,
            NodeData {
                label: self.label.clone(),
                icon: Some(self.icon.clone()),
                category: Some(self.category.clone()),
                color: Some(self.color.clone()),
            },
        )
    }
}

/// A titled group of templates, as the sidebar presents them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateGroup {
    pub title: String,
    pub items: Vec<NodeTemplate>,
}

/// The read-only sidebar catalog.
///
/// Loaded once, immutable afterwards; the store consults it when
/// materializing a new node from a dragged template id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    groups: Vec<TemplateGroup>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate template ids.
    pub fn new(groups: Vec<TemplateGroup>) -> Result<Self, CatalogError> {
        if let Some(dup) = groups
            .iter()
            .flat_map(|g| &g.items)
            .map(|t| t.id.as_str())
            .duplicates()
            .next()
        {
            return Err(CatalogError::DuplicateTemplate(dup.to_string()));
        }
        Ok(Self { groups })
    }

    /// Parses a catalog from its JSON form: an array of titled groups.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let groups: Vec<TemplateGroup> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        Self::new(groups)
    }

    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn groups(&self) -> &[TemplateGroup] {
        &self.groups
    }

    /// Flat iteration over every template, across groups.
    pub fn templates(&self) -> impl Iterator<Item = &NodeTemplate> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    pub fn get(&self, id: &str) -> Option<&NodeTemplate> {
        self.templates().find(|t| t.id == id)
    }

    /// The built-in sidebar entries the demo canvas ships with.
    pub fn builtin() -> Self {
        let template = |id: &str, label: &str, icon: &str, category: &str, color: &str| {
            NodeTemplate {
                id: id.to_string(),
                label: label.to_string(),
                icon: icon.to_string(),
                category: category.to_string(),
                color: color.to_string(),
            }
        };
        Self {
            groups: vec![
                TemplateGroup {
                    title: "Actions".to_string(),
                    items: vec![
                        template("email", "Email", "mail", "actions", "bg-emerald-50"),
                        template("sms", "SMS", "messageSquare", "actions", "bg-emerald-50"),
                        template(
                            "update-profile",
                            "Update Profile Property",
                            "user",
                            "actions",
                            "bg-amber-50",
                        ),
                        template(
                            "notification",
                            "Notification",
                            "bell",
                            "actions",
                            "bg-indigo-50",
                        ),
                        template("webhook", "Webhook", "webhook", "actions", "bg-blue-50"),
                    ],
                },
                TemplateGroup {
                    title: "Timing".to_string(),
                    items: vec![template(
                        "time-delay",
                        "Time Delay",
                        "clock",
                        "timing",
                        "bg-blue-50",
                    )],
                },
                TemplateGroup {
                    title: "Logic".to_string(),
                    items: vec![template(
                        "conditional-split",
                        "Conditional split",
                        "gitBranch",
                        "logic",
                        "bg-gray-50",
                    )],
                },
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

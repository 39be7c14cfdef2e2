//! Host application inspection.
//!
//! The scripting host (the running After Effects instance) is an opaque
//! collaborator. This module talks to it only through the [`Host`] trait:
//! report an informational message, read the project's items, and read the
//! active item. [`SnapshotHost`] implements the trait over a JSON snapshot
//! of a project, which is what the `aetk host` subcommand drives.

use std::cell::RefCell;
use std::path::Path;

use serde::Deserialize;

use crate::error::ToolsError;

/// A layer inside a composition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layer {
    /// Layer name.
    pub name: String,
    /// Anchor position `[x, y, z]`.
    #[serde(default)]
    pub position: [f64; 3],
}

/// An item in the project panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectItem {
    /// A folder grouping other items.
    Folder {
        /// Folder name.
        name: String,
        /// Items inside the folder.
        #[serde(default)]
        children: Vec<ProjectItem>,
    },
    /// A composition.
    Comp {
        /// Composition name.
        name: String,
        /// Layers, top to bottom.
        #[serde(default)]
        layers: Vec<Layer>,
    },
    /// Imported footage.
    Footage {
        /// Footage name.
        name: String,
    },
    /// Any other item.
    #[serde(rename = "item")]
    Other {
        /// Item name.
        name: String,
    },
}

impl ProjectItem {
    /// The item's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. }
            | Self::Comp { name, .. }
            | Self::Footage { name }
            | Self::Other { name } => name,
        }
    }
}

/// The open project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Project {
    /// Top-level project items.
    #[serde(default)]
    pub items: Vec<ProjectItem>,
}

/// The query and command surface of the scripting host.
pub trait Host {
    /// Show an informational message to the user.
    fn report_info(&self, message: &str);

    /// The open project.
    fn project(&self) -> &Project;

    /// The item currently selected or open, if any.
    fn active_item(&self) -> Option<&ProjectItem>;
}

/// Report `message` through the host.
pub fn display_alert(host: &dyn Host, message: &str) {
    host.report_info(message);
}

/// Find an item by exact name.
///
/// Looks at each top-level item, and at the direct children of each
/// top-level folder right after the folder itself. Deeper nesting is not
/// searched.
pub fn find_item_by_name<'a>(project: &'a Project, name: &str) -> Option<&'a ProjectItem> {
    for item in &project.items {
        if item.name() == name {
            return Some(item);
        }
        if let ProjectItem::Folder { children, .. } = item
            && let Some(child) = children.iter().find(|c| c.name() == name)
        {
            return Some(child);
        }
    }
    None
}

/// Describe the active item through the host.
///
/// A composition reports its name and then each layer's name with its x
/// position, always with a fractional part (`960.0`); footage and other
/// items report one line.
pub fn report_active_item(host: &dyn Host) {
    let Some(item) = host.active_item() else {
        host.report_info("No active item");
        return;
    };

    match item {
        ProjectItem::Comp { name, layers } => {
            host.report_info(&format!("CompItem: {name}"));
            for layer in layers {
                host.report_info(&format!("Layer: {} {:?}", layer.name, layer.position[0]));
            }
        }
        ProjectItem::Footage { name } => host.report_info(&format!("FootageItem: {name}")),
        ProjectItem::Folder { name, .. } | ProjectItem::Other { name } => {
            host.report_info(&format!("Item: {name}"));
        }
    }
}

/// On-disk layout of a project snapshot.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    project: Project,
    #[serde(default)]
    active_item: Option<String>,
}

/// A [`Host`] backed by a project snapshot.
///
/// Reported messages are logged and kept in order for the caller to print.
#[derive(Debug, Default)]
pub struct SnapshotHost {
    project: Project,
    active_item: Option<String>,
    messages: RefCell<Vec<String>>,
}

impl SnapshotHost {
    /// Create a host over `project`, with the active item named by
    /// `active_item` (resolved through [`find_item_by_name`]).
    pub const fn new(project: Project, active_item: Option<String>) -> Self {
        Self {
            project,
            active_item,
            messages: RefCell::new(Vec::new()),
        }
    }

    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Json`] if the text is not a valid snapshot.
    pub fn from_json(text: &str) -> Result<Self, ToolsError> {
        let snapshot: Snapshot = serde_json::from_str(text)?;
        Ok(Self::new(snapshot.project, snapshot.active_item))
    }

    /// Read a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Io`] if the file cannot be read, or
    /// [`ToolsError::Json`] if it is not a valid snapshot.
    pub fn from_file(path: &Path) -> Result<Self, ToolsError> {
        let text = std::fs::read_to_string(path).map_err(|e| ToolsError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Messages reported so far, oldest first.
    pub fn take_messages(&self) -> Vec<String> {
        self.messages.take()
    }
}

impl Host for SnapshotHost {
    fn report_info(&self, message: &str) {
        tracing::info!(report = message, "host report");
        self.messages.borrow_mut().push(message.to_owned());
    }

    fn project(&self) -> &Project {
        &self.project
    }

    fn active_item(&self) -> Option<&ProjectItem> {
        self.active_item
            .as_deref()
            .and_then(|name| find_item_by_name(&self.project, name))
    }
}

//! Newsletter editor content.
//!
//! A newsletter is an ordered list of sections. Each section holds one
//! [`ContentBlock`], a tagged union whose variants carry only the fields that
//! make sense for that kind of block. Reordering is positional: a section's
//! order is its index in the list.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::features::ChartType;

/// Role of a text block within the newsletter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Header,
    Summary,
    Insights,
    #[default]
    Paragraph,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        style: TextStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
    },
    Chart {
        chart_type: ChartType,
        title: String,
        /// Canonical column keys plotted by the chart.
        #[serde(default)]
        data_columns: Vec<String>,
    },
    Image {
        url: String,
        #[serde(default)]
        alt_text: String,
    },
    Divider,
}

impl ContentBlock {
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Text { .. } => "text",
            ContentBlock::Chart { .. } => "chart",
            ContentBlock::Image { .. } => "image",
            ContentBlock::Divider => "divider",
        }
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        match self {
            ContentBlock::Chart { chart_type, .. } => Some(*chart_type),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub block: ContentBlock,
    /// Only text sections can be edited in place.
    pub editable: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, block: ContentBlock) -> Self {
        let editable = matches!(block, ContentBlock::Text { .. });
        Self {
            id: id.into(),
            block,
            editable,
        }
    }
}

/// Ordered sections with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn push(&mut self, section: Section) -> Result<()> {
        self.insert(self.sections.len(), section)
    }

    pub fn insert(&mut self, index: usize, section: Section) -> Result<()> {
        if self.position(&section.id).is_some() {
            return Err(ModelError::DuplicateSectionId(section.id));
        }
        if index > self.sections.len() {
            return Err(ModelError::SectionOutOfRange {
                index,
                len: self.sections.len(),
            });
        }
        self.sections.insert(index, section);
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Section> {
        let index = self
            .position(id)
            .ok_or_else(|| ModelError::SectionNotFound(id.to_string()))?;
        Ok(self.sections.remove(index))
    }

    /// Drag-and-drop reorder: takes the section at `from` out and reinserts
    /// it at `to`. Sections in between shift by one.
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.sections.len();
        for index in [from, to] {
            if index >= len {
                return Err(ModelError::SectionOutOfRange { index, len });
            }
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        Ok(())
    }

    /// Replaces the content of an editable section.
    pub fn update_block(&mut self, id: &str, block: ContentBlock) -> Result<()> {
        let section = self
            .sections
            .iter_mut()
            .find(|section| section.id == id)
            .ok_or_else(|| ModelError::SectionNotFound(id.to_string()))?;
        if !section.editable {
            return Err(ModelError::SectionReadOnly(id.to_string()));
        }
        section.block = block;
        Ok(())
    }

    pub fn chart_types(&self) -> impl Iterator<Item = ChartType> + '_ {
        self.sections
            .iter()
            .filter_map(|section| section.block.chart_type())
    }
}

/// Linear undo/redo history of snapshots.
///
/// Recording a new snapshot after an undo discards the redo branch.
#[derive(Debug, Clone)]
pub struct EditHistory<T: Clone> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> EditHistory<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn record(&mut self, snapshot: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }
}

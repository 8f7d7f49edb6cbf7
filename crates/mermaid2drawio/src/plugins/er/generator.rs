//! Entity-relationship diagram cell generator
//!
//! Entities are laid out row-major on a fixed grid. Each entity is a
//! swimlane header whose attribute rows are child cells stacked below the
//! title band. Relationships connect header cells and carry crow's-foot
//! decorations for their cardinalities.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::database::{Attribute, ErDiagram, RelationshipKind};
use crate::core::{Cell, CellIds, ErLayout, Generator, Geometry, LayoutConfig, LAYER_CELL_ID};

/// Entity-relationship diagram generator
pub struct ErGenerator {
    config: LayoutConfig,
}

impl ErGenerator {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn layout(&self) -> &ErLayout {
        &self.config.er
    }

    /// Top-left corner of the n-th entity
    pub fn entity_position(&self, index: usize) -> (f64, f64) {
        let layout = self.layout();
        let col = index % layout.entities_per_row;
        let row = index / layout.entities_per_row;
        (
            layout.start_x + col as f64 * layout.entity_spacing,
            layout.start_y + row as f64 * layout.entity_spacing,
        )
    }

    /// Label of an attribute row, e.g. `🔑 id: int (NN)`
    ///
    /// The foreign key glyph goes on after the primary key glyph, so it ends
    /// up outermost when both apply.
    pub fn attribute_label(&self, attribute: &Attribute) -> String {
        let layout = self.layout();
        let mut label = format!("{}: {}", attribute.name, attribute.data_type);
        if attribute.is_primary_key {
            label = format!("{} {}", layout.primary_key_glyph, label);
        }
        if attribute.is_foreign_key {
            label = format!("{} {}", layout.foreign_key_glyph, label);
        }
        if attribute.is_unique {
            label.push_str(" (UK)");
        }
        if attribute.is_not_null {
            label.push_str(" (NN)");
        }
        label
    }

    /// Connector style for a relationship kind
    pub fn relationship_style(&self, kind: RelationshipKind) -> String {
        let decoration = match kind {
            RelationshipKind::OneToOne => "startArrow=ERone;endArrow=ERone;",
            RelationshipKind::OneToMany => "startArrow=ERone;endArrow=ERmany;",
            RelationshipKind::ManyToOne => "startArrow=ERmany;endArrow=ERone;",
            RelationshipKind::ManyToMany => "startArrow=ERmany;endArrow=ERmany;",
            RelationshipKind::Identifying | RelationshipKind::NonIdentifying => "",
        };
        format!("{}{}", self.layout().relationship_style, decoration)
    }
}

impl Default for ErGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<ErDiagram> for ErGenerator {
    fn generate(&self, database: &ErDiagram) -> Result<Vec<Cell>> {
        let generate_span = span!(
            Level::DEBUG,
            "generate_er",
            entities = database.entity_count(),
            relationships = database.relationship_count()
        );
        let _enter = generate_span.enter();

        self.config.validate()?;

        let layout = self.layout();
        let mut ids = CellIds::new();
        let mut cells = Vec::new();
        // Later declarations of a name take over its connectors
        let mut header_cells: HashMap<&str, String> = HashMap::new();

        for (index, entity) in database.entities().iter().enumerate() {
            let (x, y) = self.entity_position(index);
            let height = layout.entity_header_height
                + entity.attributes.len() as f64 * layout.attribute_height;

            let header_id = ids.take("entity_header");
            header_cells.insert(entity.name.as_str(), header_id.clone());
            cells.push(
                Cell::vertex(
                    header_id.as_str(),
                    LAYER_CELL_ID,
                    Geometry::bounds(x, y, layout.entity_width, height),
                )
                .with_value(entity.name.as_str())
                .with_style(layout.entity_style.as_str()),
            );

            for (i, attribute) in entity.attributes.iter().enumerate() {
                // Relative to the header
                let row_y = layout.entity_header_height + i as f64 * layout.attribute_height;
                cells.push(
                    Cell::vertex(
                        ids.take("attr"),
                        header_id.as_str(),
                        Geometry::bounds(0.0, row_y, layout.entity_width, layout.attribute_height),
                    )
                    .with_value(self.attribute_label(attribute))
                    .with_style(layout.attribute_style.as_str()),
                );
            }
            trace!(entity = %entity.name, x, y, height, "Placed entity");
        }

        for relationship in database.relationships() {
            let (Some(source), Some(target)) = (
                header_cells.get(relationship.from.as_str()),
                header_cells.get(relationship.to.as_str()),
            ) else {
                debug!(
                    from = %relationship.from,
                    to = %relationship.to,
                    "Dropping relationship with unknown entity"
                );
                continue;
            };

            let mut cell = Cell::edge(ids.take("relationship"), LAYER_CELL_ID, Geometry::edge())
                .with_style(self.relationship_style(relationship.kind))
                .connecting(source.as_str(), target.as_str());
            if !relationship.label.is_empty() {
                cell = cell.with_value(relationship.label.as_str());
            }
            cells.push(cell);
        }

        debug!(cell_count = cells.len(), "Generated ER cells");
        Ok(cells)
    }

    fn name(&self) -> &'static str {
        "er"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

//! Sequence diagram cell generator
//!
//! Participants sit on one row, left to right in declaration order. Each gets
//! a dashed lifeline hanging from the bottom centre of its box. Messages are
//! edges between participant boxes.

use std::collections::HashMap;

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::database::{MessageKind, SequenceDiagram};
use crate::core::{
    Cell, CellIds, Generator, Geometry, LayoutConfig, Point, SequenceLayout, LAYER_CELL_ID,
};

/// Sequence diagram generator
pub struct SequenceGenerator {
    config: LayoutConfig,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    fn layout(&self) -> &SequenceLayout {
        &self.config.sequence
    }

    /// Connector style for a message arrow
    pub fn message_style(&self, kind: MessageKind) -> &str {
        let layout = self.layout();
        match kind {
            MessageKind::SolidArrow => &layout.solid_arrow_style,
            MessageKind::DashedArrow => &layout.dashed_arrow_style,
            MessageKind::SolidArrowWithX => &layout.solid_cross_style,
            MessageKind::DashedArrowWithX => &layout.dashed_cross_style,
            MessageKind::Note => &layout.solid_arrow_style,
        }
    }

    /// Lifeline length: room for every message plus one slot of slack
    pub fn lifeline_length(&self, message_count: usize) -> f64 {
        let layout = self.layout();
        let needed = layout.message_spacing * (message_count + 1) as f64;
        needed.max(layout.lifeline_min_length)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<SequenceDiagram> for SequenceGenerator {
    fn generate(&self, database: &SequenceDiagram) -> Result<Vec<Cell>> {
        let generate_span = span!(
            Level::DEBUG,
            "generate_sequence",
            participants = database.participant_count(),
            messages = database.message_count()
        );
        let _enter = generate_span.enter();

        let layout = self.layout();
        let mut ids = CellIds::new();
        let mut cells = Vec::new();
        let mut participant_cells: HashMap<&str, String> = HashMap::new();
        let lifeline_length = self.lifeline_length(database.message_count());

        for (i, participant) in database.participants().enumerate() {
            let x = layout.start_x + i as f64 * layout.participant_spacing;
            let y = layout.participant_y;

            let id = ids.take("participant");
            participant_cells.insert(participant.name.as_str(), id.clone());
            cells.push(
                Cell::vertex(
                    id,
                    LAYER_CELL_ID,
                    Geometry::bounds(x, y, layout.participant_width, layout.participant_height),
                )
                .with_value(participant.alias.as_str())
                .with_style(layout.participant_style.as_str()),
            );

            let centre_x = x + layout.participant_width / 2.0;
            let top = y + layout.participant_height;
            let lifeline = Geometry::line(
                Point::new(centre_x, top),
                Point::new(centre_x, top + lifeline_length),
            );
            cells.push(
                Cell::edge(ids.take("lifeline"), LAYER_CELL_ID, lifeline)
                    .with_style(layout.lifeline_style.as_str()),
            );
        }

        for message in database.messages() {
            let (Some(source), Some(target)) = (
                participant_cells.get(message.from.as_str()),
                participant_cells.get(message.to.as_str()),
            ) else {
                debug!(
                    from = %message.from,
                    to = %message.to,
                    "Dropping message with unknown participant"
                );
                continue;
            };

            let mut cell = Cell::edge(ids.take("message"), LAYER_CELL_ID, Geometry::edge())
                .with_style(self.message_style(message.kind))
                .connecting(source.as_str(), target.as_str());
            if !message.text.is_empty() {
                cell = cell.with_value(message.text.as_str());
            }
            trace!(id = %cell.id, kind = ?message.kind, "Message edge");
            cells.push(cell);
        }

        debug!(cell_count = cells.len(), "Generated sequence cells");
        Ok(cells)
    }

    fn name(&self) -> &'static str {
        "sequence"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

//! Sequence diagram database implementation
//!
//! Stores participants and messages for sequence diagrams.

use anyhow::Result;
use indexmap::IndexMap;

use crate::core::Database;

/// Arrow kind of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    /// `->`
    #[default]
    SolidArrow,
    /// `-->`
    DashedArrow,
    /// `->>`
    SolidArrowWithX,
    /// `-->>`
    DashedArrowWithX,
    /// Never produced by the parser; drawn like a solid arrow
    Note,
}

impl MessageKind {
    /// Map an arrow token to its kind; unknown tokens are solid arrows
    pub fn from_arrow(arrow: &str) -> Self {
        match arrow {
            "->" => MessageKind::SolidArrow,
            "-->" => MessageKind::DashedArrow,
            "->>" => MessageKind::SolidArrowWithX,
            "-->>" => MessageKind::DashedArrowWithX,
            _ => MessageKind::SolidArrow,
        }
    }
}

/// A participant in the sequence diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Identifier used in messages
    pub name: String,
    /// Display label (defaults to the name)
    pub alias: String,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            alias: name.clone(),
            name,
        }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
        }
    }
}

/// A message between participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    /// Message label, possibly empty
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind: MessageKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Sequence diagram: participants in first-seen order, then messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceDiagram {
    participants: IndexMap<String, Participant>,
    messages: Vec<Message>,
}

impl SequenceDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a participant; a name that is already known keeps its first declaration
    pub fn add_participant(&mut self, participant: Participant) -> Result<()> {
        if !self.participants.contains_key(&participant.name) {
            self.participants
                .insert(participant.name.clone(), participant);
        }
        Ok(())
    }

    /// Register a participant by name only, with the name as its label
    pub fn ensure_participant(&mut self, name: &str) -> Result<()> {
        if !self.participants.contains_key(name) {
            self.participants
                .insert(name.to_string(), Participant::new(name));
        }
        Ok(())
    }

    /// Add a message, synthesizing its sender and then its receiver if unknown
    pub fn add_message(&mut self, message: Message) -> Result<()> {
        self.ensure_participant(&message.from)?;
        self.ensure_participant(&message.to)?;
        self.messages.push(message);
        Ok(())
    }

    /// All participants in order
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    /// All messages in order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Position of a participant, left to right
    pub fn participant_index(&self, name: &str) -> Option<usize> {
        self.participants.get_index_of(name)
    }

    pub fn clear_all(&mut self) {
        self.participants.clear();
        self.messages.clear();
    }
}

/// Maps Participant to Node and Message to Edge
impl Database for SequenceDiagram {
    type Node = Participant;
    type Edge = Message;

    fn add_node(&mut self, node: Self::Node) -> Result<()> {
        self.add_participant(node)
    }

    fn add_edge(&mut self, edge: Self::Edge) -> Result<()> {
        self.add_message(edge)
    }

    fn get_node(&self, name: &str) -> Option<&Self::Node> {
        self.participants.get(name)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self::Node> {
        self.participants.values()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.messages.iter()
    }

    fn clear(&mut self) {
        self.clear_all()
    }

    fn node_count(&self) -> usize {
        self.participant_count()
    }

    fn edge_count(&self) -> usize {
        self.message_count()
    }
}

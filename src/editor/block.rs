//! Blocks - the content the editor reorders, and the document that owns
//! their order.

use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::reorder::{OrderOwner, OrderRejected};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    /// DOM id of the block's element
    pub fn dom_id(&self) -> String {
        format!("block-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Quote,
    Image,
}

impl BlockKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
            Self::Quote => "Quote",
            Self::Image => "Image",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Heading => "H",
            Self::Paragraph => "\u{00b6}",
            Self::Quote => "\u{201c}",
            Self::Image => "\u{25a3}",
        }
    }

    /// Inline CSS for the block body
    pub fn body_css(&self) -> &'static str {
        match self {
            Self::Heading => "font-size: 22px; font-weight: 700; color: #111827;",
            Self::Paragraph => "font-size: 14px; line-height: 1.6; color: #374151;",
            Self::Quote => {
                "font-size: 15px; font-style: italic; color: #4b5563; border-left: 3px solid #c7d2fe; padding-left: 12px;"
            }
            Self::Image => {
                "height: 120px; border-radius: 6px; background: linear-gradient(135deg, #6366f1, #22d3ee); \
                 display: flex; align-items: flex-end; padding: 8px; color: white; font-size: 12px;"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(id: u32, kind: BlockKind, text: impl Into<String>) -> Self {
        Self { id: BlockId(id), kind, text: text.into() }
    }

    /// Short title for status messages
    pub fn title(&self) -> String {
        const MAX: usize = 28;
        if self.text.chars().count() <= MAX {
            return self.text.clone();
        }
        let cut: String = self.text.chars().take(MAX).collect();
        format!("{}\u{2026}", cut.trim_end())
    }
}

/// Ordered list of blocks. Owns the order the reorder controller commits to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDocument {
    blocks: Vec<Block>,
    locked: bool,
}

impl BlockDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks, locked: false }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            Block::new(1, BlockKind::Heading, "Release notes"),
            Block::new(2, BlockKind::Paragraph, "Blocks can now be reordered by pressing and holding, then dragging them into place."),
            Block::new(3, BlockKind::Image, "Drag handle preview"),
            Block::new(4, BlockKind::Quote, "Hold still for a moment and the block lifts off the page."),
            Block::new(5, BlockKind::Paragraph, "Releasing outside the list or pressing Escape puts everything back where it was."),
            Block::new(6, BlockKind::Heading, "Known issues"),
        ])
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let index = self.index_of(id)?;
        Some(self.blocks.remove(index))
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// A locked document refuses new orders.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Random permutation, applied through the same owner contract a drag uses.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), OrderRejected> {
        let mut order = self.order();
        order.shuffle(rng);
        self.set_order(order)
    }
}

impl OrderOwner<BlockId> for BlockDocument {
    fn order(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    fn set_order(&mut self, order: Vec<BlockId>) -> Result<(), OrderRejected> {
        if self.locked {
            return Err(OrderRejected::new("document is locked"));
        }
        if order.len() != self.blocks.len() {
            return Err(OrderRejected::new("order does not cover every block"));
        }
        let mut by_id: HashMap<BlockId, Block> = self.blocks.iter().map(|b| (b.id, b.clone())).collect();
        let mut next = Vec::with_capacity(order.len());
        for id in order {
            match by_id.remove(&id) {
                Some(block) => next.push(block),
                None => return Err(OrderRejected::new(format!("unknown or repeated block {}", id.0))),
            }
        }
        self.blocks = next;
        Ok(())
    }
}

/// Seeded from the OS; falls back to the page clock.
pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    if getrandom::fill(&mut buf).is_err() {
        tracing::warn!("getrandom unavailable, seeding from the clock");
        buf[..8].copy_from_slice(&(crate::dom::now_ms() as u64).to_le_bytes());
    }
    SmallRng::from_seed(buf)
}

use uuid::Uuid;

use super::commands::{Cmd, EditError};
use super::upload::{AttachError, UploadService};
use crate::schema::{Block, BlockData, Document, ImageFile, MIN_CARDS, TextAlignTune};

/// Fired after every successful mutation with the new document state.
pub type ChangeObserver = Box<dyn FnMut(&Document)>;

/// The authoritative in-memory document during an editing session.
///
/// One writer per document instance; concurrent-editor conflicts are the
/// persistence layer's concern. Every successful [`apply`](Self::apply)
/// bumps the version and fires the observer exactly once; rejected
/// commands leave both untouched.
pub struct EditorDocument {
    doc: Document,
    version: u64,
    observer: Option<ChangeObserver>,
}

impl EditorDocument {
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    pub fn from_document(doc: Document) -> Self {
        Self {
            doc,
            version: 0,
            observer: None,
        }
    }

    /// Install the change observer (the "notify of change" capability the
    /// owning surface uses for dirty signaling / debounced saves).
    pub fn set_observer(&mut self, observer: ChangeObserver) {
        self.observer = Some(observer);
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Monotonic edit counter; enables cheap change detection.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply one command. Either the command applies fully (version bump,
    /// observer fired) or it is rejected and the document is unchanged.
    pub fn apply(&mut self, cmd: Cmd) -> Result<(), EditError> {
        match cmd {
            Cmd::InsertBlock { index, data } => {
                let index = index.min(self.doc.blocks.len());
                let block = Block::new(data).with_id(generate_block_id());
                self.doc.blocks.insert(index, block);
            }
            Cmd::RemoveBlock { id } => {
                let index = self.position(&id)?;
                self.doc.blocks.remove(index);
            }
            Cmd::MoveBlock { id, to } => {
                let from = self.position(&id)?;
                if to >= self.doc.blocks.len() {
                    return Err(EditError::IndexOutOfRange {
                        index: to,
                        len: self.doc.blocks.len(),
                    });
                }
                let block = self.doc.blocks.remove(from);
                self.doc.blocks.insert(to, block);
            }
            Cmd::ReplaceData { id, data } => {
                let index = self.position(&id)?;
                self.doc.blocks[index].data = data.normalized();
            }
            Cmd::SetAlignment { id, alignment } => {
                let index = self.position(&id)?;
                self.doc.blocks[index].tunes.text_align =
                    alignment.map(|alignment| TextAlignTune { alignment });
            }
            Cmd::AddCard { id, card } => {
                let cards = self.card_grid_mut(&id)?;
                cards.cards.push(card);
            }
            Cmd::RemoveCard { id, index } => {
                let cards = self.card_grid_mut(&id)?;
                if cards.cards.len() <= MIN_CARDS {
                    return Err(EditError::CardFloor);
                }
                if index >= cards.cards.len() {
                    return Err(EditError::CardIndexOutOfRange {
                        index,
                        len: cards.cards.len(),
                    });
                }
                cards.cards.remove(index);
            }
            Cmd::SetCardsPerRow { id, cards_per_row } => {
                let cards = self.card_grid_mut(&id)?;
                cards.cards_per_row =
                    cards_per_row.clamp(crate::schema::MIN_CARDS_PER_ROW, crate::schema::MAX_CARDS_PER_ROW);
            }
        }
        self.committed();
        Ok(())
    }

    /// Upload a file through the injected service and attach the resulting
    /// URL to an image or column block. The engine does not retry; an
    /// upload failure leaves the document untouched.
    pub fn attach_image(
        &mut self,
        id: &str,
        service: &dyn UploadService,
        bytes: &[u8],
        filename: &str,
    ) -> Result<(), AttachError> {
        let index = self.position(id)?;
        let uploaded = service.upload(bytes, filename)?;
        match &mut self.doc.blocks[index].data {
            BlockData::Image(image) => {
                image.file = Some(ImageFile { url: uploaded.url });
            }
            BlockData::Column(column) => {
                column.image_url = Some(uploaded.url);
            }
            _ => return Err(AttachError::Edit(EditError::NotAnImageHost(id.to_string()))),
        }
        self.committed();
        Ok(())
    }

    fn committed(&mut self) {
        self.version += 1;
        let doc = &self.doc;
        if let Some(observer) = self.observer.as_mut() {
            observer(doc);
        }
    }

    fn position(&self, id: &str) -> Result<usize, EditError> {
        self.doc
            .blocks
            .iter()
            .position(|b| b.id.as_deref() == Some(id))
            .ok_or_else(|| EditError::UnknownBlock(id.to_string()))
    }

    fn card_grid_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut crate::schema::ContentCardsData, EditError> {
        let index = self.position(id)?;
        match &mut self.doc.blocks[index].data {
            BlockData::ContentCards(cards) => Ok(cards),
            _ => Err(EditError::NotACardGrid(id.to_string())),
        }
    }
}

impl Default for EditorDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_block_id() -> String {
    Uuid::new_v4().to_string()
}

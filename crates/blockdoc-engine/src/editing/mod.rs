/*!
 * # Editing Core Module
 *
 * Command-based mutation of a block document, decoupled from any editing
 * framework. The interactive surface translates UI events into [`Cmd`]
 * values; the engine owns the authoritative document state.
 *
 * Key principles:
 *
 * ### 1. Single Source of Truth
 * [`EditorDocument`] owns the [`crate::schema::Document`]. Widgets never
 * hold live references to block data; they read a slice, build a `Cmd`,
 * and receive the replacement value through the next read.
 *
 * ### 2. Command-Based Editing
 * All edits flow through [`EditorDocument::apply`]. A command either
 * applies fully (version bump, observer fired once) or is rejected with an
 * [`EditError`] leaving the document untouched - there are no partial
 * mutations.
 *
 * ### 3. Change Notification as a Capability
 * The engine never persists anything itself. The owning surface installs a
 * change observer, and every successful mutation fires it exactly once;
 * what the observer does (debounced save, dirty flag) is the caller's
 * business. Observers must be cheap and idempotent.
 *
 * ### 4. Injected Upload Capability
 * Binary uploads go through the [`upload::UploadService`] trait handed in
 * by the host. The engine consumes the returned URL opaquely, never
 * inspects file bytes, and never retries - failures propagate so the
 * surface can show a retry affordance.
 */

pub mod commands;
pub mod document;
pub mod upload;

pub use commands::{Cmd, EditError};
pub use document::{ChangeObserver, EditorDocument};
pub use upload::{AttachError, UploadError, UploadService, UploadedFile};

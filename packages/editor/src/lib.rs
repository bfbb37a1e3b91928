//! # Pagecraft Editor
//!
//! Core document editing engine for Pagecraft.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: .page.json ↔ page tree            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Load/save documents                      │
//! │  - Apply mutations with validation          │
//! │  - Track the current selection              │
//! │  - Derive the inspector form from schemas   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compilers: page tree → React / HTML         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The tree is source of truth**: generated code and previews are
//!    derived views
//! 2. **Validated mutations**: structural constraints are checked before
//!    anything changes; a rejected mutation leaves the tree untouched
//! 3. **Selection by id**: the store never owns the selected node, it
//!    holds an id that may dangle after a subtree deletion
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{Document, EditorState};
//! use pagecraft_registry::Registry;
//!
//! // Load document
//! let doc = Document::load("home.page.json".into())?;
//! let mut state = EditorState::new(doc);
//!
//! // Drop a block onto the canvas
//! let id = state.add_node("root", "Hero", None)?;
//!
//! // Edit it through the inspector
//! let form = pagecraft_editor::inspect(&state, Registry::global());
//! ```

mod document;
mod errors;
mod inspector;
mod mutations;
mod state;

pub use document::{Document, DocumentStorage};
pub use errors::EditorError;
pub use inspector::{inspect, FormField, InspectorForm};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use state::EditorState;

// Re-export common types for convenience
pub use pagecraft_document::PageNode;

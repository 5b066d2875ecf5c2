/// Reusable view pieces
///
/// - `card.rs` - scheme cards, the results grid and the empty state
/// - `modal.rs` - dimmed overlay used by both dialogs
/// - `toast.rs` - transient notifications

pub mod card;
pub mod modal;
pub mod toast;

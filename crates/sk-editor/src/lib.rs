pub mod cursor;
pub mod editor;
pub mod history;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use cursor::CursorStyle;
pub use editor::{Action, Editor, EditorContext, TextEditRequest};
pub use history::HistoryStore;
pub use input::{InputEvent, KeyState, Modifiers};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::ToolKind;

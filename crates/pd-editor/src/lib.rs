pub mod history;
pub mod persist;
pub mod session;
pub mod shortcuts;

pub use history::{History, Snapshot};
pub use persist::{DocumentStore, MemoryStore, STORAGE_KEY, load_session, save_session};
pub use session::EditorSession;
pub use shortcuts::{HELP, ShortcutAction, ShortcutHelp, ShortcutMap};

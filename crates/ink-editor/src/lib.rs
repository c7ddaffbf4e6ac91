pub mod input;
pub mod picker;
pub mod selection;
pub mod session;
pub mod shortcuts;
pub mod stroke;

pub use input::{InputEvent, Modifiers, PointerButton};
pub use picker::{ColorPicker, PickError};
pub use selection::Selection;
pub use session::{CanvasSession, MAX_LINE_WIDTH, MIN_LINE_WIDTH, Mode, SessionConfig};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use stroke::StrokeCapture;

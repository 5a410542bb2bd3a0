mod format;
mod pipeline;
mod session;
mod types;

pub use format::render_emphasis;
pub use pipeline::ChatPipeline;
pub use session::ChatSession;
pub use types::{Message, Role, Transcript};

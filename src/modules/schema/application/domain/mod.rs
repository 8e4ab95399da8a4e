pub mod defaults;
pub mod entities;
pub mod policies;
pub mod preview;
pub mod slug;
pub mod validation;

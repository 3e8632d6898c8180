mod mirror;
mod translate;

pub use mirror::Mirror;
pub use translate::Translate;

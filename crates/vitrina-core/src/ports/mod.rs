pub mod preference;

pub use preference::{MemoryPreferenceStore, PreferenceStore};

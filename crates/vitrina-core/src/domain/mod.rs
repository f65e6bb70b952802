pub mod artist;
pub mod contacts;
pub mod content;
pub mod ids;
pub mod release;
pub mod release_type;
pub mod show;

mod serde_helpers;

pub use artist::{Artist, ArtistTranslation, Channels, Hero};
pub use contacts::{ContactTranslation, Contacts, Social};
pub use content::ContentModel;
pub use ids::ReleaseId;
pub use release::{PlatformLink, Release, Track};
pub use release_type::ReleaseType;
pub use show::{Show, ShowStatus};

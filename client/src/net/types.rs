//! Wire DTOs used by pages and the REST layer.

pub use wire::ApiError;
pub use wire::auth::{LoginForm, RegisterRequest, Role, TokenResponse, UserProfile};
pub use wire::campaign::{Audience, Campaign, CampaignForm};
pub use wire::chat::{ChatMessage, ChatReply, Sender};
pub use wire::content::{ContentDraft, ContentType, GenerateContentRequest, Tone};
pub use wire::endpoints::DownloadOptions;
pub use wire::leads::{Lead, LeadBand, ScoringMode};

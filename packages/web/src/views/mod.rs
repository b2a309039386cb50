mod communities;
mod feed;
mod login;
mod moodboard;
mod new_post;
mod onboarding;
mod profile;
mod register;

pub use communities::Communities;
pub use feed::Feed;
pub use login::Login;
pub use moodboard::Moodboard;
pub use new_post::NewPost;
pub use onboarding::Onboarding;
pub use profile::Profile;
pub use register::Register;

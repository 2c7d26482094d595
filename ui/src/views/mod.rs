mod campaigns;
mod messages;
mod users;

pub use campaigns::Campaigns;
pub use messages::Messages;
pub use users::Users;

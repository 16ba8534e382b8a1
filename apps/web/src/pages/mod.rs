// Server-rendered HTML views: the navigation shell and the static Home and
// About pages. Upload and results views live with their flows.

pub mod about;
pub mod content;
pub mod handlers;
pub mod home;
pub mod layout;

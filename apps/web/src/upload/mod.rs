// Upload flow: multipart form parsing, file validation, the submission state
// machine, and the upload view.

pub mod flow;
pub mod form;
pub mod handlers;
pub mod validation;
pub mod view;

// Results: the presenter that reads the session store, and the four-tab view.

pub mod handlers;
pub mod presenter;
pub mod view;

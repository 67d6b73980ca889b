pub mod admin;
pub mod order;
pub mod partner;
pub mod request;
pub mod site;
pub mod slide;
pub mod software;
pub mod ticket;
pub mod trial;

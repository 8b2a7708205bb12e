//! Partner profile command and query handlers.

mod create_partner;
mod delete_partner;
mod get_partner;
mod update_partner;

pub use create_partner::{CreatePartnerCommand, CreatePartnerHandler};
pub use delete_partner::{DeletePartnerCommand, DeletePartnerHandler};
pub use get_partner::{GetPartnerHandler, GetPartnerQuery};
pub use update_partner::{UpdatePartnerCommand, UpdatePartnerHandler};

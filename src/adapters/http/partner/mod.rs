//! HTTP adapter for partner profile endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreatePartnerRequest, PartnerResponse, PartnerSettings, UpdatePartnerRequest};
pub use handlers::PartnerHandlers;
pub use routes::partner_routes;

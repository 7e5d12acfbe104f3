//! Client for the Langflow flows API.
//!
//! Only one flow is addressed: the one named by `FLOW_ID` on the Langflow
//! instance at `LANGFLOW_URL`. [`LangflowApi`] is the seam the flow service
//! depends on; [`LangflowClient`] implements it over HTTP.

pub mod client;
pub mod errors;

pub use client::{LangflowApi, LangflowClient};
pub use errors::LangflowError;

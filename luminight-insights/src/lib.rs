//! Narrative night-sky insights for scored locations.
//!
//! The crate sits on the async side of the LumiNight engine. It turns a
//! [`luminight_core::SkySnapshot`] into an [`InsightRequest`], asks an
//! [`InsightGenerator`] for [`SkyInsights`] and, through [`InsightSession`],
//! guarantees that a superseded request can never overwrite a newer result.
//!
//! [`GeminiInsightGenerator`] is the production generator. Tests and demos
//! use [`test_support::StubInsightGenerator`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub mod gemini;
mod generator;
mod prompt;
mod request;
mod session;

#[doc(hidden)]
pub mod test_support;

pub use error::{GeneratorBuildError, InsightError};
pub use gemini::{GeminiConfig, GeminiInsightGenerator, parse_insights};
pub use generator::InsightGenerator;
pub use prompt::build_prompt;
pub use request::{InsightRequest, SkyInsights};
pub use session::{InsightSession, InsightState};

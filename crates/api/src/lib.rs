//! `reprice-api` — HTTP serving adapter for the pricing decision engine.
//!
//! One operation: price a line item. The handler derives the feature vector
//! the demand model was trained on, invokes the injected estimator, then the
//! same [`reprice_pricing::decide`] function the batch runner uses, and
//! rounds only at this boundary.

pub mod app;

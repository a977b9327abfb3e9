//! `bus-service` — stop-visit orchestration for the `ringbus` simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`service`]  | `Service` — the cabin/route context and visit loop   |
//! | [`report`]   | `BoardingReport`, `AlightingReport`, `ServiceStatus`, `StopVisit`, … |
//! | [`model`]    | `PassengerModel` trait, `StopAction`, `NoPassengers` |
//! | [`observer`] | `ServiceObserver` trait, `NoopObserver`              |
//!
//! # Errors
//!
//! This crate defines no error type of its own.  The one fallible visit
//! operation is alighting, and it surfaces `bus_cabin::CabinError`
//! unchanged; cabin and route errors never mix inside a single operation,
//! so an umbrella enum would add wrapping without information.

pub mod model;
pub mod observer;
pub mod report;
pub mod service;


pub use model::{NoPassengers, PassengerModel, StopAction};
pub use observer::{NoopObserver, ServiceObserver};
pub use report::{
    AlightingReport, BoardingReport, PassReport, ServiceStatus, StopStats, StopVisit,
};
pub use service::Service;

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Page components and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`event`]: Click routes, bindings and keys shared with the hosts
//! - [`selectors`]: The markup contract (class names and selectors)
//! - Components: [`lightbox`], [`carousel`], [`slider`], [`chrome`],
//!   [`menu`], [`reveal`]
//!
//! # Architecture
//!
//! Each component discovers its elements once through the [`Page`] port,
//! describes the listeners it needs as [`Binding`]s and then reacts to routed
//! events. Deferred work goes through the [`Scheduler`] port.
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The `app` layer composes the components into a site
//!
//! [`Page`]: port::Page
//! [`Scheduler`]: port::Scheduler
//! [`Binding`]: event::Binding

pub mod carousel;
pub mod chrome;
pub mod event;
pub mod lightbox;
pub mod menu;
pub mod port;
pub mod reveal;
pub mod selectors;
pub mod slider;

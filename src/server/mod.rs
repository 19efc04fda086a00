//! Server-side API backend and seeding workflow.
//!
//! This module contains the backend implementation: the document CRUD API, the
//! document store built on SeaORM, and the fixture seeder that loads JSON files into
//! named collections.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations on collections and documents
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication guard
//! - **Seed** (`seed/`) - Fixture discovery, collection reconciliation, bulk insert, orchestration
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, JWT secret)
//! - **Startup** (`startup`) - Logging, database connection, startup seeding, serving
//! - **Router** (`router`) - Axum route configuration and API documentation

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

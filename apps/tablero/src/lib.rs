//! # Tablero
//!
//! Client for a registros backend: browse the dataset, upload
//! spreadsheets, download the export.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  apps/tablero (THE BINARY)               │
//! │                                                          │
//! │  ┌──────────┐   ┌─────────────────┐   ┌──────────────┐   │
//! │  │   CLI    │──►│ PageController  │──►│ TableroClient│──► backend
//! │  │  (clap)  │   │ (load / submit) │   │  (reqwest)   │   │
//! │  └──────────┘   └────────┬────────┘   └──────────────┘   │
//! │                          ▼                               │
//! │                  ┌───────────────┐                       │
//! │                  │ tablero-core  │                       │
//! │                  │ (model, views)│                       │
//! │                  └───────────────┘                       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod terminal;

pub use client::{Backend, TableroClient};
pub use config::ClientConfig;
pub use controller::{PageController, SubmitOutcome};

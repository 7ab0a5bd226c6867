// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{
    config::SuiConfig,
    sui::{SuiClient, SuiService},
};

/// Shared by every handler. Immutable after startup, so no locking.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SuiService>,
}

impl AppState {
    pub fn new(service: SuiService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn from_config(config: &SuiConfig) -> Self {
        Self::new(SuiService::new(SuiClient::from_config(config)))
    }
}

// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analyzer;
pub mod extractor;
pub mod fetcher;
pub mod llm;
pub mod logging;
pub mod prompt;
pub mod reconciler;
pub mod scorer;

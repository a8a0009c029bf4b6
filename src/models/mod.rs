// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analysis;
pub mod category;
pub mod config;
pub mod page;
pub mod service;

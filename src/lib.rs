// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod argocd;
pub mod config;
pub mod constants;
pub mod enroll;
pub mod error;
pub mod health;
pub mod names;
pub mod reconcilers;

#[cfg(test)]
pub mod test_utils;

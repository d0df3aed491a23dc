// SPDX-License-Identifier: MPL-2.0
//! Styles for toast surfaces.

pub mod container;
